//! Stable multi-key sort.

use super::types::OrderKey;
use crate::instance::Item;
use std::cmp::Ordering;

/// Sorts items by one or more [`OrderKey`]s.
///
/// Keys are applied in order: a later key is only consulted when every
/// earlier key scores two items exactly equal. Items that tie on all keys
/// keep their relative input order (stable sort).
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::Instance;
/// use u_knapsack::ordering::{ByValue, ByWeight, ItemOrdering};
///
/// let instance = Instance::new(10, &[(4, 5), (2, 5), (1, 9)]);
/// let ordering = ItemOrdering::new().with_key(ByValue).with_key(ByWeight);
///
/// let sorted = ordering.sort(instance.items_copy());
/// let ids: Vec<usize> = sorted.iter().map(|i| i.id()).collect();
/// assert_eq!(ids, vec![3, 2, 1]);
/// ```
pub struct ItemOrdering {
    keys: Vec<Box<dyn OrderKey>>,
}

impl ItemOrdering {
    /// Creates an ordering with no keys (input order is kept).
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates an ordering from a single key.
    pub fn by<K: OrderKey + 'static>(key: K) -> Self {
        Self::new().with_key(key)
    }

    /// Appends a key. Later keys only break ties of earlier ones.
    pub fn with_key<K: OrderKey + 'static>(mut self, key: K) -> Self {
        self.keys.push(Box::new(key));
        self
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the names of all keys in order.
    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(|k| k.name()).collect()
    }

    /// Returns indices into `items` in packing order.
    pub fn sort_indices(&self, items: &[Item]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.keys.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.keys.iter().map(|k| k.score(item)).collect())
            .collect();

        // `sort_by` is stable, so full ties keep input order.
        indices.sort_by(|&a, &b| {
            scores[a]
                .iter()
                .zip(&scores[b])
                .map(|(sa, sb)| sa.partial_cmp(sb).unwrap_or(Ordering::Equal))
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        indices
    }

    /// Consumes a working copy and returns it in packing order.
    pub fn sort(&self, items: Vec<Item>) -> Vec<Item> {
        let order = self.sort_indices(&items);
        order.into_iter().map(|i| items[i]).collect()
    }
}

impl Default for ItemOrdering {
    fn default() -> Self {
        Self::new()
    }
}
