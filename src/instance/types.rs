//! Item and instance definitions.

/// One knapsack item.
///
/// The value-to-weight ratio is derived once at construction and can only
/// be read, so it always agrees with `weight` and `value`. An item with
/// zero weight has ratio `0.0`.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::Item;
///
/// let item = Item::new(1, 20, 100);
/// assert_eq!(item.id(), 1);
/// assert!((item.ratio() - 5.0).abs() < 1e-12);
///
/// assert_eq!(Item::new(2, 0, 40).ratio(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: usize,
    weight: u64,
    value: u64,
    ratio: f64,
}

impl Item {
    /// Creates an item and computes its ratio.
    pub fn new(id: usize, weight: u64, value: u64) -> Self {
        let ratio = if weight > 0 {
            value as f64 / weight as f64
        } else {
            0.0
        };
        Self {
            id,
            weight,
            value,
            ratio,
        }
    }

    /// 1-based identifier assigned at load time.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Value divided by weight, or `0.0` for weightless items.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// An immutable problem instance: a capacity and an ordered item list.
///
/// Strategies never reorder the instance itself. Each one takes its own
/// working copy through [`Instance::items_copy`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    capacity: u64,
    items: Vec<Item>,
}

impl Instance {
    /// Builds an instance from `(weight, value)` pairs.
    ///
    /// Ids are assigned 1, 2, ... in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::instance::Instance;
    ///
    /// let instance = Instance::new(50, &[(10, 60), (20, 100), (30, 120)]);
    /// assert_eq!(instance.len(), 3);
    /// assert_eq!(instance.items()[2].id(), 3);
    /// ```
    pub fn new(capacity: u64, pairs: &[(u64, u64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item::new(i + 1, weight, value))
            .collect();
        Self { capacity, items }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in their original input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// An owned working copy of the items, safe to sort or shuffle.
    pub fn items_copy(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|item| Item::new(item.id, item.weight, item.value))
            .collect()
    }

    /// Looks up an item by its 1-based id.
    pub fn item(&self, id: usize) -> Option<&Item> {
        id.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Sum of all item weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.weight))
    }

    /// Sum of all item values, saturating at `u64::MAX`.
    pub fn total_value(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.value))
    }
}
