//! Line-oriented instance format.
//!
//! ```text
//! n capacity
//! weight_1 value_1
//! ...
//! weight_n value_n
//! ```
//!
//! Fields are separated by any whitespace and blank lines are skipped.
//! Lines after the n-th item are ignored.

use super::types::Instance;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an instance.
///
/// Line numbers are 1-based and refer to the raw input, blank lines
/// included.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    #[error("instance input is empty")]
    Empty,

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {field} `{token}` is not an integer")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("line {line}: {field} must be non-negative, got {value}")]
    Negative {
        line: usize,
        field: &'static str,
        value: i64,
    },

    #[error("line {line}: unexpected extra field `{token}`")]
    ExtraField { line: usize, token: String },

    #[error("expected {expected} items, found {found}")]
    ItemCountMismatch { expected: usize, found: usize },
}

/// Reads and parses an instance file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<Instance, InstanceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let instance = parse_instance(&text)?;
    log::debug!(
        "loaded {} items (capacity {}) from {}",
        instance.len(),
        instance.capacity(),
        path.display()
    );
    Ok(instance)
}

/// Parses an instance from text.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::parse_instance;
///
/// let instance = parse_instance("3 50\n10 60\n20 100\n30 120\n").unwrap();
/// assert_eq!(instance.capacity(), 50);
/// assert_eq!(instance.len(), 3);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(InstanceError::Empty)?;
    let [n, capacity] = parse_pair(header_line, header, ["item count", "capacity"])?;
    let n = usize::try_from(n).unwrap_or(usize::MAX);

    // the header count is untrusted until the item lines are read
    let mut pairs = Vec::with_capacity(n.min(1024));
    for (line, content) in lines.by_ref().take(n) {
        let [weight, value] = parse_pair(line, content, ["weight", "value"])?;
        pairs.push((weight, value));
    }

    if pairs.len() < n {
        return Err(InstanceError::ItemCountMismatch {
            expected: n,
            found: pairs.len(),
        });
    }

    let ignored = lines.count();
    if ignored > 0 {
        log::warn!("ignoring {ignored} line(s) after the last item");
    }

    Ok(Instance::new(capacity, &pairs))
}

/// Parses exactly two non-negative integers from one line.
fn parse_pair(
    line: usize,
    content: &str,
    fields: [&'static str; 2],
) -> Result<[u64; 2], InstanceError> {
    let mut tokens = content.split_whitespace();
    let mut out = [0u64; 2];

    for (slot, field) in out.iter_mut().zip(fields) {
        let token = tokens
            .next()
            .ok_or(InstanceError::MissingField { line, field })?;
        *slot = parse_field(line, field, token)?;
    }

    if let Some(token) = tokens.next() {
        return Err(InstanceError::ExtraField {
            line,
            token: token.to_string(),
        });
    }

    Ok(out)
}

fn parse_field(line: usize, field: &'static str, token: &str) -> Result<u64, InstanceError> {
    let value: i64 = token.parse().map_err(|_| InstanceError::InvalidNumber {
        line,
        field,
        token: token.to_string(),
    })?;
    if value < 0 {
        return Err(InstanceError::Negative { line, field, value });
    }
    Ok(value as u64)
}
