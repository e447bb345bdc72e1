//! Core entropy calculation primitives.
//!
//! The calculator works from exact integer counts every time it is called,
//! so no floating-point error accumulates across sliding window steps.

use crate::entropy::table::FrequencyTable;

/// Computes Shannon entropy in bits from a frequency table.
///
/// `total` must be the sum of the table's counts and must be non-zero;
/// the sliding engine never evaluates an empty window. Only present
/// symbols are visited, so `log2(0)` never occurs.
///
/// The result does not depend on the order symbols were inserted.
#[inline]
pub fn entropy(table: &FrequencyTable, total: usize) -> f64 {
    debug_assert!(total > 0, "entropy of an empty window");
    debug_assert_eq!(table.len(), total, "total does not match table contents");

    let total = total as f64;
    let mut entropy = 0.0;

    for (_, count) in table.entries() {
        let p = (count as f64) / total;
        entropy -= p * p.log2();
    }

    entropy
}

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (e.g., all bytes are the same)
/// - 8.0 represents maximum randomness (uniform distribution)
///
/// An empty slice yields 0.0 by convention rather than an error.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let table = FrequencyTable::from_bytes(data);
    entropy(&table, data.len())
}

/// Upper bound on the entropy of a window of `window_size` bytes.
#[inline]
pub fn max_entropy(window_size: usize) -> f64 {
    if window_size == 0 {
        return 0.0;
    }
    (window_size.min(256) as f64).log2()
}
