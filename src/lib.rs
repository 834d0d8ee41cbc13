//! # txdiff
//!
//! Field-level comparison of decoded blockchain transactions, for
//! diagnosing why two independently constructed transactions are not
//! byte-identical.
//!
//! The crate operates on already-decoded structures (see [`types`]);
//! binary CBOR decoding, CLI parsing, and output rendering live outside
//! this crate. Three layers build on each other:
//!
//! - [`tree`] — recursive differ over untyped decoded trees, emitting
//!   path-annotated messages
//! - [`collection`] — count-first positional comparison of datum,
//!   redeemer, script-hash, and input collections
//! - [`compare`] — transaction-level orchestration into a single
//!   [`ComparisonResult`]
//!
//! All comparison functions are pure and deterministic: the same two
//! inputs always produce byte-identical message sequences.
//!
//! ## Usage
//!
//! ```rust
//! use txdiff::{TxComparator, Transaction, WitnessSet};
//!
//! let comparator = TxComparator::new();
//! let tx = Transaction {
//!     script_data_hash: None,
//!     input_count: 0,
//!     output_count: 1,
//!     fee: "171573".to_string(),
//!     ttl: None,
//!     validity_start: None,
//!     required_signers: vec![],
//!     witness_set: WitnessSet::default(),
//!     inputs: vec![],
//! };
//!
//! let result = comparator.compare_transactions(&tx, &tx.clone()).unwrap();
//! assert!(result.script_data_hash_match);
//! assert!(result.input_order_match);
//! ```

pub mod collection;
pub mod compare;
pub mod constants;
pub mod error;
pub mod tree;
pub mod types;

// Re-export commonly used types
pub use constants::*;
pub use error::{CompareError, Result};
pub use tree::{tree_diff, DiffPath, TreeValue};
pub use types::*;

/// Entry point for transaction comparison
///
/// # Examples
///
/// ```
/// use txdiff::{TxComparator, TreeValue};
///
/// let comparator = TxComparator::new();
/// let diffs = comparator.tree_diff(
///     &TreeValue::from(serde_json::json!({"a": {"b": [1, 2]}})),
///     &TreeValue::from(serde_json::json!({"a": {"b": [1, 3]}})),
/// ).unwrap();
/// assert_eq!(diffs, vec!["Value differs at a.b[1]: 2 vs 3"]);
/// ```
pub struct TxComparator;

impl TxComparator {
    /// Create a new comparator instance
    pub fn new() -> Self {
        Self
    }

    /// Compare two decoded transactions into an aggregate result
    ///
    /// # Examples
    ///
    /// ```
    /// use txdiff::{TxComparator, Transaction, WitnessSet, Input};
    ///
    /// let comparator = TxComparator::new();
    /// let tx1 = Transaction {
    ///     script_data_hash: Some("ab".repeat(32)),
    ///     input_count: 1,
    ///     output_count: 1,
    ///     fee: "171573".to_string(),
    ///     ttl: None,
    ///     validity_start: None,
    ///     required_signers: vec![],
    ///     witness_set: WitnessSet::default(),
    ///     inputs: vec![Input { tx_hash: "aa".repeat(32), index: 0 }],
    /// };
    /// let mut tx2 = tx1.clone();
    /// tx2.inputs[0].index = 1;
    ///
    /// let result = comparator.compare_transactions(&tx1, &tx2).unwrap();
    /// assert!(result.script_data_hash_match);
    /// assert!(!result.input_order_match);
    /// assert_eq!(result.input_differences.len(), 1);
    /// ```
    pub fn compare_transactions(
        &self,
        tx1: &Transaction,
        tx2: &Transaction,
    ) -> Result<ComparisonResult> {
        compare::compare_transactions(tx1, tx2)
    }

    /// Compare two witness sets into a flat list of difference messages
    ///
    /// # Examples
    ///
    /// ```
    /// use txdiff::{TxComparator, WitnessSet};
    ///
    /// let comparator = TxComparator::new();
    /// let diffs = comparator
    ///     .compare_witness_sets(&WitnessSet::default(), &WitnessSet::default())
    ///     .unwrap();
    /// assert!(diffs.is_empty());
    /// ```
    pub fn compare_witness_sets(
        &self,
        ws1: &WitnessSet,
        ws2: &WitnessSet,
    ) -> Result<Vec<String>> {
        collection::compare_witness_sets(ws1, ws2)
    }

    /// Diff two decoded trees, returning path-annotated messages
    pub fn tree_diff(&self, a: &TreeValue, b: &TreeValue) -> Result<Vec<String>> {
        tree::tree_diff(a, b)
    }
}

impl Default for TxComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comparator_construction() {
        let _ = TxComparator::new();
        let _ = TxComparator::default();
    }

    #[test]
    fn test_facade_tree_diff_delegates() {
        let comparator = TxComparator::new();
        let a = TreeValue::from(json!({"x": 1}));
        let b = TreeValue::from(json!({"x": 2}));
        let diffs = comparator.tree_diff(&a, &b).unwrap();
        assert_eq!(diffs, vec!["Value differs at x: 1 vs 2"]);
    }

    #[test]
    fn test_facade_witness_sets_delegates() {
        let comparator = TxComparator::new();
        let ws1 = WitnessSet {
            native_script_count: 1,
            ..WitnessSet::default()
        };
        let ws2 = WitnessSet::default();
        let diffs = comparator.compare_witness_sets(&ws1, &ws2).unwrap();
        assert_eq!(diffs, vec!["Native script count differs: 1 vs 0"]);
    }
}
