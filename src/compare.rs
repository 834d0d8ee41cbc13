//! Transaction comparison orchestrator
//!
//! Composes the per-field comparisons into a single `ComparisonResult`.
//! Pure aggregation over already-decoded inputs; the only failure that
//! can surface here is a propagated depth-ceiling error from the tree
//! differ.

use crate::collection;
use crate::error::Result;
use crate::types::{ComparisonResult, Transaction};
use tracing::debug;

/// Compare two decoded transactions
///
/// Script-data-hash equality is exact, including the both-absent case
/// (two `None` values count as a match). Input order is a match exactly
/// when the positional input comparison produced no differences.
pub fn compare_transactions(tx1: &Transaction, tx2: &Transaction) -> Result<ComparisonResult> {
    let script_data_hash_match = tx1.script_data_hash == tx2.script_data_hash;

    let input_differences = collection::compare_inputs(&tx1.inputs, &tx2.inputs);
    let input_order_match = input_differences.is_empty();

    let witness_set_differences =
        collection::compare_witness_sets(&tx1.witness_set, &tx2.witness_set)?;

    debug!(
        script_data_hash_match,
        input_order_match,
        input_differences = input_differences.len(),
        witness_set_differences = witness_set_differences.len(),
        "transaction comparison complete"
    );

    Ok(ComparisonResult {
        script_data_hash_match,
        input_order_match,
        witness_set_differences,
        input_differences,
    })
}
