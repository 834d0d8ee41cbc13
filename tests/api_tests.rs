//! Tests for the public TxComparator API

use txdiff::*;

fn empty_tx() -> Transaction {
    Transaction {
        script_data_hash: None,
        input_count: 0,
        output_count: 0,
        fee: "0".to_string(),
        ttl: None,
        validity_start: None,
        required_signers: vec![],
        witness_set: WitnessSet::default(),
        inputs: vec![],
    }
}

#[test]
fn test_tx_comparator_new() {
    let comparator = TxComparator::new();
    let result = comparator.compare_transactions(&empty_tx(), &empty_tx()).unwrap();
    assert!(result.script_data_hash_match);
    assert!(result.input_order_match);
}

#[test]
fn test_tx_comparator_default() {
    let comparator = TxComparator::default();
    let result = comparator.compare_transactions(&empty_tx(), &empty_tx()).unwrap();
    assert!(result.witness_set_differences.is_empty());
}

#[test]
fn test_compare_transactions_reports_input_mismatch() {
    let comparator = TxComparator::new();

    let mut tx1 = empty_tx();
    tx1.inputs = vec![
        Input { tx_hash: "aa".repeat(32), index: 0 },
        Input { tx_hash: "bb".repeat(32), index: 1 },
    ];
    tx1.input_count = 2;

    let mut tx2 = tx1.clone();
    tx2.inputs.swap(0, 1);

    let result = comparator.compare_transactions(&tx1, &tx2).unwrap();
    assert!(!result.input_order_match);
    // Swapped inputs differ at both positions.
    assert_eq!(result.input_differences.len(), 2);
}

#[test]
fn test_compare_witness_sets_flat_list() {
    let comparator = TxComparator::new();
    let ws1 = WitnessSet {
        script_hashes: Some(vec!["aa".repeat(28), "bb".repeat(28)]),
        ..WitnessSet::default()
    };
    let ws2 = WitnessSet {
        script_hashes: Some(vec!["aa".repeat(28)]),
        ..WitnessSet::default()
    };
    let diffs = comparator.compare_witness_sets(&ws1, &ws2).unwrap();
    assert_eq!(diffs, vec!["Script hash count differs: 2 vs 1"]);
}

#[test]
fn test_tree_diff_via_facade() {
    let comparator = TxComparator::new();
    let a = TreeValue::from(serde_json::json!([1, "x", {"k": true}]));
    let b = TreeValue::from(serde_json::json!([1, "x", {"k": false}]));
    let diffs = comparator.tree_diff(&a, &b).unwrap();
    assert_eq!(diffs, vec!["Value differs at [2].k: true vs false"]);
}

#[test]
fn test_max_depth_surfaces_as_error() {
    let comparator = TxComparator::new();
    let mut v = TreeValue::from(serde_json::json!(0));
    for _ in 0..=MAX_TREE_DEPTH {
        v = TreeValue::Array(vec![v]);
    }
    let err = comparator.tree_diff(&v, &v).unwrap_err();
    assert!(matches!(err, CompareError::MaxDepthExceeded { .. }));
    assert!(err.to_string().contains("Maximum tree depth exceeded"));
}
