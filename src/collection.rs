//! Count-first positional comparison of witness-set and input collections
//!
//! Every category compares lengths first: when they differ, exactly one
//! count message is emitted and no element-level comparison is attempted.
//! Alignment is strictly positional; there is no LCS-style sequence
//! diffing.

use crate::constants::HEX_PREVIEW_LEN;
use crate::error::Result;
use crate::tree::tree_diff;
use crate::types::{Datum, Input, Redeemer, WitnessSet};

/// Truncate a hex string for display: first `HEX_PREVIEW_LEN` characters
/// plus a continuation ellipsis. Shorter strings pass through untouched.
pub fn hex_preview(hex: &str) -> String {
    if hex.len() > HEX_PREVIEW_LEN {
        format!("{}...", &hex[..HEX_PREVIEW_LEN])
    } else {
        hex.to_string()
    }
}

/// Count-first check shared by all categories. Returns true when the
/// lengths match; otherwise pushes the single count message.
fn counts_match(category: &str, n1: usize, n2: usize, diffs: &mut Vec<String>) -> bool {
    if n1 != n2 {
        diffs.push(format!("{} count differs: {} vs {}", category, n1, n2));
        return false;
    }
    true
}

/// Compare datum lists by canonical hex encoding, appending the tree
/// diff of the decoded forms for each mismatching position.
pub fn compare_datums(tx1: &[Datum], tx2: &[Datum]) -> Result<Vec<String>> {
    let mut diffs = Vec::new();
    if !counts_match("Datum", tx1.len(), tx2.len(), &mut diffs) {
        return Ok(diffs);
    }
    for (i, (d1, d2)) in tx1.iter().zip(tx2.iter()).enumerate() {
        if d1.hex != d2.hex {
            diffs.push(format!(
                "Datum at index {} differs\n  TX1: {}\n  TX2: {}",
                i,
                hex_preview(&d1.hex),
                hex_preview(&d2.hex)
            ));
            diffs.extend(tree_diff(&d1.json, &d2.json)?);
        }
    }
    Ok(diffs)
}

/// Compare redeemer lists field by field
///
/// Tag, index, payload hex, and execution units are compared
/// independently; a single redeemer may emit several messages.
pub fn compare_redeemers(tx1: &[Redeemer], tx2: &[Redeemer]) -> Result<Vec<String>> {
    let mut diffs = Vec::new();
    if !counts_match("Redeemer", tx1.len(), tx2.len(), &mut diffs) {
        return Ok(diffs);
    }
    for (i, (r1, r2)) in tx1.iter().zip(tx2.iter()).enumerate() {
        if r1.tag != r2.tag {
            diffs.push(format!(
                "Redeemer at index {} tag differs: {} vs {}",
                i, r1.tag, r2.tag
            ));
        }
        if r1.index != r2.index {
            diffs.push(format!(
                "Redeemer at index {} index differs: {} vs {}",
                i, r1.index, r2.index
            ));
        }
        if r1.data_hex != r2.data_hex {
            diffs.push(format!(
                "Redeemer at index {} data differs\n  TX1: {}\n  TX2: {}",
                i,
                hex_preview(&r1.data_hex),
                hex_preview(&r2.data_hex)
            ));
            diffs.extend(tree_diff(&r1.data_json, &r2.data_json)?);
        }
        if r1.ex_units != r2.ex_units {
            diffs.push(format!(
                "Redeemer at index {} execution units differ: ({}, {}) vs ({}, {})",
                i, r1.ex_units.mem, r1.ex_units.steps, r2.ex_units.mem, r2.ex_units.steps
            ));
        }
    }
    Ok(diffs)
}

/// Compare script-hash lists by exact string equality
pub fn compare_script_hashes(tx1: &[String], tx2: &[String]) -> Vec<String> {
    let mut diffs = Vec::new();
    if !counts_match("Script hash", tx1.len(), tx2.len(), &mut diffs) {
        return diffs;
    }
    for (i, (h1, h2)) in tx1.iter().zip(tx2.iter()).enumerate() {
        if h1 != h2 {
            diffs.push(format!(
                "Script hash at index {} differs\n  TX1: {}\n  TX2: {}",
                i, h1, h2
            ));
        }
    }
    diffs
}

/// Compare input lists by (hash, index) pair at each position
pub fn compare_inputs(tx1: &[Input], tx2: &[Input]) -> Vec<String> {
    let mut diffs = Vec::new();
    if !counts_match("Input", tx1.len(), tx2.len(), &mut diffs) {
        return diffs;
    }
    for (i, (in1, in2)) in tx1.iter().zip(tx2.iter()).enumerate() {
        if in1 != in2 {
            diffs.push(format!(
                "Input at index {} differs (affects downstream index-dependent bindings)\n  TX1: {}#{}\n  TX2: {}#{}",
                i, in1.tx_hash, in1.index, in2.tx_hash, in2.index
            ));
        }
    }
    diffs
}

/// Compare two witness sets, concatenating category results in order:
/// datums, redeemers, script hashes, then the aggregate-only counters.
///
/// Absent collections read as empty.
pub fn compare_witness_sets(ws1: &WitnessSet, ws2: &WitnessSet) -> Result<Vec<String>> {
    let mut diffs = Vec::new();
    diffs.extend(compare_datums(
        ws1.datums.as_deref().unwrap_or(&[]),
        ws2.datums.as_deref().unwrap_or(&[]),
    )?);
    diffs.extend(compare_redeemers(
        ws1.redeemers.as_deref().unwrap_or(&[]),
        ws2.redeemers.as_deref().unwrap_or(&[]),
    )?);
    diffs.extend(compare_script_hashes(
        ws1.script_hashes.as_deref().unwrap_or(&[]),
        ws2.script_hashes.as_deref().unwrap_or(&[]),
    ));
    counts_match(
        "Native script",
        ws1.native_script_count as usize,
        ws2.native_script_count as usize,
        &mut diffs,
    );
    counts_match(
        "Verification key witness",
        ws1.vkey_witness_count as usize,
        ws2.vkey_witness_count as usize,
        &mut diffs,
    );
    counts_match(
        "Bootstrap witness",
        ws1.bootstrap_witness_count as usize,
        ws2.bootstrap_witness_count as usize,
        &mut diffs,
    );
    Ok(diffs)
}
