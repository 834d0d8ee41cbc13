//! Decoded transaction model
//!
//! These are read-only views produced by the external CBOR decoder; the
//! comparator never mutates them. Fields that can exceed the 53-bit-safe
//! integer range on ledger data (fee, redeemer index, execution units)
//! are carried as decimal strings and never narrowed to bounded integers.

use crate::tree::TreeValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a prior transaction's output being consumed
///
/// Identity is the (hash, index) pair. Order within the owning
/// transaction is semantically significant: it determines external
/// redeemer-index binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    /// Source-transaction hash (fixed-length hex string)
    pub tx_hash: String,
    /// Output index within the source transaction
    pub index: u64,
}

/// Auxiliary data attached to a witness set for script execution
///
/// `hex` and `json` are trusted to be consistent encodings of the same
/// underlying value; both are carried for reporting convenience only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Position within the witness set
    pub index: usize,
    /// Canonical hex encoding of the serialized form
    pub hex: String,
    /// Decoded tree representation of the same value
    pub json: TreeValue,
}

/// Purpose of a redeemer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedeemerTag {
    Spend,
    Mint,
    Cert,
    Reward,
}

impl fmt::Display for RedeemerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RedeemerTag::Spend => "spend",
            RedeemerTag::Mint => "mint",
            RedeemerTag::Cert => "cert",
            RedeemerTag::Reward => "reward",
        };
        write!(f, "{}", label)
    }
}

/// Execution-cost budget (memory units, step units), decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExUnits {
    pub mem: String,
    pub steps: String,
}

/// Data justifying/parameterizing a script execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redeemer {
    pub tag: RedeemerTag,
    /// Decimal string, arbitrary precision
    pub index: String,
    /// Hex encoding of the payload
    pub data_hex: String,
    /// Parsed form of the same payload
    pub data_json: TreeValue,
    pub ex_units: ExUnits,
}

/// Signatures, scripts, and data objects authorizing a transaction
///
/// An absent collection and a zero-length collection are equivalent for
/// comparison purposes (both read as count 0). Native-script, vkey, and
/// bootstrap witnesses are not expanded into per-element records; only
/// aggregate counts are available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WitnessSet {
    pub datums: Option<Vec<Datum>>,
    pub redeemers: Option<Vec<Redeemer>>,
    pub script_hashes: Option<Vec<String>>,
    pub native_script_count: u64,
    pub vkey_witness_count: u64,
    pub bootstrap_witness_count: u64,
}

/// Decoded transaction as produced by the external decoder
///
/// Invariant (maintained by the decoder): `inputs.len() == input_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Digest over redeemers, datums, and cost models; `None` when absent
    pub script_data_hash: Option<String>,
    pub input_count: u64,
    pub output_count: u64,
    /// Decimal string, arbitrary precision
    pub fee: String,
    pub ttl: Option<u64>,
    pub validity_start: Option<u64>,
    pub required_signers: Vec<String>,
    pub witness_set: WitnessSet,
    pub inputs: Vec<Input>,
}

/// Aggregate output of a transaction comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub script_data_hash_match: bool,
    pub input_order_match: bool,
    pub witness_set_differences: Vec<String>,
    pub input_differences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_identity_is_hash_index_pair() {
        let a = Input { tx_hash: "ab".repeat(32), index: 0 };
        let b = Input { tx_hash: "ab".repeat(32), index: 0 };
        let c = Input { tx_hash: "ab".repeat(32), index: 1 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_redeemer_tag_display() {
        assert_eq!(RedeemerTag::Spend.to_string(), "spend");
        assert_eq!(RedeemerTag::Reward.to_string(), "reward");
    }

    #[test]
    fn test_witness_set_roundtrips_through_json() {
        let ws = WitnessSet {
            datums: Some(vec![Datum {
                index: 0,
                hex: "d87980".to_string(),
                json: TreeValue::from(json!({"constructor": 0, "fields": []})),
            }]),
            redeemers: None,
            script_hashes: Some(vec!["aa".repeat(28)]),
            native_script_count: 1,
            vkey_witness_count: 2,
            bootstrap_witness_count: 0,
        };
        let encoded = serde_json::to_string(&ws).unwrap();
        let decoded: WitnessSet = serde_json::from_str(&encoded).unwrap();
        assert_eq!(ws, decoded);
    }
}
