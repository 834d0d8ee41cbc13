//! Generic structural diff over decoded JSON-like trees
//!
//! Walks two values of unknown shape in lock-step and emits one
//! human-readable message per divergence, prefixed with the
//! dotted/bracketed path at which it occurs.

use crate::constants::{MAX_TREE_DEPTH, ROOT_PATH};
use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};

/// Decoded tree value with explicit kind discrimination
///
/// Sorted maps keep key iteration, and therefore message order,
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum TreeValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<TreeValue>),
    Object(BTreeMap<String, TreeValue>),
}

impl TreeValue {
    /// Runtime kind name used in type-mismatch messages
    pub fn kind(&self) -> &'static str {
        match self {
            TreeValue::Null => "null",
            TreeValue::Bool(_) => "bool",
            TreeValue::Number(_) => "number",
            TreeValue::String(_) => "string",
            TreeValue::Array(_) => "array",
            TreeValue::Object(_) => "object",
        }
    }
}

impl From<JsonValue> for TreeValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => TreeValue::Null,
            JsonValue::Bool(b) => TreeValue::Bool(b),
            JsonValue::Number(n) => TreeValue::Number(n),
            JsonValue::String(s) => TreeValue::String(s),
            JsonValue::Array(items) => {
                TreeValue::Array(items.into_iter().map(TreeValue::from).collect())
            }
            JsonValue::Object(entries) => TreeValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, TreeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<TreeValue> for JsonValue {
    fn from(value: TreeValue) -> Self {
        match value {
            TreeValue::Null => JsonValue::Null,
            TreeValue::Bool(b) => JsonValue::Bool(b),
            TreeValue::Number(n) => JsonValue::Number(n),
            TreeValue::String(s) => JsonValue::String(s),
            TreeValue::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            TreeValue::Object(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Dotted/bracketed location within a decoded tree
///
/// Empty at the root; map keys extend with `.key`, array elements
/// with `[i]`. An empty path renders as the literal token `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPath(String);

impl DiffPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    pub fn render(&self) -> &str {
        if self.0.is_empty() {
            ROOT_PATH
        } else {
            &self.0
        }
    }
}

/// Diff two decoded trees, returning one message per divergence
///
/// Recursive, depth-first, pre-order emission. Returns an empty list
/// when the trees are structurally and value-equal. Recursion is
/// bounded by `MAX_TREE_DEPTH`; deeper trees fail with
/// `CompareError::MaxDepthExceeded` rather than risking stack
/// exhaustion on pathological input.
pub fn tree_diff(a: &TreeValue, b: &TreeValue) -> Result<Vec<String>> {
    diff_at(a, b, &DiffPath::root(), 0)
}

fn diff_at(a: &TreeValue, b: &TreeValue, path: &DiffPath, depth: usize) -> Result<Vec<String>> {
    if depth >= MAX_TREE_DEPTH {
        return Err(CompareError::MaxDepthExceeded {
            path: path.render().to_string(),
            limit: MAX_TREE_DEPTH,
        });
    }

    let mut diffs = Vec::new();
    match (a, b) {
        (TreeValue::Null, TreeValue::Null) => {}
        (TreeValue::Bool(x), TreeValue::Bool(y)) => {
            if x != y {
                diffs.push(format!("Value differs at {}: {} vs {}", path.render(), x, y));
            }
        }
        // Exact-value equality, never float tolerance.
        (TreeValue::Number(x), TreeValue::Number(y)) => {
            if x != y {
                diffs.push(format!("Value differs at {}: {} vs {}", path.render(), x, y));
            }
        }
        (TreeValue::String(x), TreeValue::String(y)) => {
            if x != y {
                diffs.push(format!(
                    "Value differs at {}:\n  TX1: {}\n  TX2: {}",
                    path.render(),
                    x,
                    y
                ));
            }
        }
        (TreeValue::Array(xs), TreeValue::Array(ys)) => {
            if xs.len() != ys.len() {
                diffs.push(format!(
                    "Array length differs at {}: {} vs {}",
                    path.render(),
                    xs.len(),
                    ys.len()
                ));
            }
            // Only the overlapping prefix is compared element-wise.
            for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
                diffs.extend(diff_at(x, y, &path.index(i), depth + 1)?);
            }
        }
        (TreeValue::Object(xs), TreeValue::Object(ys)) => {
            let keys: BTreeSet<&String> = xs.keys().chain(ys.keys()).collect();
            for key in keys {
                match (xs.get(key), ys.get(key)) {
                    (Some(x), Some(y)) => {
                        diffs.extend(diff_at(x, y, &path.key(key), depth + 1)?);
                    }
                    (Some(_), None) => {
                        diffs.push(format!("Missing in TX2: {}.{}", path.render(), key));
                    }
                    (None, Some(_)) => {
                        diffs.push(format!("Missing in TX1: {}.{}", path.render(), key));
                    }
                    (None, None) => {}
                }
            }
        }
        _ => {
            diffs.push(format!(
                "Type mismatch at {}: {} vs {}",
                path.render(),
                a.kind(),
                b.kind()
            ));
        }
    }
    Ok(diffs)
}
