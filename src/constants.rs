//! Comparison limits and formatting constants

/// Maximum nesting depth the tree differ follows before reporting
/// `CompareError::MaxDepthExceeded`
pub const MAX_TREE_DEPTH: usize = 128;

/// Number of leading characters kept in hex previews inside difference messages
pub const HEX_PREVIEW_LEN: usize = 80;

/// Token rendered for a path that would otherwise be empty
pub const ROOT_PATH: &str = "root";
