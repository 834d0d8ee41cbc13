//! Error types for transaction comparison

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Maximum tree depth exceeded at {path} (limit {limit})")]
    MaxDepthExceeded { path: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, CompareError>;
