use thiserror::Error;

/// Errors produced by the prediction core.
///
/// There is exactly one fatal kind: the caller handed us structurally invalid
/// data (mismatched array lengths, empty training sets, zero-width feature
/// vectors). It is raised before any computation starts. Out-of-range numeric
/// values are never errors; they are clamped into valid ranges instead.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
