//! Error types for policy construction

/// Policy construction errors
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Policy name is empty or padded with whitespace
    #[error("invalid policy name: {0:?}")]
    InvalidName(String),
}
