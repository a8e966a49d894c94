//! Error types module
//!
//! Domain errors shared across the printq crates. Upload failures are
//! deliberately not represented here: the submission pass contains
//! them per job and reports them through its outcome records instead
//! of propagating.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
