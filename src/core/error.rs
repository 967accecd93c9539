// Centralized error handling for the directory

use thiserror::Error;

/// Errors that can occur while operating on the directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("No record at position {index}: directory holds {len} records")]
    PositionOutOfRange { index: usize, len: usize },

    #[error("Credential mismatch for user '{name}'")]
    InvalidCredentials { name: String },
}
