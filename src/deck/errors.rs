use thiserror::Error;

/// Errors from hand enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("number of large cards must be between 0 and 4, got {0}")]
    InvalidLargeCount(usize),
}
