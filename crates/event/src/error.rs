//! Error types for the event model.

use thiserror::Error;

/// Errors raised when an event would violate its invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("goodness must be in [0, 1), got {0}")]
    GoodnessOutOfRange(f64),

    #[error("event type must be in [0, {cardinality}), got {value}")]
    TypeOutOfRange { value: i64, cardinality: u8 },
}

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;
