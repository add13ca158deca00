//! Error types for datagen-encoding.

use thiserror::Error;

/// Errors that can occur while encoding or inspecting an event payload.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Avro write error: {0}")]
    AvroWrite(String),

    #[error("Avro read error: {0}")]
    AvroRead(String),

    #[error("{0} trailing bytes after Avro datum")]
    TrailingBytes(usize),

    #[error("Invalid timestamp: {0} microseconds since epoch")]
    InvalidTimestamp(i64),

    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] datagen_event::EventError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
