//! Event encodings for datagen.
//!
//! Two interchangeable strategies turn an [`Event`](datagen_event::Event) into
//! the bytes that are published to Kafka:
//!
//! - [`OutputFormat::Json`] - self-describing JSON text
//! - [`OutputFormat::Avro`] - compact Avro binary datum, decodable only with
//!   [`EVENT_SCHEMA`]
//!
//! # Architecture
//!
//! ```text
//! Encode:   Event → EventEncoder (scratch buffer) → &[u8] payload
//! Inspect:  &[u8] payload → as-is text (JSON) | decoded → JSON text (Avro)
//! ```
//!
//! The format is chosen once at startup. It also decides how dry-run output is
//! produced, see [`OutputFormat::inspection`].
//!
//! # Example
//!
//! ```rust
//! use datagen_encoding::{EventEncoder, OutputFormat};
//! use datagen_event::EventGenerator;
//!
//! let mut encoder = EventEncoder::new(OutputFormat::Avro);
//! let event = EventGenerator::new(42).generate();
//!
//! let payload = encoder.encode(&event).unwrap().to_vec();
//! let readable = OutputFormat::Avro.inspect(&payload).unwrap();
//! assert!(readable.contains("\"type\""));
//! ```

pub mod avro;
pub mod encoder;
pub mod error;
pub mod format;
pub mod json;
pub mod schema;

// Re-export main types for convenient access
pub use encoder::EventEncoder;
pub use error::{EncodingError, Result};
pub use format::{Inspection, OutputFormat};
pub use schema::EVENT_SCHEMA;
