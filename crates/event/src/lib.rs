//! Event model and generator for datagen.
//!
//! This crate provides the [`Event`] value produced on every tick of the
//! datagen run loop, and the [`EventGenerator`] which fabricates randomized
//! events from a single random source owned for the lifetime of a run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  EventGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - generated     │
//! └────────┬─────────┘
//!          │ generate()
//!          ▼
//!    Event { timestamp, goodness, type }
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_event::EventGenerator;
//!
//! let mut generator = EventGenerator::new(42);
//! let event = generator.generate();
//! assert!((0.0..1.0).contains(&event.goodness()));
//! assert!(event.event_type() < 4);
//! ```

pub mod error;
pub mod event;
pub mod generator;

// Re-exports for convenience
pub use error::{EventError, Result};
pub use event::{Event, TYPE_CARDINALITY};
pub use generator::EventGenerator;
