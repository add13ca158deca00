//! The synthetic event value.

use crate::error::{EventError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of distinct event types. Valid type codes are `0..TYPE_CARDINALITY`.
pub const TYPE_CARDINALITY: u8 = 4;

/// A synthetic event.
///
/// Events are immutable once constructed. Outside this crate the only way to
/// build one is [`Event::new`], which enforces the value ranges;
/// deserialization goes through the same check.
///
/// The categorical type is carried as its integer code on every boundary and
/// is serialized under the field name `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    timestamp: DateTime<Utc>,
    goodness: f64,
    #[serde(rename = "type")]
    event_type: u8,
}

impl Event {
    /// Create an event, validating `goodness` and `event_type`.
    pub fn new(timestamp: DateTime<Utc>, goodness: f64, event_type: u8) -> Result<Self> {
        if !(0.0..1.0).contains(&goodness) {
            return Err(EventError::GoodnessOutOfRange(goodness));
        }
        let event_type = Self::check_type(i64::from(event_type))?;

        Ok(Self {
            timestamp,
            goodness,
            event_type,
        })
    }

    /// Build an event from values already drawn inside their ranges.
    pub(crate) fn from_sampled(timestamp: DateTime<Utc>, goodness: f64, event_type: u8) -> Self {
        debug_assert!((0.0..1.0).contains(&goodness) && event_type < TYPE_CARDINALITY);
        Self {
            timestamp,
            goodness,
            event_type,
        }
    }

    /// Validate a type code decoded from a wider integer.
    pub fn check_type(code: i64) -> Result<u8> {
        match u8::try_from(code) {
            Ok(value) if value < TYPE_CARDINALITY => Ok(value),
            _ => Err(EventError::TypeOutOfRange {
                value: code,
                cardinality: TYPE_CARDINALITY,
            }),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn goodness(&self) -> f64 {
        self.goodness
    }

    pub fn event_type(&self) -> u8 {
        self.event_type
    }
}

/// Unchecked wire shape used only to route deserialization through [`Event::new`].
#[derive(Deserialize)]
struct RawEvent {
    timestamp: DateTime<Utc>,
    goodness: f64,
    #[serde(rename = "type")]
    event_type: i64,
}

impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        let event_type = Event::check_type(raw.event_type)?;
        Event::new(raw.timestamp, raw.goodness, event_type)
    }
}
