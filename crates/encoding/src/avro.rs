//! Avro binary encoding of events.
//!
//! The datum follows the record schema in [`EVENT_SCHEMA`](crate::EVENT_SCHEMA),
//! with fields written back to back and no container header:
//!
//! | Field | Avro type | Wire form |
//! |---|---|---|
//! | `timestamp` | `long` / `timestamp-micros` | zig-zag varint |
//! | `goodness` | `double` | 8 bytes, little-endian |
//! | `type` | `int` | zig-zag varint |
//!
//! Avro's `int`/`long` and `double` encodings are identical to protobuf's
//! `sint32`/`sint64` and `double` without field tags, so the protobuf coded
//! streams are used for the primitives.

use crate::error::{EncodingError, Result};
use chrono::DateTime;
use datagen_event::Event;
use protobuf::{CodedInputStream, CodedOutputStream};

/// Append the Avro binary datum of `event` to `buffer`.
///
/// Timestamps are truncated to microseconds.
pub fn encode_event(event: &Event, buffer: &mut Vec<u8>) -> Result<()> {
    let mut stream = CodedOutputStream::vec(buffer);

    stream
        .write_sint64_no_tag(event.timestamp().timestamp_micros())
        .map_err(|e| EncodingError::AvroWrite(e.to_string()))?;
    stream
        .write_double_no_tag(event.goodness())
        .map_err(|e| EncodingError::AvroWrite(e.to_string()))?;
    stream
        .write_sint32_no_tag(i32::from(event.event_type()))
        .map_err(|e| EncodingError::AvroWrite(e.to_string()))?;
    stream
        .flush()
        .map_err(|e| EncodingError::AvroWrite(e.to_string()))?;

    Ok(())
}

/// Decode an Avro binary datum written by [`encode_event`].
///
/// The whole slice must be consumed by exactly one datum.
pub fn decode_event(data: &[u8]) -> Result<Event> {
    let mut stream = CodedInputStream::from_bytes(data);

    let micros = stream
        .read_sint64()
        .map_err(|e| EncodingError::AvroRead(e.to_string()))?;
    let goodness = stream
        .read_double()
        .map_err(|e| EncodingError::AvroRead(e.to_string()))?;
    let type_code = stream
        .read_sint32()
        .map_err(|e| EncodingError::AvroRead(e.to_string()))?;

    let consumed = stream.pos() as usize;
    if consumed < data.len() {
        return Err(EncodingError::TrailingBytes(data.len() - consumed));
    }

    let timestamp =
        DateTime::from_timestamp_micros(micros).ok_or(EncodingError::InvalidTimestamp(micros))?;
    let event_type = Event::check_type(i64::from(type_code))?;

    Ok(Event::new(timestamp, goodness, event_type)?)
}

/// Decode an Avro datum and render it as JSON text for operators.
pub fn decode_to_json(data: &[u8]) -> Result<String> {
    let event = decode_event(data)?;
    Ok(serde_json::to_string(&event)?)
}
