//! JSON text encoding.

use crate::error::Result;
use datagen_event::Event;

/// Append the JSON text of `event` to `buffer`.
///
/// Produces `{"timestamp":"<RFC 3339>","goodness":<float>,"type":<int>}`.
pub fn encode_event(event: &Event, buffer: &mut Vec<u8>) -> Result<()> {
    serde_json::to_writer(buffer, event)?;
    Ok(())
}
