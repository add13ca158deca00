//! Strategy-dispatching event encoder with a reusable output buffer.

use crate::error::Result;
use crate::format::OutputFormat;
use crate::{avro, json};
use datagen_event::Event;

/// Encodes events under the format chosen at startup.
///
/// The encoder owns one scratch buffer that is cleared before every encode,
/// so callers never see bytes left over from a previous event. On failure the
/// buffer is cleared again and nothing is returned.
pub struct EventEncoder {
    format: OutputFormat,
    buffer: Vec<u8>,
}

impl EventEncoder {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            buffer: Vec::with_capacity(128),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encode `event`, returning the payload borrowed from the scratch buffer.
    pub fn encode(&mut self, event: &Event) -> Result<&[u8]> {
        self.buffer.clear();

        let written = match self.format {
            OutputFormat::Json => json::encode_event(event, &mut self.buffer),
            OutputFormat::Avro => avro::encode_event(event, &mut self.buffer),
        };

        match written {
            Ok(()) => Ok(self.buffer.as_slice()),
            Err(e) => {
                self.buffer.clear();
                Err(e)
            }
        }
    }
}
