//! Output format selection.

use crate::avro;
use crate::error::Result;
use clap::ValueEnum;
use std::fmt;

/// Encoding strategy for published payloads.
///
/// Parsed from the `JSON` / `AVRO` configuration values (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Self-describing JSON text
    #[default]
    #[value(name = "JSON")]
    Json,
    /// Avro binary datum, no header or schema fingerprint
    #[value(name = "AVRO")]
    Avro,
}

/// How a dry run turns a payload into something an operator can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspection {
    /// Payload bytes are already text
    AsIs,
    /// Payload must be decoded with the event schema first
    Decode,
}

impl OutputFormat {
    /// Dry-run behaviour implied by this format.
    pub fn inspection(&self) -> Inspection {
        match self {
            OutputFormat::Json => Inspection::AsIs,
            OutputFormat::Avro => Inspection::Decode,
        }
    }

    /// Render a payload encoded in this format as readable text.
    ///
    /// JSON payloads are returned as-is; Avro payloads are decoded and
    /// rendered as JSON.
    pub fn inspect(&self, payload: &[u8]) -> Result<String> {
        match self.inspection() {
            Inspection::AsIs => Ok(std::str::from_utf8(payload)?.to_owned()),
            Inspection::Decode => avro::decode_to_json(payload),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Avro => "AVRO",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
