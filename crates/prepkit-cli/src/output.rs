//! Result rendering for stdout.

use crate::cli::OutputFormat;
use prepkit_core::OutputConfig;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::io::{self, Write};

/// The labelled result of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: &'static str,
    pub payload: JsonValue,
}

impl Outcome {
    /// Serialize `result` under `label`.
    pub fn new<T: Serialize>(label: &'static str, result: &T) -> prepkit_core::Result<Self> {
        Ok(Self {
            label,
            payload: serde_json::to_value(result)?,
        })
    }

    /// Render the outcome as a single line, without the trailing newline.
    pub fn render(&self, format: OutputFormat) -> String {
        match (format, &self.payload) {
            (OutputFormat::Text, JsonValue::String(text)) => {
                format!("{}{}{}", self.label, OutputConfig::LABEL_SEPARATOR, text)
            }
            (OutputFormat::Text, payload) => {
                format!("{}{}{}", self.label, OutputConfig::LABEL_SEPARATOR, payload)
            }
            (OutputFormat::Json, payload) => payload.to_string(),
        }
    }
}

/// Write the rendered outcome followed by a newline.
pub fn write_outcome<W: Write>(
    outcome: &Outcome,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", outcome.render(format))?;
    out.flush()
}
