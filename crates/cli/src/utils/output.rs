//! Rendering of command results
//!
//! Text output is one record per line. JSON output is the serialized model,
//! pretty-printed, so scripts see exactly what the backend returned.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;

pub struct Output<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write `value` as JSON, or run `text` to render it for humans
    pub fn record<T, F>(&mut self, value: &T, text: F) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut W, &T) -> std::io::Result<()>,
    {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, value)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Text => text(&mut self.writer, value)?,
        }
        Ok(())
    }

    /// Status line. Only shown in text mode.
    pub fn message(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
