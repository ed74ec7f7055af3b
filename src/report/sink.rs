//! Report sinks.

use std::io::Write;

use crate::config::OutputFormat;
use crate::error_handling::SinkError;

use super::PanelReport;

/// Receives the finished panel. Called exactly once per run.
pub trait ReportSink {
    /// Delivers the panel.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the panel cannot be written or serialized.
    fn done(&mut self, panel: &PanelReport) -> Result<(), SinkError>;
}

/// Writes the panel to any `Write`, as text or as one JSON object.
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl WriterSink<std::io::Stdout> {
    /// Sink writing to stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn done(&mut self, panel: &PanelReport) -> Result<(), SinkError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}", panel.title)?;
                writeln!(self.writer, "{}", panel.content)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, panel)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
