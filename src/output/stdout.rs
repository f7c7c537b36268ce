use std::io::{self, Stdout, Write};

use async_trait::async_trait;

use crate::{
    PvmError, Result,
    services::pulse::{DeviceReport, ServerReport},
};

use super::{Reporter, format};

/// Prints reports as text lines, flushing after each one.
pub struct StdoutReporter<W = Stdout> {
    writer: W,
}

impl StdoutReporter<Stdout> {
    /// Reporter writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdoutReporter<W> {
    /// Reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub(super) fn write_server_info(&mut self, report: &ServerReport) -> Result<()> {
        for line in format::server_lines(report) {
            writeln!(self.writer, "{line}").map_err(PvmError::Output)?;
        }
        self.writer.flush().map_err(PvmError::Output)
    }

    fn write_device(&mut self, report: &DeviceReport) -> Result<()> {
        writeln!(self.writer, "{}", format::device_line(report)).map_err(PvmError::Output)?;
        self.writer.flush().map_err(PvmError::Output)
    }
}

#[async_trait]
impl<W: Write + Send> Reporter for StdoutReporter<W> {
    async fn server_info(&mut self, report: &ServerReport) -> Result<()> {
        self.write_server_info(report)
    }

    async fn device_changed(&mut self, report: &DeviceReport) -> Result<()> {
        self.write_device(report)
    }
}
