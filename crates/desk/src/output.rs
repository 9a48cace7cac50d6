//! Output actions: printing the invoice and handing off the share link.

use std::io::Write;

use crate::error::DeskError;

/// Receives the print-ready document.
pub trait PrintSink {
    fn print(&mut self, document: &str) -> Result<(), DeskError>;
}

/// Receives the share link for the platform to open.
pub trait ShareOpener {
    fn open(&mut self, link: &str) -> Result<(), DeskError>;
}

/// Writes documents and links to any `Write` (stdout in the binary).
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> PrintSink for WriteSink<W> {
    fn print(&mut self, document: &str) -> Result<(), DeskError> {
        self.inner.write_all(document.as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write> ShareOpener for WriteSink<W> {
    fn open(&mut self, link: &str) -> Result<(), DeskError> {
        writeln!(self.inner, "{link}")?;
        self.inner.flush()?;
        Ok(())
    }
}
