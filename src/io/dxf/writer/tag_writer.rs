//! Low-level tag writer
//!
//! Emits group code/value pairs as physical line pairs.  Group codes are
//! right-aligned in a 3-character field; floating-point values use a
//! fixed 6-decimal precision so repeated writes of the same document are
//! byte-identical.

use crate::error::Result;
use std::io::Write;

/// Tag-level writer over a byte sink
pub struct DxfTagWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfTagWriter<W> {
    /// Create a new tag writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a group code, right-aligned in a 3-character field
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{code:>3}")?;
        Ok(())
    }

    /// Write a tag with a string value
    pub fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{value}")?;
        Ok(())
    }

    /// Write a tag with an i16 value
    pub fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{value}")?;
        Ok(())
    }

    /// Write a tag with an i32 value
    pub fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{value}")?;
        Ok(())
    }

    /// Write a tag with a count value
    pub fn write_count(&mut self, code: i32, value: usize) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{value}")?;
        Ok(())
    }

    /// Write a tag with a fixed-precision floating-point value
    pub fn write_f64(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{value:.6}")?;
        Ok(())
    }

    /// Write a comment tag (group code 999)
    pub fn write_comment(&mut self, text: &str) -> Result<()> {
        self.write_string(999, text)
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
