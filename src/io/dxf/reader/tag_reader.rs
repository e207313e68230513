//! Low-level tag reader
//!
//! A DXF file is a flat sequence of tags, each spanning two physical
//! lines: an integer group code, then a value.  The tag reader is a
//! forward-only cursor over that sequence.  Comment tags (group code 999)
//! are filtered out before they reach the caller, and a one-slot
//! push-back supports the small amount of lookahead the header coordinate
//! decoding needs.

use crate::error::{DxfError, Result};
use encoding_rs::WINDOWS_1252;
use std::io::{BufReader, Read};

/// Group code marking a comment tag
pub const COMMENT_CODE: i32 = 999;

/// A group code/value pair
#[derive(Debug, Clone)]
pub struct DxfCodePair {
    /// The group code
    pub code: i32,
    /// String representation of the value
    pub value: String,
    /// Physical line number (1-based) of the value line
    pub line: usize,
}

impl DxfCodePair {
    /// Check for a specific code/value combination
    pub fn is(&self, code: i32, value: &str) -> bool {
        self.code == code && self.value == value
    }

    /// Coerce the value to an i16, trimming leading/trailing spaces
    pub fn as_i16(&self) -> Result<i16> {
        self.value
            .trim()
            .parse::<i16>()
            .map_err(|_| self.numeric_error())
    }

    /// Coerce the value to an i32, trimming leading/trailing spaces
    pub fn as_i32(&self) -> Result<i32> {
        self.value
            .trim()
            .parse::<i32>()
            .map_err(|_| self.numeric_error())
    }

    /// Coerce the value to an f64, trimming leading/trailing spaces
    pub fn as_f64(&self) -> Result<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| self.numeric_error())
    }

    fn numeric_error(&self) -> DxfError {
        DxfError::invalid(
            self.line,
            format!(
                "invalid numeric value '{}' for group code {}",
                self.value, self.code
            ),
        )
    }
}

/// Forward-only cursor over the tag sequence of an ASCII DXF stream
pub struct DxfTagReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    pushed_back: Option<DxfCodePair>,
}

impl<R: Read> DxfTagReader<R> {
    /// Create a new tag reader over a byte source
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
            line_number: 0,
            pushed_back: None,
        }
    }

    /// The number of physical lines consumed so far (also the 1-based
    /// number of the last line read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next tag, skipping comment tags.  Returns `None` when the
    /// stream is exhausted.
    pub fn next_tag(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(tag) = self.pushed_back.take() {
            return Ok(Some(tag));
        }
        loop {
            match self.read_tag_raw()? {
                Some(tag) if tag.code == COMMENT_CODE => continue,
                other => return Ok(other),
            }
        }
    }

    /// Read the next tag, failing with the given message if the stream is
    /// exhausted
    pub fn require_tag(&mut self, context: &str) -> Result<DxfCodePair> {
        match self.next_tag()? {
            Some(tag) => Ok(tag),
            None => Err(DxfError::invalid(self.line_number, context.to_string())),
        }
    }

    /// Push a tag back to be returned by the next `next_tag` call
    pub fn push_back(&mut self, tag: DxfCodePair) {
        debug_assert!(self.pushed_back.is_none());
        self.pushed_back = Some(tag);
    }

    /// Read one code/value pair without comment filtering
    fn read_tag_raw(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let code_line_number = self.line_number;
        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::invalid(
                code_line_number,
                format!("invalid group code '{}'", code_line),
            )
        })?;

        let value = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::invalid(
                    code_line_number,
                    format!("premature end of input after group code {}", code),
                ))
            }
        };

        Ok(Some(DxfCodePair {
            code,
            value,
            line: self.line_number,
        }))
    }

    /// Read a single physical line, handling non-UTF8 bytes gracefully.
    /// Non-UTF8 content is decoded as Windows-1252, the default DXF
    /// code page.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let (decoded, _, _) = WINDOWS_1252.decode(e.as_bytes());
                decoded.into_owned()
            }
        };

        // Trim whitespace and line endings (including \r)
        Ok(Some(line.trim().to_string()))
    }
}
