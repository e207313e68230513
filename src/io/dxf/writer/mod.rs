//! DXF file writer
//!
//! Serializes a [`Document`] deterministically: a producer comment tag,
//! then the HEADER, TABLES, BLOCKS and ENTITIES sections in that order,
//! then the trailing EOF tag.  Layer and linetype references are
//! validated while writing; an unresolvable reference aborts the write.

mod section_writer;
mod tag_writer;

pub use tag_writer::DxfTagWriter;

use section_writer::SectionWriter;

use crate::document::Document;
use crate::error::{DxfError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Producer identifier emitted as the leading comment tag
const PRODUCER: &str = concat!("opendxf ", env!("CARGO_PKG_VERSION"));

/// Write a document to a file
pub fn write_file(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| DxfError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(document, BufWriter::new(file))
}

/// Write a document to any byte sink
pub fn write_to(document: &Document, sink: impl Write) -> Result<()> {
    let mut writer = DxfTagWriter::new(sink);
    writer.write_comment(PRODUCER)?;

    let mut sections = SectionWriter::new(&mut writer);
    sections.write_header(&document.header)?;
    sections.write_tables(&document.tables)?;
    sections.write_blocks()?;
    sections.write_entities(&document.entities, &document.tables)?;

    writer.write_string(0, "EOF")?;
    writer.flush()
}
