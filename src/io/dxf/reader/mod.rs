//! DXF file reader
//!
//! The reader drives a linear section state machine over the tag stream:
//! HEADER (optional), TABLES, BLOCKS, ENTITIES, then the trailing EOF
//! tag.  Sections are read exactly once, in this order; decoded records
//! are delivered to a [`DxfSink`] in file order.  The first grammar
//! violation aborts the whole read.

mod entity_reader;
mod header_reader;
mod table_reader;
mod tag_reader;

pub use tag_reader::{DxfCodePair, DxfTagReader};

use crate::document::Document;
use crate::error::{DxfError, Result};
use crate::header::Header;
use crate::sink::{DocumentSink, DxfSink};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a DXF file, delivering decoded records to `sink`
pub fn read_file<S: DxfSink>(sink: &mut S, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DxfError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(sink, file)
}

/// Read DXF content from any byte source, delivering decoded records to
/// `sink`
pub fn read_from<S: DxfSink, R: Read>(sink: &mut S, source: R) -> Result<()> {
    DxfReader::new(sink, source).read_all()
}

/// Read a DXF file into a [`Document`]
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let mut sink = DocumentSink::new();
    read_file(&mut sink, path)?;
    Ok(sink.into_document())
}

/// Section state machine over a tag stream
struct DxfReader<'a, S: DxfSink, R: Read> {
    tags: DxfTagReader<R>,
    sink: &'a mut S,
}

impl<'a, S: DxfSink, R: Read> DxfReader<'a, S, R> {
    fn new(sink: &'a mut S, source: R) -> Self {
        Self {
            tags: DxfTagReader::new(source),
            sink,
        }
    }

    /// Run the state machine over the whole stream
    fn read_all(mut self) -> Result<()> {
        // HEADER is optional: when the first section's name tag is not
        // HEADER, that same tag must name the TABLES section instead.
        self.expect_section_begin()?;
        let name_tag = self.tags.require_tag("expected HEADER begin")?;
        if name_tag.is(2, "HEADER") {
            let header = self.read_header_body()?;
            self.sink.on_header(header);
            self.expect_section_begin()?;
            self.expect_section_name("TABLES")?;
        } else if !name_tag.is(2, "TABLES") {
            return Err(DxfError::invalid(name_tag.line, "expected TABLES begin"));
        }
        self.read_tables_body()?;

        self.expect_section_begin()?;
        self.expect_section_name("BLOCKS")?;
        self.skip_section_body()?;

        self.expect_section_begin()?;
        self.expect_section_name("ENTITIES")?;
        self.read_entities_body()?;

        let eof_tag = self.tags.require_tag("EOF missing")?;
        if !eof_tag.is(0, "EOF") {
            return Err(DxfError::invalid(eof_tag.line, "EOF missing"));
        }

        Ok(())
    }

    /// Require a `(0, SECTION)` tag
    fn expect_section_begin(&mut self) -> Result<()> {
        let tag = self.tags.require_tag("expected section begin")?;
        if !tag.is(0, "SECTION") {
            return Err(DxfError::invalid(tag.line, "expected section begin"));
        }
        Ok(())
    }

    /// Require a `(2, name)` tag naming the expected section
    fn expect_section_name(&mut self, name: &str) -> Result<()> {
        let context = format!("expected {name} begin");
        let tag = self.tags.require_tag(&context)?;
        if !tag.is(2, name) {
            return Err(DxfError::invalid(tag.line, context));
        }
        Ok(())
    }

    /// Read header entries until ENDSEC
    fn read_header_body(&mut self) -> Result<Header> {
        let mut header = Header::new();

        loop {
            let tag = self
                .tags
                .require_tag("premature end of input in HEADER section")?;
            if tag.is(0, "ENDSEC") {
                return Ok(header);
            }
            if tag.code != 9 {
                return Err(DxfError::invalid(
                    tag.line,
                    "expected group code 9 for header variable name",
                ));
            }

            let value = header_reader::decode_value(&mut self.tags, &tag.value)?;
            if !header.insert(tag.value.clone(), value) {
                return Err(DxfError::invalid(
                    tag.line,
                    format!("duplicate header entry {}", tag.value),
                ));
            }
        }
    }

    /// Read the TABLES body: LAYER and LTYPE records are decoded,
    /// everything else (table begin/end markers, other table kinds) is
    /// skipped
    fn read_tables_body(&mut self) -> Result<()> {
        let mut line_type_names: Vec<String> = Vec::new();

        let mut tag = self
            .tags
            .require_tag("premature end of input in TABLES section")?;
        loop {
            if tag.is(0, "ENDSEC") {
                return Ok(());
            }
            tag = if tag.is(0, "LTYPE") {
                let (line_type, terminator) = table_reader::read_line_type(&mut self.tags)?;
                line_type_names.push(line_type.name.clone());
                self.sink.on_line_type(line_type);
                terminator
            } else if tag.is(0, "LAYER") {
                let (layer, terminator) =
                    table_reader::read_layer(&mut self.tags, &line_type_names)?;
                self.sink.on_layer(layer);
                terminator
            } else {
                self.tags
                    .require_tag("premature end of input in TABLES section")?
            };
        }
    }

    /// Scan a section body to its ENDSEC, discarding every tag
    fn skip_section_body(&mut self) -> Result<()> {
        loop {
            let tag = self.tags.require_tag("premature end of input in section")?;
            if tag.is(0, "ENDSEC") {
                return Ok(());
            }
        }
    }

    /// Read the ENTITIES body, dispatching known record types to their
    /// decoders and skipping unknown ones
    fn read_entities_body(&mut self) -> Result<()> {
        let mut tag = self
            .tags
            .require_tag("premature end of input in ENTITIES section")?;
        loop {
            if tag.is(0, "ENDSEC") {
                return Ok(());
            }
            tag = if tag.code == 0 {
                match tag.value.as_str() {
                    "POINT" => {
                        let (point, terminator) = entity_reader::read_point(&mut self.tags)?;
                        self.sink.on_point(point);
                        terminator
                    }
                    "RAY" => {
                        let (ray, terminator) = entity_reader::read_ray(&mut self.tags)?;
                        self.sink.on_ray(ray);
                        terminator
                    }
                    "LINE" => {
                        let (line, terminator) = entity_reader::read_line(&mut self.tags)?;
                        self.sink.on_line(line);
                        terminator
                    }
                    "CIRCLE" => {
                        let (circle, terminator) = entity_reader::read_circle(&mut self.tags)?;
                        self.sink.on_circle(circle);
                        terminator
                    }
                    "ARC" => {
                        let (arc, terminator) = entity_reader::read_arc(&mut self.tags)?;
                        self.sink.on_arc(arc);
                        terminator
                    }
                    "ELLIPSE" => {
                        let (ellipse, terminator) = entity_reader::read_ellipse(&mut self.tags)?;
                        self.sink.on_ellipse(ellipse);
                        terminator
                    }
                    "LWPOLYLINE" => {
                        let (polyline, terminator) =
                            entity_reader::read_lw_polyline(&mut self.tags)?;
                        self.sink.on_lw_polyline(polyline);
                        terminator
                    }
                    _ => self
                        .tags
                        .require_tag("premature end of input in ENTITIES section")?,
                }
            } else {
                self.tags
                    .require_tag("premature end of input in ENTITIES section")?
            };
        }
    }
}
