//! # opendxf
//!
//! A pure Rust library for reading and writing CAD drawings in ASCII DXF
//! format.
//!
//! The library models a useful subset of the format: header variables,
//! the LTYPE and LAYER tables, and the POINT, RAY, LINE, CIRCLE, ARC,
//! ELLIPSE and LWPOLYLINE entities.  Reading is streaming: decoded
//! records are delivered one at a time, in file order, to a caller-
//! supplied [`DxfSink`].  Writing is deterministic: the same document
//! always serializes to the same bytes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opendxf::{read_document, write_file};
//!
//! // Read a DXF file into a document
//! let doc = read_document("sample.dxf")?;
//!
//! // Access entities
//! for line in &doc.entities.lines {
//!     println!("line from {} to {}", line.start, line.end);
//! }
//!
//! // Write it back out
//! write_file(&doc, "output.dxf")?;
//! # Ok::<(), opendxf::DxfError>(())
//! ```
//!
//! Streaming consumers implement [`DxfSink`] instead and override only
//! the callbacks they care about:
//!
//! ```rust,no_run
//! use opendxf::{read_file, DxfSink, entities::Line};
//!
//! #[derive(Default)]
//! struct LineCounter(usize);
//!
//! impl DxfSink for LineCounter {
//!     fn on_line(&mut self, _line: Line) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = LineCounter::default();
//! read_file(&mut counter, "sample.dxf")?;
//! println!("{} lines", counter.0);
//! # Ok::<(), opendxf::DxfError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod header;
pub mod io;
pub mod sink;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Vector2, Vector3};

pub use header::{Header, HeaderValue};

// Re-export entity types
pub use entities::{Arc, Circle, Ellipse, Entities, Line, LwPolyline, LwVertex, Point, Ray};

// Re-export table types
pub use tables::{Layer, LayerFlags, LineType, Tables};

// Re-export document and sink
pub use document::Document;
pub use sink::{DocumentSink, DxfSink};

// Re-export I/O entrypoints
pub use io::dxf::{read_document, read_file, read_from, write_file, write_to};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
