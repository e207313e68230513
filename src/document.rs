//! Drawing document structure

use crate::entities::Entities;
use crate::header::Header;
use crate::tables::Tables;

/// A complete drawing: header variables, tables, and entities.
///
/// The document is a passive aggregate; it is produced whole by a read
/// (via [`DocumentSink`](crate::sink::DocumentSink)) and consumed whole
/// by a write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Header variables
    pub header: Header,
    /// Linetype and layer tables
    pub tables: Tables,
    /// Geometric entities
    pub entities: Entities,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Document::default()
    }
}
