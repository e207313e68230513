//! Read-side delivery interface
//!
//! The reader does not build a document itself; it hands each decoded
//! record to a [`DxfSink`] as soon as the record is complete, in file
//! order.  Implement only the callbacks you care about; the rest default
//! to no-ops.  [`DocumentSink`] is the canonical implementation that
//! accumulates everything into a [`Document`].

use crate::document::Document;
use crate::entities::{Arc, Circle, Ellipse, Line, LwPolyline, Point, Ray};
use crate::header::Header;
use crate::tables::{Layer, LineType};

/// Receiver for decoded records during a read.
///
/// All methods are optional; unimplemented callbacks discard the record.
pub trait DxfSink {
    /// Called once with the full header after the HEADER section is read
    fn on_header(&mut self, _header: Header) {}

    /// Called for each linetype record in the LTYPE table
    fn on_line_type(&mut self, _line_type: LineType) {}

    /// Called for each layer record in the LAYER table
    fn on_layer(&mut self, _layer: Layer) {}

    /// Called for each POINT entity
    fn on_point(&mut self, _point: Point) {}

    /// Called for each RAY entity
    fn on_ray(&mut self, _ray: Ray) {}

    /// Called for each LINE entity
    fn on_line(&mut self, _line: Line) {}

    /// Called for each CIRCLE entity
    fn on_circle(&mut self, _circle: Circle) {}

    /// Called for each ARC entity
    fn on_arc(&mut self, _arc: Arc) {}

    /// Called for each ELLIPSE entity
    fn on_ellipse(&mut self, _ellipse: Ellipse) {}

    /// Called for each LWPOLYLINE entity
    fn on_lw_polyline(&mut self, _lw_polyline: LwPolyline) {}
}

/// A sink that accumulates every record into a [`Document`]
#[derive(Debug, Default)]
pub struct DocumentSink {
    document: Document,
}

impl DocumentSink {
    /// Create an empty accumulator
    pub fn new() -> Self {
        DocumentSink::default()
    }

    /// Consume the sink, returning the accumulated document
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Borrow the accumulated document
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DxfSink for DocumentSink {
    fn on_header(&mut self, header: Header) {
        self.document.header = header;
    }

    fn on_line_type(&mut self, line_type: LineType) {
        self.document.tables.line_types.push(line_type);
    }

    fn on_layer(&mut self, layer: Layer) {
        self.document.tables.layers.push(layer);
    }

    fn on_point(&mut self, point: Point) {
        self.document.entities.points.push(point);
    }

    fn on_ray(&mut self, ray: Ray) {
        self.document.entities.rays.push(ray);
    }

    fn on_line(&mut self, line: Line) {
        self.document.entities.lines.push(line);
    }

    fn on_circle(&mut self, circle: Circle) {
        self.document.entities.circles.push(circle);
    }

    fn on_arc(&mut self, arc: Arc) {
        self.document.entities.arcs.push(arc);
    }

    fn on_ellipse(&mut self, ellipse: Ellipse) {
        self.document.entities.ellipses.push(ellipse);
    }

    fn on_lw_polyline(&mut self, lw_polyline: LwPolyline) {
        self.document.entities.lw_polylines.push(lw_polyline);
    }
}
