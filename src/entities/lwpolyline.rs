//! Lightweight polyline entity (2D polyline with bulges)

use super::EntityCommon;
use crate::types::Vector2;

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge value for the arc segment to the next vertex.
    /// Positive = counterclockwise, negative = clockwise,
    /// bulge = tan(angle/4) where angle is the included angle.
    pub bulge: Option<f64>,
}

impl LwVertex {
    /// Create a straight-segment vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: None,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        LwVertex::new(Vector2::new(x, y))
    }

    /// Create a vertex with a bulge
    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex {
            location,
            bulge: Some(bulge),
        }
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Elevation (group code 38)
    pub elevation: Option<f64>,
    /// Is the polyline closed?
    pub is_closed: bool,
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
}

impl LwPolyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        LwPolyline::default()
    }

    /// Create a polyline from a list of 2D points
    pub fn from_points(points: Vec<Vector2>) -> Self {
        LwPolyline {
            vertices: points.into_iter().map(LwVertex::new).collect(),
            ..Default::default()
        }
    }

    /// Add a vertex to the polyline
    pub fn add_vertex(&mut self, vertex: LwVertex) {
        self.vertices.push(vertex);
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Close the polyline
    pub fn close(&mut self) {
        self.is_closed = true;
    }
}
