//! Point entity

use super::EntityCommon;
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
    /// Thickness (group code 39)
    pub thickness: Option<f64>,
    /// Extrusion direction (group codes 210/220/230)
    pub extrusion: Option<Vector3>,
}

impl Point {
    /// Create a point at a location
    pub fn new(location: Vector3) -> Self {
        Point {
            location,
            ..Default::default()
        }
    }

    /// Create a point from coordinates
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Point::new(Vector3::new(x, y, z))
    }
}
