//! Line entity

use super::EntityCommon;
use crate::types::Vector3;

/// A line segment entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// End point
    pub end: Vector3,
    /// Thickness (group code 39)
    pub thickness: Option<f64>,
    /// Extrusion direction (group codes 210/220/230)
    pub extrusion: Option<Vector3>,
}

impl Line {
    /// Create a new line between two points
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Default::default()
        }
    }
}
