//! Circle entity

use super::EntityCommon;
use crate::types::Vector3;

/// A circle entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Thickness (group code 39)
    pub thickness: Option<f64>,
    /// Extrusion direction (group codes 210/220/230)
    pub extrusion: Option<Vector3>,
}

impl Circle {
    /// Create a new circle
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Default::default()
        }
    }
}
