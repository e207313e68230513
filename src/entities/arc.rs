//! Arc entity

use super::EntityCommon;
use crate::types::Vector3;

/// A circular arc entity.  Angles are in degrees, counterclockwise from
/// the positive X axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Start angle in degrees (group code 50)
    pub start_angle: f64,
    /// End angle in degrees (group code 51)
    pub end_angle: f64,
    /// Thickness (group code 39)
    pub thickness: Option<f64>,
    /// Extrusion direction (group codes 210/220/230)
    pub extrusion: Option<Vector3>,
}

impl Arc {
    /// Create a new arc
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Default::default()
        }
    }
}
