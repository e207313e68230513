//! Ellipse entity

use super::EntityCommon;
use crate::types::Vector3;

/// An ellipse entity.  The major axis is given as an endpoint relative to
/// the center; the minor axis length is `axis_ratio` times the major axis
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center (group codes 11/21/31)
    pub major_axis_end: Vector3,
    /// Ratio of minor axis to major axis (group code 40)
    pub axis_ratio: f64,
    /// Start parameter in radians (group code 41); 0 for a full ellipse
    pub start_parameter: f64,
    /// End parameter in radians (group code 42); 2*pi for a full ellipse
    pub end_parameter: f64,
    /// Extrusion direction (group codes 210/220/230)
    pub extrusion: Option<Vector3>,
}

impl Ellipse {
    /// Create a full ellipse
    pub fn new(center: Vector3, major_axis_end: Vector3, axis_ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis_end,
            axis_ratio,
            ..Default::default()
        }
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis_end: Vector3::ZERO,
            axis_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: 2.0 * std::f64::consts::PI,
            extrusion: None,
        }
    }
}
