//! Ray entity (semi-infinite line)

use super::EntityCommon;
use crate::types::Vector3;

/// A ray entity: starts at a point and extends infinitely in one direction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ray {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the ray
    pub start: Vector3,
    /// Direction vector
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray
    pub fn new(start: Vector3, direction: Vector3) -> Self {
        Ray {
            common: EntityCommon::new(),
            start,
            direction,
        }
    }
}
