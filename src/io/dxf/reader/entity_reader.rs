//! Entity record decoders
//!
//! All decoders follow the same shape: read the first field tag, switch
//! on group codes until the next group code 0 tag, and hand that
//! terminator back to the caller as the next record's leading tag.
//! Unknown codes (subclass markers, handles, ...) are skipped.

use super::tag_reader::{DxfCodePair, DxfTagReader};
use crate::entities::{Arc, Circle, Ellipse, Line, LwPolyline, LwVertex, Point, Ray};
use crate::error::Result;
use crate::types::{Vector2, Vector3};
use std::io::Read;

const PREMATURE_END: &str = "premature end of input in ENTITIES section";

/// Set one component of an optional extrusion vector, creating it on
/// first use
fn set_extrusion(extrusion: &mut Option<Vector3>, code: i32, value: f64) {
    let v = extrusion.get_or_insert(Vector3::ZERO);
    match code {
        210 => v.x = value,
        220 => v.y = value,
        230 => v.z = value,
        _ => unreachable!(),
    }
}

/// Decode one POINT record
pub(crate) fn read_point<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Point, DxfCodePair)> {
    let mut point = Point::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => point.common.layer = tag.value.clone(),
            62 => point.common.color = tag.as_i16()?,
            39 => point.thickness = Some(tag.as_f64()?),
            10 => point.location.x = tag.as_f64()?,
            20 => point.location.y = tag.as_f64()?,
            30 => point.location.z = tag.as_f64()?,
            210 | 220 | 230 => set_extrusion(&mut point.extrusion, tag.code, tag.as_f64()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((point, tag))
}

/// Decode one RAY record
pub(crate) fn read_ray<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Ray, DxfCodePair)> {
    let mut ray = Ray::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => ray.common.layer = tag.value.clone(),
            62 => ray.common.color = tag.as_i16()?,
            10 => ray.start.x = tag.as_f64()?,
            20 => ray.start.y = tag.as_f64()?,
            30 => ray.start.z = tag.as_f64()?,
            11 => ray.direction.x = tag.as_f64()?,
            21 => ray.direction.y = tag.as_f64()?,
            31 => ray.direction.z = tag.as_f64()?,
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((ray, tag))
}

/// Decode one LINE record
pub(crate) fn read_line<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Line, DxfCodePair)> {
    let mut line = Line::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => line.common.layer = tag.value.clone(),
            62 => line.common.color = tag.as_i16()?,
            39 => line.thickness = Some(tag.as_f64()?),
            10 => line.start.x = tag.as_f64()?,
            20 => line.start.y = tag.as_f64()?,
            30 => line.start.z = tag.as_f64()?,
            11 => line.end.x = tag.as_f64()?,
            21 => line.end.y = tag.as_f64()?,
            31 => line.end.z = tag.as_f64()?,
            210 | 220 | 230 => set_extrusion(&mut line.extrusion, tag.code, tag.as_f64()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((line, tag))
}

/// Decode one CIRCLE record
pub(crate) fn read_circle<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Circle, DxfCodePair)> {
    let mut circle = Circle::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => circle.common.layer = tag.value.clone(),
            62 => circle.common.color = tag.as_i16()?,
            39 => circle.thickness = Some(tag.as_f64()?),
            10 => circle.center.x = tag.as_f64()?,
            20 => circle.center.y = tag.as_f64()?,
            30 => circle.center.z = tag.as_f64()?,
            40 => circle.radius = tag.as_f64()?,
            210 | 220 | 230 => set_extrusion(&mut circle.extrusion, tag.code, tag.as_f64()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((circle, tag))
}

/// Decode one ARC record
pub(crate) fn read_arc<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Arc, DxfCodePair)> {
    let mut arc = Arc::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => arc.common.layer = tag.value.clone(),
            62 => arc.common.color = tag.as_i16()?,
            39 => arc.thickness = Some(tag.as_f64()?),
            10 => arc.center.x = tag.as_f64()?,
            20 => arc.center.y = tag.as_f64()?,
            30 => arc.center.z = tag.as_f64()?,
            40 => arc.radius = tag.as_f64()?,
            50 => arc.start_angle = tag.as_f64()?,
            51 => arc.end_angle = tag.as_f64()?,
            210 | 220 | 230 => set_extrusion(&mut arc.extrusion, tag.code, tag.as_f64()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((arc, tag))
}

/// Decode one ELLIPSE record
pub(crate) fn read_ellipse<R: Read>(tags: &mut DxfTagReader<R>) -> Result<(Ellipse, DxfCodePair)> {
    let mut ellipse = Ellipse::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => ellipse.common.layer = tag.value.clone(),
            62 => ellipse.common.color = tag.as_i16()?,
            10 => ellipse.center.x = tag.as_f64()?,
            20 => ellipse.center.y = tag.as_f64()?,
            30 => ellipse.center.z = tag.as_f64()?,
            11 => ellipse.major_axis_end.x = tag.as_f64()?,
            21 => ellipse.major_axis_end.y = tag.as_f64()?,
            31 => ellipse.major_axis_end.z = tag.as_f64()?,
            40 => ellipse.axis_ratio = tag.as_f64()?,
            41 => ellipse.start_parameter = tag.as_f64()?,
            42 => ellipse.end_parameter = tag.as_f64()?,
            210 | 220 | 230 => set_extrusion(&mut ellipse.extrusion, tag.code, tag.as_f64()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((ellipse, tag))
}

/// Pending vertex state for LWPOLYLINE decoding.  Coordinates arrive one
/// component at a time; a vertex is appended only once its (x, y) pair is
/// complete.
#[derive(Default)]
struct PendingVertex {
    x: Option<f64>,
    y: Option<f64>,
    bulge: Option<f64>,
}

impl PendingVertex {
    fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Append the pending vertex if complete, resetting the state
    fn flush_into(&mut self, vertices: &mut Vec<LwVertex>) {
        if let (Some(x), Some(y)) = (self.x.take(), self.y.take()) {
            vertices.push(LwVertex {
                location: Vector2::new(x, y),
                bulge: self.bulge.take(),
            });
        } else {
            // Incomplete pairs are dropped wholesale
            *self = PendingVertex::default();
        }
    }
}

/// Decode one LWPOLYLINE record, accumulating vertices from interleaved
/// 10/20/42 tags
pub(crate) fn read_lw_polyline<R: Read>(
    tags: &mut DxfTagReader<R>,
) -> Result<(LwPolyline, DxfCodePair)> {
    let mut polyline = LwPolyline::default();
    let mut pending = PendingVertex::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            8 => polyline.common.layer = tag.value.clone(),
            62 => polyline.common.color = tag.as_i16()?,
            38 => polyline.elevation = Some(tag.as_f64()?),
            90 => {
                let count = tag.as_i32()?;
                polyline.vertices.reserve(usize::try_from(count).unwrap_or(0));
            }
            70 => polyline.is_closed = (tag.as_i16()? & 1) != 0,
            10 => {
                if pending.is_complete() {
                    pending.flush_into(&mut polyline.vertices);
                }
                pending.x = Some(tag.as_f64()?);
            }
            20 => {
                if pending.is_complete() {
                    pending.flush_into(&mut polyline.vertices);
                }
                pending.y = Some(tag.as_f64()?);
            }
            42 => {
                pending.bulge = Some(tag.as_f64()?);
                if pending.is_complete() {
                    pending.flush_into(&mut polyline.vertices);
                }
            }
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    // A trailing complete pair without a bulge is still pending here
    pending.flush_into(&mut polyline.vertices);

    Ok((polyline, tag))
}
