//! Header variable decoding
//!
//! Each header entry is a name tag (group code 9) followed by one value
//! tag whose group code decides the value's type.  Most value codes are
//! only legal for specific variable names; the tables below capture those
//! restrictions.

use super::tag_reader::{DxfCodePair, DxfTagReader};
use crate::error::{DxfError, Result};
use crate::header::HeaderValue;
use crate::types::{Vector2, Vector3};
use std::io::Read;

/// Variables allowed to carry a handle value (group code 5)
const HANDLE_NAMES: &[&str] = &["$HANDSEED"];

/// Variables allowed to carry a linetype name (group code 6)
const LINETYPE_NAMES: &[&str] = &["$CELTYPE", "$DIMLTYPE", "$DIMLTEX1", "$DIMLTEX2"];

/// Variables allowed to carry a text style name (group code 7)
const TEXT_STYLE_NAMES: &[&str] = &["$TEXTSTYLE", "$DIMTXSTY"];

/// Variables allowed to carry a layer name (group code 8)
const LAYER_NAMES: &[&str] = &["$CLAYER"];

/// Variables allowed to carry an angle (group code 50)
const ANGLE_NAMES: &[&str] = &["$ANGBASE"];

/// Variables allowed to carry a color index (group code 62)
const COLOR_NAMES: &[&str] = &["$CECOLOR", "$INTERFERECOLOR"];

/// Variables allowed to carry a small integer flag (group code 280)
const FLAG_NAMES: &[&str] = &[
    "$CSHADOW",
    "$DGNFRAME",
    "$DIMASSOC",
    "$DWFFRAME",
    "$ENDCAPS",
    "$HALOGAP",
    "$HIDETEXT",
    "$INDEXCTL",
    "$INTERSECTIONDISPLAY",
    "$JOINSTYLE",
    "$LIGHTGLYPHDISPLAY",
    "$LOFTNORMALS",
    "$OBSLTYPE",
    "$SHOWHIST",
    "$SORTENTS",
    "$TILEMODELIGHTSYNCH",
    "$XCLIPFRAME",
];

/// Variables allowed to carry a lineweight (group code 370)
const LINEWEIGHT_NAMES: &[&str] = &["$CELWEIGHT"];

/// Variables allowed to carry a plot style type (group code 380)
const PLOT_STYLE_NAMES: &[&str] = &["$CEPSNTYPE"];

/// Decode the value tag(s) following a header variable name tag
pub(crate) fn decode_value<R: Read>(
    tags: &mut DxfTagReader<R>,
    name: &str,
) -> Result<HeaderValue> {
    let tag = tags.require_tag("premature end of input in HEADER section")?;
    match tag.code {
        1 | 2 | 3 => Ok(HeaderValue::Text(tag.value)),
        5 => restricted_text(tag, name, HANDLE_NAMES),
        6 => restricted_text(tag, name, LINETYPE_NAMES),
        7 => restricted_text(tag, name, TEXT_STYLE_NAMES),
        8 => restricted_text(tag, name, LAYER_NAMES),
        10 => decode_coordinate(tags, &tag),
        40 => Ok(HeaderValue::Float(tag.as_f64()?)),
        50 => restricted_float(tag, name, ANGLE_NAMES),
        62 => restricted_integer(tag, name, COLOR_NAMES),
        70 => Ok(HeaderValue::Integer(tag.as_i32()?)),
        280 => restricted_integer(tag, name, FLAG_NAMES),
        290 => Ok(HeaderValue::Bool(tag.as_i32()? != 0)),
        370 => restricted_integer(tag, name, LINEWEIGHT_NAMES),
        380 => restricted_integer(tag, name, PLOT_STYLE_NAMES),
        code => Err(mismatch(tag.line, code, name)),
    }
}

/// Decode a coordinate from consecutive 10/20/optional 30 tags.  The tag
/// after the Y component decides the dimension: a code 30 tag completes a
/// 3D coordinate, anything else belongs to the next entry and is pushed
/// back.
fn decode_coordinate<R: Read>(
    tags: &mut DxfTagReader<R>,
    x_tag: &DxfCodePair,
) -> Result<HeaderValue> {
    let x = x_tag.as_f64()?;

    let y_tag = tags.require_tag("premature end of input in header coordinate")?;
    if y_tag.code != 20 {
        return Err(DxfError::invalid(
            y_tag.line,
            format!(
                "expected group code 20 in header coordinate, got {}",
                y_tag.code
            ),
        ));
    }
    let y = y_tag.as_f64()?;

    match tags.next_tag()? {
        Some(tag) if tag.code == 30 => {
            let z = tag.as_f64()?;
            Ok(HeaderValue::Coordinate3d(Vector3::new(x, y, z)))
        }
        Some(tag) => {
            tags.push_back(tag);
            Ok(HeaderValue::Coordinate2d(Vector2::new(x, y)))
        }
        None => Ok(HeaderValue::Coordinate2d(Vector2::new(x, y))),
    }
}

fn restricted_text(tag: DxfCodePair, name: &str, allowed: &[&str]) -> Result<HeaderValue> {
    if allowed.contains(&name) {
        Ok(HeaderValue::Text(tag.value))
    } else {
        Err(mismatch(tag.line, tag.code, name))
    }
}

fn restricted_float(tag: DxfCodePair, name: &str, allowed: &[&str]) -> Result<HeaderValue> {
    if allowed.contains(&name) {
        Ok(HeaderValue::Float(tag.as_f64()?))
    } else {
        Err(mismatch(tag.line, tag.code, name))
    }
}

fn restricted_integer(tag: DxfCodePair, name: &str, allowed: &[&str]) -> Result<HeaderValue> {
    if allowed.contains(&name) {
        Ok(HeaderValue::Integer(tag.as_i32()?))
    } else {
        Err(mismatch(tag.line, tag.code, name))
    }
}

fn mismatch(line: usize, code: i32, name: &str) -> DxfError {
    DxfError::invalid(
        line,
        format!("unexpected group code {code} for header variable name {name}"),
    )
}
