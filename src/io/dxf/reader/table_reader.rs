//! Table record decoders
//!
//! Each record is a run of field tags terminated by the next group code 0
//! tag.  The terminator is returned to the caller; it is the leading tag
//! of whatever follows the record.

use super::tag_reader::{DxfCodePair, DxfTagReader};
use crate::error::Result;
use crate::tables::{Layer, LayerFlags, LineType};
use std::io::Read;

const PREMATURE_END: &str = "premature end of input in TABLES section";

/// Decode one LTYPE record
pub(crate) fn read_line_type<R: Read>(
    tags: &mut DxfTagReader<R>,
) -> Result<(LineType, DxfCodePair)> {
    let mut line_type = LineType::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            2 => line_type.name = tag.value.clone(),
            3 => line_type.display_name = tag.value.clone(),
            70 => line_type.flags = tag.as_i16()?,
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((line_type, tag))
}

/// Decode one LAYER record.  The layer's linetype name (group code 6) is
/// resolved against the linetypes decoded earlier in the same read;
/// unresolved names fall back to index 0.
pub(crate) fn read_layer<R: Read>(
    tags: &mut DxfTagReader<R>,
    line_type_names: &[String],
) -> Result<(Layer, DxfCodePair)> {
    let mut layer = Layer::default();

    let mut tag = tags.require_tag(PREMATURE_END)?;
    while tag.code != 0 {
        match tag.code {
            2 => layer.name = tag.value.clone(),
            6 => {
                layer.line_type = line_type_names
                    .iter()
                    .position(|name| name == &tag.value)
                    .unwrap_or(0);
            }
            62 => layer.color = tag.as_i16()?,
            70 => layer.flags = LayerFlags::from_bits_truncate(tag.as_i16()?),
            _ => {}
        }
        tag = tags.require_tag(PREMATURE_END)?;
    }

    Ok((layer, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_type() {
        let data = "2\nCONTINUOUS\n70\n64\n3\nSolid Line\n72\n65\n73\n0\n40\n0\n0\nLTYPE\n";
        let mut tags = DxfTagReader::new(data.as_bytes());
        let (lt, terminator) = read_line_type(&mut tags).unwrap();
        assert_eq!(lt.name, "CONTINUOUS");
        assert_eq!(lt.display_name, "Solid Line");
        assert_eq!(lt.flags, 64);
        assert!(terminator.is(0, "LTYPE"));
    }

    #[test]
    fn test_read_layer() {
        let data = "2\nWalls\n70\n5\n62\n3\n6\nDASHED\n0\nENDTAB\n";
        let mut tags = DxfTagReader::new(data.as_bytes());
        let names = vec!["CONTINUOUS".to_string(), "DASHED".to_string()];
        let (layer, terminator) = read_layer(&mut tags, &names).unwrap();
        assert_eq!(layer.name, "Walls");
        assert!(layer.is_frozen());
        assert!(layer.is_locked());
        assert_eq!(layer.color, 3);
        assert_eq!(layer.line_type, 1);
        assert!(terminator.is(0, "ENDTAB"));
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let data = "2\n0\n5\n10\n330\n2\n100\nAcDbLayerTableRecord\n70\n0\n0\nENDTAB\n";
        let mut tags = DxfTagReader::new(data.as_bytes());
        let (layer, _) = read_layer(&mut tags, &[]).unwrap();
        assert_eq!(layer.name, "0");
        assert!(layer.flags.is_empty());
    }

    #[test]
    fn test_unresolved_linetype_defaults_to_zero() {
        let data = "2\nWalls\n6\nMISSING\n0\nENDTAB\n";
        let mut tags = DxfTagReader::new(data.as_bytes());
        let (layer, _) = read_layer(&mut tags, &["CONTINUOUS".to_string()]).unwrap();
        assert_eq!(layer.line_type, 0);
    }
}
