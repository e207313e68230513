//! Section writers
//!
//! Emission order and per-record tag order are fixed; writing the same
//! document twice produces identical bytes.

use super::tag_writer::DxfTagWriter;
use crate::entities::{Arc, Circle, Ellipse, Entities, EntityCommon, Line, LwPolyline, Point, Ray};
use crate::error::{DxfError, Result};
use crate::header::{Header, HeaderValue};
use crate::tables::{Layer, LineType, Tables};
use crate::types::Vector3;
use std::io::Write;

/// Writes the sections of a document
pub struct SectionWriter<'a, W: Write> {
    writer: &'a mut DxfTagWriter<W>,
}

impl<'a, W: Write> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut DxfTagWriter<W>) -> Self {
        Self { writer }
    }

    fn write_section_begin(&mut self, name: &str) -> Result<()> {
        self.writer.write_string(0, "SECTION")?;
        self.writer.write_string(2, name)
    }

    fn write_section_end(&mut self) -> Result<()> {
        self.writer.write_string(0, "ENDSEC")
    }

    /// Write the HEADER section
    pub fn write_header(&mut self, header: &Header) -> Result<()> {
        self.write_section_begin("HEADER")?;
        for (name, value) in header.iter() {
            self.writer.write_string(9, name)?;
            match value {
                HeaderValue::Integer(v) => self.writer.write_i32(70, *v)?,
                HeaderValue::Float(v) => self.writer.write_f64(40, *v)?,
                HeaderValue::Bool(v) => self.writer.write_i16(290, i16::from(*v))?,
                HeaderValue::Text(v) => self.writer.write_string(1, v)?,
                HeaderValue::Coordinate2d(v) => {
                    self.writer.write_f64(10, v.x)?;
                    self.writer.write_f64(20, v.y)?;
                }
                HeaderValue::Coordinate3d(v) => {
                    self.writer.write_f64(10, v.x)?;
                    self.writer.write_f64(20, v.y)?;
                    self.writer.write_f64(30, v.z)?;
                }
            }
        }
        self.write_section_end()
    }

    /// Write the TABLES section (LTYPE table, then LAYER table)
    pub fn write_tables(&mut self, tables: &Tables) -> Result<()> {
        self.write_section_begin("TABLES")?;

        self.writer.write_string(0, "TABLE")?;
        self.writer.write_string(2, "LTYPE")?;
        self.writer.write_count(70, tables.line_types.len())?;
        for line_type in &tables.line_types {
            self.write_line_type(line_type)?;
        }
        self.writer.write_string(0, "ENDTAB")?;

        self.writer.write_string(0, "TABLE")?;
        self.writer.write_string(2, "LAYER")?;
        self.writer.write_count(70, tables.layers.len())?;
        for layer in &tables.layers {
            self.write_layer(layer, tables)?;
        }
        self.writer.write_string(0, "ENDTAB")?;

        self.write_section_end()
    }

    fn write_line_type(&mut self, line_type: &LineType) -> Result<()> {
        self.writer.write_string(0, "LTYPE")?;
        self.writer.write_string(2, &line_type.name)?;
        self.writer.write_i16(70, line_type.flags)?;
        self.writer.write_string(3, &line_type.display_name)?;
        self.writer.write_i16(72, 65)?;
        self.writer.write_i16(73, 0)?;
        self.writer.write_f64(40, 0.0)?;
        Ok(())
    }

    fn write_layer(&mut self, layer: &Layer, tables: &Tables) -> Result<()> {
        let line_type = tables.line_types.get(layer.line_type).ok_or_else(|| {
            DxfError::UnresolvedReference(format!(
                "linetype index {} of layer '{}'",
                layer.line_type, layer.name
            ))
        })?;

        self.writer.write_string(0, "LAYER")?;
        self.writer.write_string(2, &layer.name)?;
        self.writer.write_i16(70, layer.flags.bits())?;
        self.writer.write_i16(62, layer.color)?;
        self.writer.write_string(6, &line_type.name)?;
        Ok(())
    }

    /// Write the (empty) BLOCKS section
    pub fn write_blocks(&mut self) -> Result<()> {
        self.write_section_begin("BLOCKS")?;
        self.write_section_end()
    }

    /// Write the ENTITIES section, one entity kind at a time
    pub fn write_entities(&mut self, entities: &Entities, tables: &Tables) -> Result<()> {
        self.write_section_begin("ENTITIES")?;

        for point in &entities.points {
            self.write_point(point, tables)?;
        }
        for ray in &entities.rays {
            self.write_ray(ray, tables)?;
        }
        for line in &entities.lines {
            self.write_line(line, tables)?;
        }
        for circle in &entities.circles {
            self.write_circle(circle, tables)?;
        }
        for arc in &entities.arcs {
            self.write_arc(arc, tables)?;
        }
        for ellipse in &entities.ellipses {
            self.write_ellipse(ellipse, tables)?;
        }
        for polyline in &entities.lw_polylines {
            self.write_lw_polyline(polyline, tables)?;
        }

        self.write_section_end()
    }

    /// Write the entity type tag, subclass marker, and common attributes,
    /// validating that the layer name resolves
    fn write_entity_begin(
        &mut self,
        entity_type: &str,
        subclass: &str,
        common: &EntityCommon,
        tables: &Tables,
    ) -> Result<()> {
        if tables.layer_index(&common.layer).is_none() {
            return Err(DxfError::UnresolvedReference(format!(
                "layer '{}' of {} entity",
                common.layer, entity_type
            )));
        }
        self.writer.write_string(0, entity_type)?;
        self.writer.write_string(100, subclass)?;
        self.writer.write_string(8, &common.layer)?;
        self.writer.write_i16(62, common.color)?;
        Ok(())
    }

    fn write_coordinate(&mut self, base_code: i32, v: Vector3) -> Result<()> {
        self.writer.write_f64(base_code, v.x)?;
        self.writer.write_f64(base_code + 10, v.y)?;
        self.writer.write_f64(base_code + 20, v.z)?;
        Ok(())
    }

    fn write_thickness(&mut self, thickness: Option<f64>) -> Result<()> {
        if let Some(thickness) = thickness {
            self.writer.write_f64(39, thickness)?;
        }
        Ok(())
    }

    fn write_extrusion(&mut self, extrusion: Option<Vector3>) -> Result<()> {
        if let Some(extrusion) = extrusion {
            self.writer.write_f64(210, extrusion.x)?;
            self.writer.write_f64(220, extrusion.y)?;
            self.writer.write_f64(230, extrusion.z)?;
        }
        Ok(())
    }

    fn write_point(&mut self, point: &Point, tables: &Tables) -> Result<()> {
        self.write_entity_begin("POINT", "AcDbPoint", &point.common, tables)?;
        self.write_thickness(point.thickness)?;
        self.write_coordinate(10, point.location)?;
        self.write_extrusion(point.extrusion)
    }

    fn write_ray(&mut self, ray: &Ray, tables: &Tables) -> Result<()> {
        self.write_entity_begin("RAY", "AcDbRay", &ray.common, tables)?;
        self.write_coordinate(10, ray.start)?;
        self.write_coordinate(11, ray.direction)
    }

    fn write_line(&mut self, line: &Line, tables: &Tables) -> Result<()> {
        self.write_entity_begin("LINE", "AcDbLine", &line.common, tables)?;
        self.write_thickness(line.thickness)?;
        self.write_coordinate(10, line.start)?;
        self.write_coordinate(11, line.end)?;
        self.write_extrusion(line.extrusion)
    }

    fn write_circle(&mut self, circle: &Circle, tables: &Tables) -> Result<()> {
        self.write_entity_begin("CIRCLE", "AcDbCircle", &circle.common, tables)?;
        self.write_thickness(circle.thickness)?;
        self.write_coordinate(10, circle.center)?;
        self.writer.write_f64(40, circle.radius)?;
        self.write_extrusion(circle.extrusion)
    }

    fn write_arc(&mut self, arc: &Arc, tables: &Tables) -> Result<()> {
        self.write_entity_begin("ARC", "AcDbCircle", &arc.common, tables)?;
        self.write_thickness(arc.thickness)?;
        self.write_coordinate(10, arc.center)?;
        self.writer.write_f64(40, arc.radius)?;
        self.writer.write_string(100, "AcDbArc")?;
        self.writer.write_f64(50, arc.start_angle)?;
        self.writer.write_f64(51, arc.end_angle)?;
        self.write_extrusion(arc.extrusion)
    }

    fn write_ellipse(&mut self, ellipse: &Ellipse, tables: &Tables) -> Result<()> {
        self.write_entity_begin("ELLIPSE", "AcDbEllipse", &ellipse.common, tables)?;
        self.write_coordinate(10, ellipse.center)?;
        self.write_coordinate(11, ellipse.major_axis_end)?;
        self.writer.write_f64(40, ellipse.axis_ratio)?;
        self.writer.write_f64(41, ellipse.start_parameter)?;
        self.writer.write_f64(42, ellipse.end_parameter)?;
        self.write_extrusion(ellipse.extrusion)
    }

    fn write_lw_polyline(&mut self, polyline: &LwPolyline, tables: &Tables) -> Result<()> {
        self.write_entity_begin("LWPOLYLINE", "AcDbPolyline", &polyline.common, tables)?;
        self.writer.write_count(90, polyline.vertices.len())?;
        self.writer.write_i16(70, i16::from(polyline.is_closed))?;
        if let Some(elevation) = polyline.elevation {
            self.writer.write_f64(38, elevation)?;
        }
        for vertex in &polyline.vertices {
            self.writer.write_f64(10, vertex.location.x)?;
            self.writer.write_f64(20, vertex.location.y)?;
            if let Some(bulge) = vertex.bulge {
                self.writer.write_f64(42, bulge)?;
            }
        }
        Ok(())
    }
}
