//! Integration tests for DXF writing

use opendxf::{
    write_file, write_to, Document, DxfError, HeaderValue, Layer, Line, LineType, Point, Vector3,
};

fn minimal_document() -> Document {
    let mut doc = Document::new();
    doc.tables.line_types.push(LineType::continuous());
    doc.tables.layers.push(Layer::new("0"));
    doc
}

fn write_to_string(doc: &Document) -> String {
    let mut buf = Vec::new();
    write_to(doc, &mut buf).expect("write should succeed");
    String::from_utf8(buf).expect("output should be valid UTF-8")
}

#[test]
fn test_minimal_document_output() {
    let doc = minimal_document();
    let expected = format!(
        "\
999
opendxf {}
  0
SECTION
  2
HEADER
  0
ENDSEC
  0
SECTION
  2
TABLES
  0
TABLE
  2
LTYPE
 70
1
  0
LTYPE
  2
CONTINUOUS
 70
64
  3
Solid Line
 72
65
 73
0
 40
0.000000
  0
ENDTAB
  0
TABLE
  2
LAYER
 70
1
  0
LAYER
  2
0
 70
0
 62
7
  6
CONTINUOUS
  0
ENDTAB
  0
ENDSEC
  0
SECTION
  2
BLOCKS
  0
ENDSEC
  0
SECTION
  2
ENTITIES
  0
ENDSEC
  0
EOF
",
        opendxf::VERSION
    );
    assert_eq!(write_to_string(&doc), expected);
}

#[test]
fn test_repeated_writes_are_byte_identical() {
    let mut doc = minimal_document();
    doc.header
        .insert("$ACADVER", HeaderValue::Text("AC1032".to_string()));
    doc.header.insert("$LUNITS", HeaderValue::Integer(2));
    doc.entities.lines.push(Line::new(
        Vector3::new(0.0, 0.5, 0.0),
        Vector3::new(1.0, 1.5, 0.0),
    ));

    assert_eq!(write_to_string(&doc), write_to_string(&doc));
}

#[test]
fn test_header_value_dispatch() {
    let mut doc = minimal_document();
    doc.header
        .insert("$ACADVER", HeaderValue::Text("AC1032".to_string()));
    doc.header.insert("$LUNITS", HeaderValue::Integer(2));
    doc.header.insert("$TEXTSIZE", HeaderValue::Float(2.5));
    doc.header.insert("$LWDISPLAY", HeaderValue::Bool(true));
    doc.header.insert(
        "$LIMMIN",
        HeaderValue::Coordinate2d(opendxf::Vector2::new(0.0, 0.0)),
    );
    doc.header.insert(
        "$EXTMIN",
        HeaderValue::Coordinate3d(Vector3::new(1.0, 2.0, 3.0)),
    );

    let output = write_to_string(&doc);
    assert!(output.contains("  9\n$ACADVER\n  1\nAC1032\n"));
    assert!(output.contains("  9\n$LUNITS\n 70\n2\n"));
    assert!(output.contains("  9\n$TEXTSIZE\n 40\n2.500000\n"));
    assert!(output.contains("  9\n$LWDISPLAY\n290\n1\n"));
    assert!(output.contains("  9\n$LIMMIN\n 10\n0.000000\n 20\n0.000000\n  9\n"));
    assert!(output.contains("  9\n$EXTMIN\n 10\n1.000000\n 20\n2.000000\n 30\n3.000000\n"));
}

#[test]
fn test_entity_group_order_is_fixed() {
    let mut doc = minimal_document();
    // Insert in reverse of the emission order
    doc.entities
        .lw_polylines
        .push(opendxf::LwPolyline::default());
    doc.entities.circles.push(opendxf::Circle::new(
        Vector3::ZERO,
        1.0,
    ));
    doc.entities.points.push(Point::from_coords(1.0, 2.0, 0.0));

    let output = write_to_string(&doc);
    let point_at = output.find("  0\nPOINT\n").expect("point written");
    let circle_at = output.find("  0\nCIRCLE\n").expect("circle written");
    let polyline_at = output.find("  0\nLWPOLYLINE\n").expect("polyline written");
    assert!(point_at < circle_at);
    assert!(circle_at < polyline_at);
}

#[test]
fn test_optional_fields_only_when_present() {
    let mut doc = minimal_document();
    let mut with_extras = Line::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    with_extras.thickness = Some(0.25);
    with_extras.extrusion = Some(Vector3::UNIT_Z);
    doc.entities.lines.push(with_extras);

    let output = write_to_string(&doc);
    assert!(output.contains(" 39\n0.250000\n"));
    assert!(output.contains("210\n0.000000\n220\n0.000000\n230\n1.000000\n"));

    let mut doc = minimal_document();
    doc.entities
        .lines
        .push(Line::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)));
    let output = write_to_string(&doc);
    assert!(!output.contains(" 39\n"));
    assert!(!output.contains("210\n"));
}

#[test]
fn test_layer_linetype_resolved_by_index() {
    let mut doc = Document::new();
    doc.tables.line_types.push(LineType::continuous());
    doc.tables
        .line_types
        .push(LineType::new("DASHED", "__ __ __"));
    let mut layer = Layer::new("Walls");
    layer.line_type = 1;
    doc.tables.layers.push(layer);

    let output = write_to_string(&doc);
    assert!(output.contains("  0\nLAYER\n  2\nWalls\n 70\n0\n 62\n7\n  6\nDASHED\n"));
}

#[test]
fn test_unresolved_layer_linetype_index() {
    let mut doc = Document::new();
    let mut layer = Layer::new("Walls");
    layer.line_type = 3;
    doc.tables.layers.push(layer);

    let mut buf = Vec::new();
    let err = write_to(&doc, &mut buf).unwrap_err();
    assert!(matches!(err, DxfError::UnresolvedReference(_)));
    assert!(err.to_string().contains("linetype index 3"));
}

#[test]
fn test_unresolved_entity_layer() {
    let mut doc = minimal_document();
    let mut point = Point::from_coords(0.0, 0.0, 0.0);
    point.common.layer = "NoSuchLayer".to_string();
    doc.entities.points.push(point);

    let mut buf = Vec::new();
    let err = write_to(&doc, &mut buf).unwrap_err();
    assert!(matches!(err, DxfError::UnresolvedReference(_)));
    assert!(err.to_string().contains("NoSuchLayer"));
}

#[test]
fn test_write_to_unopenable_destination() {
    let doc = minimal_document();
    let result = write_file(&doc, "/nonexistent-dir-for-opendxf-tests/out.dxf");
    assert!(matches!(result, Err(DxfError::FileOpen { .. })));
}

#[test]
fn test_polyline_vertex_tags() {
    let mut doc = minimal_document();
    let mut polyline = opendxf::LwPolyline::from_points(vec![
        opendxf::Vector2::new(0.0, 0.0),
        opendxf::Vector2::new(5.0, 0.0),
    ]);
    polyline.vertices[1].bulge = Some(0.5);
    polyline.is_closed = true;
    polyline.elevation = Some(2.0);
    doc.entities.lw_polylines.push(polyline);

    let output = write_to_string(&doc);
    assert!(output.contains(
        " 90\n2\n 70\n1\n 38\n2.000000\n 10\n0.000000\n 20\n0.000000\n 10\n5.000000\n 20\n0.000000\n 42\n0.500000\n"
    ));
}
