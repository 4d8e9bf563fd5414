#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::doc::{ShapeId, ShapeKind};

fn shape(id: ShapeId, kind: ShapeKind, x: f64, y: f64) -> Shape {
    Shape { id, kind, x, y }
}

// =============================================================
// export_document
// =============================================================

#[test]
fn export_empty_store_is_an_empty_array() {
    assert_eq!(export_document(&[]).unwrap(), "[]");
}

#[test]
fn export_is_a_bare_array_of_id_type_x_y() {
    let doc = export_document(&[shape(1, ShapeKind::Circle, 10.0, 20.0)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    let obj = items[0].as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["id"], json!(1));
    assert_eq!(obj["type"], json!("circle"));
    assert_eq!(obj["x"], json!(10.0));
    assert_eq!(obj["y"], json!(20.0));
}

#[test]
fn export_preserves_store_order() {
    let doc = export_document(&[
        shape(2, ShapeKind::Square, 0.0, 0.0),
        shape(1, ShapeKind::Triangle, 0.0, 0.0),
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    let types: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["square", "triangle"]);
}

// =============================================================
// import_document
// =============================================================

#[test]
fn import_round_trips_an_export() {
    let shapes = vec![
        shape(1, ShapeKind::Circle, 100.0, 100.0),
        shape(2, ShapeKind::Square, 115.0, 100.0),
        shape(3, ShapeKind::Triangle, 140.0, 100.0),
    ];
    let doc = export_document(&shapes).unwrap();
    assert_eq!(import_document(&doc).unwrap(), shapes);
}

#[test]
fn import_rejects_text_that_is_not_json() {
    let err = import_document("not json").unwrap_err();
    assert!(matches!(err, ImportError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to load shapes: "));
}

#[test]
fn import_rejects_object_top_level_as_invalid_format() {
    let err = import_document(r#"{"a":1}"#).unwrap_err();
    assert!(matches!(err, ImportError::NotAnArray));
    assert_eq!(err.to_string(), "Invalid file format");
}

#[test]
fn import_rejects_scalar_top_level_as_invalid_format() {
    assert!(matches!(import_document("42").unwrap_err(), ImportError::NotAnArray));
    assert!(matches!(
        import_document("\"shapes\"").unwrap_err(),
        ImportError::NotAnArray
    ));
}

#[test]
fn import_accepts_malformed_elements_leniently() {
    let shapes = import_document(r#"[{"a":1}, {"id":4,"type":"circle","x":9.0,"y":8.0}]"#).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].id, 0);
    assert_eq!(shapes[0].kind, ShapeKind::Other(String::new()));
    assert_eq!(shapes[1], shape(4, ShapeKind::Circle, 9.0, 8.0));
}

#[test]
fn import_then_export_keeps_unknown_type_tags() {
    let shapes = import_document(r#"[{"id":1,"type":"hexagon","x":1.0,"y":2.0}]"#).unwrap();
    assert_eq!(shapes[0].kind, ShapeKind::Other("hexagon".into()));

    let doc = export_document(&shapes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(value[0]["type"], json!("hexagon"));
}

#[test]
fn import_empty_array_yields_empty_sequence() {
    assert!(import_document("[]").unwrap().is_empty());
}

// =============================================================
// export_file_name
// =============================================================

#[test]
fn file_name_uses_the_title() {
    assert_eq!(export_file_name("my sketch"), "my sketch.json");
}

#[test]
fn file_name_trims_the_title() {
    assert_eq!(export_file_name("  sunset  "), "sunset.json");
}

#[test]
fn file_name_defaults_when_title_is_blank() {
    assert_eq!(export_file_name(""), "painting.json");
    assert_eq!(export_file_name("   "), "painting.json");
}
