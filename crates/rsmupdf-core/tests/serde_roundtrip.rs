//! Serde serialization/deserialization round-trip tests.
//!
//! These tests verify that the geometry types serialize to JSON with their
//! field names and deserialize back to equal values.

#![cfg(feature = "serde")]

use rsmupdf_core::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

#[test]
fn test_serde_point() {
    roundtrip(&Point::new(3.25, -2.5));
}

#[test]
fn test_serde_matrix() {
    roundtrip(&Matrix::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0));
    roundtrip(&Matrix::IDENTITY);
}

#[test]
fn test_serde_rect_and_irect() {
    roundtrip(&Rect::new(10.0, 20.0, 300.0, 400.0));
    roundtrip(&IRect::new(-1, 0, 612, 792));
}

#[test]
fn test_serde_quad() {
    roundtrip(&Rect::new(10.0, 20.0, 100.0, 80.0).quad());
}

#[test]
fn test_serde_rect_field_names() {
    let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"x0": 1.0, "y0": 2.0, "x1": 3.0, "y1": 4.0})
    );
}

#[test]
fn test_serde_quad_from_json() {
    let json = r#"{
        "ul": {"x": 0.0, "y": 0.0},
        "ur": {"x": 5.0, "y": 0.0},
        "ll": {"x": 0.0, "y": 2.0},
        "lr": {"x": 5.0, "y": 2.0}
    }"#;
    let quad: Quad = serde_json::from_str(json).unwrap();
    assert!(quad.is_rectangular());
    assert_eq!(quad.rect(), Rect::new(0.0, 0.0, 5.0, 2.0));
}
