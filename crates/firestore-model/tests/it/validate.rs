use firestore_model::limits::MAX_NESTING_DEPTH;
use firestore_model::{validate_value, GeoPoint, MapBuilder, Timestamp, ValidationError, Value};

#[test]
fn test_built_document_is_valid() {
    let doc = MapBuilder::new()
        .timestamp("created", Timestamp::parse_rfc3339("2024-02-29T12:00:00.5+01:00").unwrap())
        .geo_point("where", -33.86, 151.21)
        .array("nested", |a| a.map(|m| m.double("x", f64::NAN)))
        .server_timestamp("updated", Timestamp::new(0, 0))
        .build_object();

    assert_eq!(validate_value(doc.as_value()), Ok(()));
}

#[test]
fn test_first_violation_is_reported() {
    let doc = MapBuilder::new()
        .field("bad", Value::GeoPoint(GeoPoint::new(0.0, -200.0)))
        .build();
    assert_eq!(
        validate_value(&doc),
        Err(ValidationError::LongitudeOutOfRange { longitude: -200.0 })
    );
}

#[test]
fn test_depth_limit_error_message() {
    let mut value = Value::Null;
    for _ in 0..=MAX_NESTING_DEPTH {
        value = Value::Array(vec![value]);
    }
    let err = validate_value(&value).unwrap_err();
    assert_eq!(err.to_string(), "value nesting depth exceeds maximum 20");
}
