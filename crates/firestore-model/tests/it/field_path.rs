use firestore_model::{FieldMask, FieldPath, InvalidPathError, ObjectValue, Value};

use crate::helpers::path;

#[test]
fn test_escaped_segments_address_fields() {
    let mut doc = ObjectValue::new();
    doc.set(&path("`a.b`.c"), Value::Integer(1));
    doc.set(&path("a.b"), Value::Integer(2));

    assert_eq!(doc.fields().len(), 2);
    assert_eq!(doc.fields().get("a.b").map(Value::to_string), Some("{c:1}".to_string()));
    assert_eq!(doc.get(&FieldPath::from(["a.b", "c"])), Some(&Value::Integer(1)));
    assert_eq!(doc.get(&FieldPath::from(["a", "b"])), Some(&Value::Integer(2)));
}

#[test]
fn test_mask_display_uses_canonical_strings() {
    let mask: FieldMask = [
        FieldPath::from(["b"]),
        FieldPath::from(["a", "c d"]),
        FieldPath::from(["a"]),
    ]
    .into_iter()
    .collect();
    assert_eq!(mask.to_string(), "{a, a.`c d`, b}");
}

#[test]
fn test_canonical_string_round_trips() {
    for segments in [
        vec!["simple"],
        vec!["with.dot", "x"],
        vec!["back`tick"],
        vec![r"back\slash"],
        vec!["", "empty-first"],
        vec!["\u{e9}"],
    ] {
        let original = FieldPath::from_segments(segments.clone());
        if segments.iter().any(|s| s.is_empty()) {
            // Empty segments render as "``", which the parser rejects.
            assert!(FieldPath::parse(&original.canonical_string()).is_err());
            continue;
        }
        let reparsed: FieldPath = original.canonical_string().parse().unwrap();
        assert_eq!(reparsed, original);
    }
}

#[test]
fn test_error_messages_name_the_path() {
    let err = FieldPath::parse("a..b").unwrap_err();
    assert_eq!(
        err,
        InvalidPathError::EmptySegment {
            path: "a..b".to_string()
        }
    );
    assert!(err.to_string().contains("\"a..b\""));

    let err = FieldPath::parse("`open").unwrap_err();
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn test_prefix_relations_and_order() {
    let a = path("a");
    let ab = path("a.b");
    let abc = path("a.b.c");
    assert!(a.is_prefix_of(&abc));
    assert!(a.is_immediate_parent_of(&ab));
    assert!(!a.is_immediate_parent_of(&abc));
    assert!(a < ab && ab < abc && abc < path("b"));
    assert_eq!(abc.parent(), Some(ab.clone()));

    let mut popped = abc.clone();
    assert_eq!(popped.pop_last(), Some("c".to_string()));
    assert_eq!(popped, ab);
    assert_eq!(FieldPath::empty().parent(), None);
}
