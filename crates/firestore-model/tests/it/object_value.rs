use firestore_model::{
    server_timestamp, FieldMask, FieldPath, MapBuilder, ObjectValue, Timestamp, Value,
};
use proptest::prelude::*;

use crate::helpers::{map, path};

#[test]
fn test_document_lifecycle() {
    let mut doc = MapBuilder::new()
        .string("title", "draft")
        .map("meta", |m| m.integer("views", 0).boolean("published", false))
        .build_object();

    doc.set(&path("meta.views"), Value::Integer(10));
    doc.set(&path("meta.tags.primary"), Value::from("rust"));
    doc.delete(&path("meta.published"));
    doc.delete(&path("title.nested"));

    let expected = map(vec![
        ("title", Value::from("draft")),
        (
            "meta",
            map(vec![
                ("views", Value::Integer(10)),
                ("tags", map(vec![("primary", Value::from("rust"))])),
            ]),
        ),
    ]);
    assert_eq!(doc.as_value(), &expected);
    assert_eq!(
        doc.to_field_mask().to_string(),
        "{meta.tags.primary, meta.views, title}"
    );
}

#[test]
fn test_set_all_applies_remote_patch() {
    let mut local = MapBuilder::new()
        .integer("count", 1)
        .map("profile", |p| p.string("name", "a").string("nick", "x"))
        .build_object();

    let remote = MapBuilder::new()
        .integer("count", 2)
        .map("profile", |p| p.string("name", "b"))
        .server_timestamp("updated", Timestamp::new(100, 0))
        .build_object();

    let mask: FieldMask = ["count", "profile.name", "profile.nick", "updated"]
        .iter()
        .map(|p| path(p))
        .collect();
    local.set_all(&mask, &remote);

    assert_eq!(local, remote);
    assert_eq!(
        local.get(&path("updated")),
        Some(&server_timestamp(Timestamp::new(100, 0), None))
    );
}

#[test]
fn test_into_value_round_trip() {
    let original = MapBuilder::new().integer("a", 1).build_object();
    let value = original.deep_clone().into_value();
    let restored = ObjectValue::try_from(value).unwrap();
    assert_eq!(restored, original);
    assert_eq!(restored.to_string(), "ObjectValue({a:1})");
}

#[test]
fn test_default_is_empty() {
    let doc = ObjectValue::default();
    assert!(doc.fields().is_empty());
    assert!(doc.to_field_mask().is_empty());
    assert_eq!(doc.get(&FieldPath::empty()), Some(&Value::empty_map()));
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<ObjectValue>();
    assert_send_sync::<FieldMask>();
}

fn arb_path() -> impl Strategy<Value = FieldPath> {
    prop::collection::vec("[a-c]", 1..4).prop_map(FieldPath::from_segments)
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        "[a-z]{0,3}".prop_map(Value::String),
    ]
}

#[derive(Debug, Clone)]
enum Mutation {
    Set(FieldPath, Value),
    Delete(FieldPath),
}

fn arb_mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (arb_path(), arb_leaf()).prop_map(|(p, v)| Mutation::Set(p, v)),
        arb_path().prop_map(Mutation::Delete),
    ]
}

fn apply(doc: &mut ObjectValue, mutation: &Mutation) {
    match mutation {
        Mutation::Set(path, value) => doc.set(path, value.clone()),
        Mutation::Delete(path) => doc.delete(path),
    }
}

proptest! {
    #[test]
    fn prop_mutations_are_idempotent(
        setup in prop::collection::vec(arb_mutation(), 0..8),
        mutation in arb_mutation(),
    ) {
        let mut doc = ObjectValue::new();
        for m in &setup {
            apply(&mut doc, m);
        }

        apply(&mut doc, &mutation);
        let once = doc.deep_clone();
        apply(&mut doc, &mutation);
        prop_assert_eq!(&doc, &once);
    }

    #[test]
    fn prop_set_then_get(
        setup in prop::collection::vec(arb_mutation(), 0..8),
        target in arb_path(),
        value in arb_leaf(),
    ) {
        let mut doc = ObjectValue::new();
        for m in &setup {
            apply(&mut doc, m);
        }
        doc.set(&target, value.clone());
        prop_assert_eq!(doc.get(&target), Some(&value));

        doc.delete(&target);
        prop_assert_eq!(doc.get(&target), None);
    }

    #[test]
    fn prop_set_all_with_own_mask_reproduces_source(
        setup in prop::collection::vec(arb_mutation(), 0..8),
    ) {
        let mut source = ObjectValue::new();
        for m in &setup {
            apply(&mut source, m);
        }
        let mask = source.to_field_mask();
        for leaf in &mask {
            prop_assert!(source.get(leaf).is_some());
        }

        let mut target = ObjectValue::new();
        target.set_all(&mask, &source);
        prop_assert_eq!(target.to_field_mask(), mask);
    }
}
