//! Equality, ordering, canonical ids and deep clones over the whole value
//! domain.

use std::cmp::Ordering;

use firestore_model::{
    canonical_id, compare, deep_clone, server_timestamp, GeoPoint, Timestamp, Value,
};

use crate::helpers::{array, default_reference, map, reference};

const TIMESTAMP_1: Timestamp = Timestamp::new(1_463_739_600, 0);
const TIMESTAMP_2: Timestamp = Timestamp::new(1_475_053_200, 0);

fn geo(latitude: f64, longitude: f64) -> Value {
    Value::GeoPoint(GeoPoint::new(latitude, longitude))
}

/// Every pair within a group is `==`; every pair across groups is `!=`.
fn verify_equality_groups(groups: &[Vec<Value>]) {
    for (i, left_group) in groups.iter().enumerate() {
        for (j, right_group) in groups.iter().enumerate() {
            for left in left_group {
                for right in right_group {
                    if i == j {
                        assert_eq!(left, right, "expected equal: {} and {}", left, right);
                    } else {
                        assert_ne!(left, right, "expected unequal: {} and {}", left, right);
                    }
                }
            }
        }
    }
}

/// Values within a group compare `Equal`; groups are in ascending order.
fn verify_ordering_groups(groups: &[Vec<Value>]) {
    for (i, left_group) in groups.iter().enumerate() {
        for (j, right_group) in groups.iter().enumerate() {
            let expected = i.cmp(&j);
            for left in left_group {
                for right in right_group {
                    assert_eq!(
                        compare(left, right),
                        expected,
                        "order check failed for '{}' and '{}'",
                        left,
                        right
                    );
                }
            }
        }
    }
}

#[test]
fn test_equality_groups() {
    let groups = vec![
        vec![Value::Null, Value::Null],
        vec![Value::Boolean(false), Value::Boolean(false)],
        vec![Value::Boolean(true), Value::Boolean(true)],
        vec![
            Value::Double(f64::NAN),
            Value::Double(f64::from_bits(0x7ff8_0000_0000_0000)),
            Value::Double(f64::from_bits(0x7fff_0000_0000_0000)),
            Value::Double(f64::from_bits(0x7ff8_0000_0000_0001)),
            Value::Double(f64::from_bits(0x7ff8_0000_0000_0002)),
        ],
        // -0.0 and 0.0 compare the same but are not equal.
        vec![Value::Double(-0.0)],
        vec![Value::Double(0.0)],
        vec![Value::Integer(1), Value::from(1i32)],
        // Doubles and integers are never equal.
        vec![Value::Double(1.0), Value::Double(1.0)],
        vec![Value::Double(1.1), Value::Double(1.1)],
        vec![Value::Bytes(vec![0, 1, 1])],
        vec![Value::Bytes(vec![0, 1])],
        vec![Value::from("string"), Value::from("string")],
        vec![Value::from("strin")],
        vec![Value::from("strin\0")],
        // e + combining acute accent
        vec![Value::from("e\u{301}b")],
        // e with acute accent
        vec![Value::from("\u{e9}a")],
        vec![
            Value::Timestamp(TIMESTAMP_1),
            Value::Timestamp(Timestamp::parse_rfc3339("2016-05-20T10:20:00Z").unwrap()),
        ],
        vec![Value::Timestamp(TIMESTAMP_2)],
        vec![
            server_timestamp(TIMESTAMP_1, None),
            server_timestamp(TIMESTAMP_1, Some(Value::Integer(7))),
        ],
        vec![server_timestamp(TIMESTAMP_2, None)],
        vec![geo(0.0, 1.0), geo(0.0, 1.0)],
        vec![geo(1.0, 0.0)],
        vec![
            default_reference("coll/doc1"),
            default_reference("coll/doc1"),
        ],
        vec![default_reference("coll/doc2")],
        vec![reference("project/baz", "coll/doc2")],
        vec![
            array(vec![Value::from("foo"), Value::from("bar")]),
            array(vec![Value::from("foo"), Value::from("bar")]),
        ],
        vec![array(vec![
            Value::from("foo"),
            Value::from("bar"),
            Value::from("baz"),
        ])],
        vec![array(vec![Value::from("foo")])],
        vec![
            map(vec![("bar", Value::Integer(1)), ("foo", Value::Integer(2))]),
            map(vec![("foo", Value::Integer(2)), ("bar", Value::Integer(1))]),
        ],
        vec![map(vec![("bar", Value::Integer(2)), ("foo", Value::Integer(1))])],
        vec![map(vec![("bar", Value::Integer(1))])],
        vec![map(vec![("foo", Value::Integer(1))])],
    ];

    verify_equality_groups(&groups);
}

#[test]
fn test_ordering_groups() {
    let groups = vec![
        // null first
        vec![Value::Null],
        // booleans
        vec![Value::Boolean(false)],
        vec![Value::Boolean(true)],
        // numbers, NaN before everything else
        vec![Value::Double(f64::NAN), Value::Double(-f64::NAN)],
        vec![Value::Double(f64::NEG_INFINITY)],
        vec![Value::Double(-1e20)],
        vec![Value::Integer(i64::MIN)],
        vec![Value::Double(-0.1)],
        // zeros all compare the same
        vec![Value::Double(-0.0), Value::Double(0.0), Value::Integer(0)],
        vec![Value::Double(0.1)],
        // doubles and integers compare the same
        vec![Value::Double(1.0), Value::Integer(1)],
        vec![Value::Integer(i64::MAX)],
        vec![Value::Double(1e20)],
        vec![Value::Double(f64::INFINITY)],
        // timestamps
        vec![Value::Timestamp(TIMESTAMP_1)],
        vec![Value::Timestamp(TIMESTAMP_2)],
        // server timestamps come after all concrete timestamps
        vec![server_timestamp(TIMESTAMP_1, None)],
        vec![server_timestamp(TIMESTAMP_2, None)],
        // strings
        vec![Value::from("")],
        vec![Value::from("\u{1}\u{d7ff}\u{e000}\u{ffff}")],
        vec![Value::from("(\u{256f}\u{b0}\u{25a1}\u{b0}\u{ff09}\u{256f}\u{fe35} \u{253b}\u{2501}\u{253b}")],
        vec![Value::from("a")],
        vec![Value::from("abc\0 def")],
        vec![Value::from("abc def")],
        // e + combining acute accent
        vec![Value::from("e\u{301}b")],
        vec![Value::from("\u{e6}")],
        // e with acute accent
        vec![Value::from("\u{e9}a")],
        // bytes
        vec![Value::Bytes(vec![])],
        vec![Value::Bytes(vec![0])],
        vec![Value::Bytes(vec![0, 1, 2, 3, 4])],
        vec![Value::Bytes(vec![0, 1, 2, 4, 3])],
        vec![Value::Bytes(vec![255])],
        // references
        vec![reference("p1/d1", "c1/doc1")],
        vec![reference("p1/d1", "c1/doc2")],
        vec![reference("p1/d1", "c10/doc1")],
        vec![reference("p1/d1", "c2/doc1")],
        vec![reference("p1/d2", "c1/doc1")],
        vec![reference("p2/d1", "c1/doc1")],
        // geo points
        vec![geo(-90.0, -180.0)],
        vec![geo(-90.0, 0.0)],
        vec![geo(-90.0, 180.0)],
        vec![geo(0.0, -180.0)],
        vec![geo(0.0, 0.0)],
        vec![geo(0.0, 180.0)],
        vec![geo(1.0, -180.0)],
        vec![geo(1.0, 0.0)],
        vec![geo(1.0, 180.0)],
        vec![geo(90.0, -180.0)],
        vec![geo(90.0, 0.0)],
        vec![geo(90.0, 180.0)],
        // arrays
        vec![array(vec![Value::from("bar")])],
        vec![array(vec![Value::from("foo"), Value::Integer(1)])],
        vec![array(vec![Value::from("foo"), Value::Integer(2)])],
        vec![array(vec![Value::from("foo"), Value::from("0")])],
        // maps
        vec![map(vec![("bar", Value::Integer(0))])],
        vec![map(vec![("bar", Value::Integer(0)), ("foo", Value::Integer(1))])],
        vec![map(vec![("foo", Value::Integer(1))])],
        vec![map(vec![("foo", Value::Integer(2))])],
        vec![map(vec![("foo", Value::from("0"))])],
    ];

    verify_ordering_groups(&groups);
}

#[test]
fn test_sort_uses_total_order() {
    let mut values = vec![
        Value::from("b"),
        Value::Integer(3),
        Value::Null,
        Value::Double(2.5),
        Value::Boolean(true),
        Value::from("a"),
    ];
    values.sort_by(compare);
    let ids: Vec<String> = values.iter().map(canonical_id).collect();
    assert_eq!(ids, ["null", "true", "2.5", "3", "a", "b"]);
}

#[test]
fn test_canonical_ids() {
    let cases = vec![
        (Value::Null, "null"),
        (Value::Boolean(true), "true"),
        (Value::Boolean(false), "false"),
        (Value::Integer(1), "1"),
        (Value::Double(1.0), "1.0"),
        (Value::Timestamp(Timestamp::new(30, 1000)), "time(30,1000)"),
        (Value::from("a"), "a"),
        (Value::from("a\0b"), "a\0b"),
        (Value::Bytes(vec![1, 2, 3]), "010203"),
        (reference("p1/d1", "c1/doc1"), "c1/doc1"),
        (geo(30.0, 60.0), "geo(30.0,60.0)"),
        (
            array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
            "[1,2,3]",
        ),
        (
            map(vec![
                ("a", Value::Integer(1)),
                ("b", Value::Integer(2)),
                ("c", Value::from("3")),
            ]),
            "{a:1,b:2,c:3}",
        ),
        (
            map(vec![(
                "a",
                array(vec![Value::from("b"), map(vec![("c", geo(30.0, 60.0))])]),
            )]),
            "{a:[b,{c:geo(30.0,60.0)}]}",
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(canonical_id(&value), expected);
    }
}

#[test]
fn test_deep_clone_survives_intermediate_copies() {
    let values = vec![
        Value::Null,
        Value::Boolean(true),
        Value::Boolean(false),
        Value::Integer(1),
        Value::Double(1.0),
        Value::Timestamp(Timestamp::new(30, 1000)),
        Value::from("a"),
        Value::from("a\0b"),
        Value::Bytes(vec![1, 2, 3]),
        reference("p1/d1", "c1/doc1"),
        geo(30.0, 60.0),
        array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
        map(vec![
            ("a", Value::Integer(1)),
            ("b", Value::Integer(2)),
            ("c", Value::from("3")),
        ]),
        map(vec![(
            "a",
            array(vec![Value::from("b"), map(vec![("c", geo(30.0, 60.0))])]),
        )]),
    ];

    for value in values {
        let outer = {
            let inner = deep_clone(&value);
            assert_eq!(inner, value);
            deep_clone(&inner)
        };
        assert_eq!(outer, value);
        assert_eq!(compare(&outer, &value), Ordering::Equal);
    }
}
