//! Ordering, equality, canonical ids and deep copies of values.
//!
//! These are pure functions over shared references and never fail: every
//! well-formed [`Value`] has a defined order, equality result and canonical
//! id. Ordering and equality are deliberately distinct relations; see
//! [`compare`] and [`values_equal`].

pub mod canonical;
pub mod equality;
pub mod order;

pub use canonical::canonical_id;
pub use equality::values_equal;
pub use order::compare;

use crate::model::Value;

/// Returns an independently owned copy of `value`.
///
/// Values own their children, so the copy shares no storage with the source
/// and either may be dropped or mutated without affecting the other.
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}
