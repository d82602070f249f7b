//! Sets of field paths.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::FieldPath;

/// A set of field paths describing which parts of a document an operation
/// touched.
///
/// Duplicates collapse and iteration is in [`FieldPath`] order. Overlapping
/// entries (`a` together with `a.b`) are allowed; [`FieldMask::covers`]
/// treats an entry as covering all of its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldMask {
    fields: BTreeSet<FieldPath>,
}

impl FieldMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path`, returning false if it was already present.
    pub fn insert(&mut self, path: FieldPath) -> bool {
        self.fields.insert(path)
    }

    /// Returns true if `path` is an exact member.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.fields.contains(path)
    }

    /// Returns true if `path` is a member or has an ancestor that is.
    pub fn covers(&self, path: &FieldPath) -> bool {
        self.fields.iter().any(|field| field.is_prefix_of(path))
    }

    /// Returns the set union of both masks.
    pub fn union(&self, other: &FieldMask) -> FieldMask {
        Self {
            fields: self.fields.union(&other.fields).cloned().collect(),
        }
    }

    /// Iterates the paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldPath> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldPath> for FieldMask {
    fn from_iter<I: IntoIterator<Item = FieldPath>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldPath> for FieldMask {
    fn extend<I: IntoIterator<Item = FieldPath>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for FieldMask {
    type Item = FieldPath;
    type IntoIter = std::collections::btree_set::IntoIter<FieldPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMask {
    type Item = &'a FieldPath;
    type IntoIter = std::collections::btree_set::Iter<'a, FieldPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, path) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", path)?;
        }
        f.write_str("}")
    }
}
