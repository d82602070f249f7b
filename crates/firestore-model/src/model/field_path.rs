//! Field paths addressing values inside nested maps.
//!
//! A [`FieldPath`] is an ordered sequence of field names. It has two string
//! forms:
//!
//! - the **server format** parsed by [`FieldPath::parse`] and produced by
//!   [`FieldPath::canonical_string`], where segments that are not simple
//!   identifiers are wrapped in backticks and `\` escapes the next character;
//! - the **dot-separated** user format accepted by
//!   [`FieldPath::from_dot_separated`], which has no escaping at all.
//!
//! ```rust
//! use firestore_model::FieldPath;
//!
//! let path = FieldPath::parse("a.`b.c`.d")?;
//! assert_eq!(path.segments(), ["a", "b.c", "d"]);
//! assert_eq!(path.canonical_string(), "a.`b.c`.d");
//! # Ok::<(), firestore_model::InvalidPathError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidPathError;

/// An ordered sequence of field-name segments.
///
/// The derived ordering compares segments pairwise (byte-wise, as `String`
/// does) and sorts a strict prefix before any longer path.
///
/// The empty path is a sentinel meaning "the whole value". It is accepted as
/// an argument where documented but never produced by parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Returns the empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a path from raw segments. Segments are taken literally.
    ///
    /// Empty segments are accepted here even though [`FieldPath::parse`]
    /// never produces them; such a path has no parseable canonical string.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a path in server format.
    ///
    /// Segments are split on `.` outside backticks; backticks are removed and
    /// a `\` includes the following character literally. Input ends at the
    /// first NUL character.
    ///
    /// # Errors
    ///
    /// Fails on empty input, empty segments (leading, trailing or doubled
    /// dots), an unterminated backtick, or a trailing `\`.
    pub fn parse(path: &str) -> Result<Self, InvalidPathError> {
        if path.is_empty() {
            return Err(InvalidPathError::Empty);
        }

        let mut segments = Vec::new();
        let mut segment = String::new();
        let mut inside_backticks = false;

        let mut push_segment = |segment: &mut String| {
            if segment.is_empty() {
                return Err(InvalidPathError::EmptySegment {
                    path: path.to_string(),
                });
            }
            segments.push(std::mem::take(segment));
            Ok(())
        };

        let mut chars = path.chars();
        while let Some(c) = chars.next() {
            match c {
                '\0' => break,
                '.' if !inside_backticks => push_segment(&mut segment)?,
                '`' => inside_backticks = !inside_backticks,
                '\\' => match chars.next() {
                    Some(escaped) => segment.push(escaped),
                    None => {
                        return Err(InvalidPathError::TrailingEscape {
                            path: path.to_string(),
                        });
                    }
                },
                other => segment.push(other),
            }
        }
        push_segment(&mut segment)?;

        if inside_backticks {
            return Err(InvalidPathError::UnterminatedBacktick {
                path: path.to_string(),
            });
        }

        Ok(Self { segments })
    }

    /// Splits a user-supplied path on `.` with no escaping.
    ///
    /// # Errors
    ///
    /// Fails on empty input or any empty segment.
    pub fn from_dot_separated(path: &str) -> Result<Self, InvalidPathError> {
        if path.is_empty() {
            return Err(InvalidPathError::Empty);
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(InvalidPathError::EmptySegment {
                path: path.to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// Renders the path in server format.
    ///
    /// [`FieldPath::parse`] inverts this for every path without empty
    /// segments. An empty segment renders as ` `` `, which `parse` rejects.
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            if is_valid_identifier(segment) {
                out.push_str(segment);
            } else {
                out.push('`');
                for c in segment.chars() {
                    if c == '\\' || c == '`' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('`');
            }
        }
        out
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns a new path with `segment` appended.
    pub fn append(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.into());
        Self { segments }
    }

    /// Appends `segment` in place.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Returns the path without its last segment, or `None` for the empty path.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Removes and returns the last segment.
    pub fn pop_last(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Returns true if `self` equals `other` or is an ancestor of it.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Returns true if `self` is exactly one segment shorter than `other` and
    /// a prefix of it.
    pub fn is_immediate_parent_of(&self, other: &FieldPath) -> bool {
        self.len() + 1 == other.len() && self.is_prefix_of(other)
    }
}

/// Returns true for segments matching `[a-zA-Z_][a-zA-Z_0-9]*`.
fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl FromStr for FieldPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Takes segments literally, like [`FieldPath::from_segments`].
impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<const N: usize> From<[&str; N]> for FieldPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}
