//! Error types for path parsing, validation and root construction.

use thiserror::Error;

use crate::model::TypeOrder;

/// Error raised when a field path string is malformed.
///
/// This is the only data-dependent error the mutation engine surfaces; all
/// traversal irregularities (missing parents, type conflicts) are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPathError {
    #[error("invalid field path: path must not be empty")]
    Empty,

    #[error(
        "invalid field path ({path:?}): paths must not be empty, begin with '.', end with '.', or contain '..'"
    )]
    EmptySegment { path: String },

    #[error("invalid field path ({path:?}): unterminated ` in path")]
    UnterminatedBacktick { path: String },

    #[error("invalid field path ({path:?}): trailing escape character is not allowed")]
    TrailingEscape { path: String },
}

/// Error during semantic validation of a value tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("timestamp nanos {nanos} outside range [0, 999999999]")]
    NanosOutOfRange { nanos: i32 },

    #[error("timestamp seconds {seconds} outside range [0001-01-01, 9999-12-31]")]
    SecondsOutOfRange { seconds: i64 },

    #[error("geo point latitude {latitude} out of range [-90, +90]")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("geo point longitude {longitude} out of range [-180, +180]")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("value nesting depth exceeds maximum {max}")]
    NestingTooDeep { max: usize },

    #[error("reference has an empty document path")]
    EmptyReferencePath,

    #[error("reference path segment {index} is empty")]
    EmptyReferenceSegment { index: usize },

    #[error("server timestamp placeholder has no valid local write time")]
    MalformedServerTimestamp,
}

/// Error returned when a non-map value is offered as a document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("document root must be a map value, found {found:?}")]
pub struct InvalidRootError {
    pub found: TypeOrder,
}
