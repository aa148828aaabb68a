//! Trail error types

use thiserror::Error;

/// Broad category of a [`TrailError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fallback, not raised by any trail operation
    Unknown,
    /// An operation expected an item and got something else
    InvalidArgument,
    /// Pop or peek on a trail with no items
    EmptyCollection,
}

impl ErrorKind {
    /// Numeric code kept stable for callers that log or persist it.
    pub fn code(&self) -> i32 {
        match self {
            ErrorKind::Unknown => -1,
            ErrorKind::InvalidArgument => -2,
            ErrorKind::EmptyCollection => -3,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            -2 => ErrorKind::InvalidArgument,
            -3 => ErrorKind::EmptyCollection,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Unknown => "unknown error",
            ErrorKind::InvalidArgument => "argument 1 must be an object of class BreadcrumbItem",
            ErrorKind::EmptyCollection => "breadcrumb trail is empty",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    #[error("BreadcrumbTrail Error: {}", ErrorKind::Unknown)]
    Unknown,

    #[error("BreadcrumbTrail Error: {}", ErrorKind::InvalidArgument)]
    InvalidItem,

    #[error("BreadcrumbTrail Error: {}", ErrorKind::EmptyCollection)]
    Empty,
}

impl TrailError {
    /// Build the error for a numeric code; unrecognised codes map to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        Self::from(ErrorKind::from_code(code))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TrailError::Unknown => ErrorKind::Unknown,
            TrailError::InvalidItem => ErrorKind::InvalidArgument,
            TrailError::Empty => ErrorKind::EmptyCollection,
        }
    }

    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

impl From<ErrorKind> for TrailError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Unknown => TrailError::Unknown,
            ErrorKind::InvalidArgument => TrailError::InvalidItem,
            ErrorKind::EmptyCollection => TrailError::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TrailError::Empty.to_string(),
            "BreadcrumbTrail Error: breadcrumb trail is empty"
        );
        assert_eq!(
            TrailError::InvalidItem.to_string(),
            "BreadcrumbTrail Error: argument 1 must be an object of class BreadcrumbItem"
        );
        assert_eq!(
            TrailError::Unknown.to_string(),
            "BreadcrumbTrail Error: unknown error"
        );
    }

    #[test]
    fn test_kind_display_is_bare_message() {
        assert_eq!(
            ErrorKind::EmptyCollection.to_string(),
            "breadcrumb trail is empty"
        );
        assert_eq!(
            TrailError::InvalidItem.kind().to_string(),
            ErrorKind::InvalidArgument.message()
        );
    }

    #[test]
    fn test_codes_round_trip() {
        for err in [TrailError::Unknown, TrailError::InvalidItem, TrailError::Empty] {
            assert_eq!(TrailError::from_code(err.code()), err);
        }
    }

    #[test]
    fn test_unrecognised_code_is_unknown() {
        assert_eq!(TrailError::from_code(42), TrailError::Unknown);
        assert_eq!(TrailError::from_code(0).kind(), ErrorKind::Unknown);
    }
}
