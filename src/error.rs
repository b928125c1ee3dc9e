//! Structured validation errors
//!
//! Validation never stops at the first problem: every violated bound is
//! reported as a [`ValidationError`] carrying the path of the offending
//! value and what was wrong with it.

use std::fmt;

use thiserror::Error;

/// One step in a path through slide data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside slide data, e.g. `members[2].name`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The path of the slide data object itself
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this path with an object key
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// Extend this path with a list index
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// What was wrong with a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value has the wrong JSON type
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// A field with no default was left out
    MissingField,

    /// Text shorter than the declared minimum (in characters)
    StringTooShort { length: usize, min: usize },

    /// Text longer than the declared maximum (in characters)
    StringTooLong { length: usize, max: usize },

    /// List with fewer items than the declared minimum
    TooFewItems { count: usize, min: usize },

    /// List with more items than the declared maximum
    TooManyItems { count: usize, max: usize },
}

impl ValidationErrorKind {
    /// Format a human-readable message for this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("expected {}, got {}", expected, got)
            }
            ValidationErrorKind::MissingField => "required field is missing".to_string(),
            ValidationErrorKind::StringTooShort { length, min } => {
                format!("text is too short ({} characters, minimum {})", length, min)
            }
            ValidationErrorKind::StringTooLong { length, max } => {
                format!("text is too long ({} characters, maximum {})", length, max)
            }
            ValidationErrorKind::TooFewItems { count, min } => {
                format!("too few items ({}, minimum {})", count, min)
            }
            ValidationErrorKind::TooManyItems { count, max } => {
                format!("too many items ({}, maximum {})", count, max)
            }
        }
    }
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {}", .kind.message())]
pub struct ValidationError {
    pub path: FieldPath,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: FieldPath, kind: ValidationErrorKind) -> Self {
        Self { path, kind }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(path: FieldPath, expected: &'static str, got: &'static str) -> Self {
        Self::new(path, ValidationErrorKind::TypeMismatch { expected, got })
    }

    /// Create a missing field error
    pub fn missing(path: FieldPath) -> Self {
        Self::new(path, ValidationErrorKind::MissingField)
    }

    /// Whether this error concerns the number of items in a list
    pub fn is_cardinality(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::TooFewItems { .. } | ValidationErrorKind::TooManyItems { .. }
        )
    }
}

/// Join several validation errors into one line
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = FieldPath::root().key("members").index(2).key("name");
        assert_eq!(path.to_string(), "members[2].name");
        assert_eq!(FieldPath::root().to_string(), "(root)");
    }

    #[test]
    fn test_nested_key_display() {
        let path = FieldPath::root().key("leftColumn").key("items");
        assert_eq!(path.to_string(), "leftColumn.items");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(
            FieldPath::root().key("leftColumn").key("items"),
            ValidationErrorKind::TooFewItems { count: 2, min: 3 },
        );
        insta::assert_snapshot!(err.to_string(), @"leftColumn.items: too few items (2, minimum 3)");
        assert!(err.is_cardinality());
    }

    #[test]
    fn test_format_multiple() {
        let errors = vec![
            ValidationError::missing(FieldPath::root().key("a")),
            ValidationError::type_mismatch(FieldPath::root().key("b"), "string", "number"),
        ];
        assert_eq!(
            format_validation_errors(&errors),
            "a: required field is missing; b: expected string, got number"
        );
    }
}
