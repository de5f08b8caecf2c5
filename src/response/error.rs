//! Errors raised while mapping a LUIS payload onto the typed response tree

use std::fmt;
use thiserror::Error;

/// Whether a JSON field holds one element or a sequence of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Sequence,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Single => f.write_str("a single element"),
            Shape::Sequence => f.write_str("a list"),
        }
    }
}

/// Failure to build a response object from JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{type_name}: required field '{field}' is missing")]
    MissingField {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("{type_name}: field '{field}' expected {expected} but was given {found}")]
    ShapeMismatch {
        field: &'static str,
        type_name: &'static str,
        expected: Shape,
        found: Shape,
    },

    #[error("{type_name}: field '{field}' is not {expected}")]
    InvalidType {
        field: &'static str,
        type_name: &'static str,
        expected: &'static str,
    },
}

impl ParseError {
    /// Name of the offending JSON key
    pub fn field(&self) -> &'static str {
        match self {
            ParseError::MissingField { field, .. }
            | ParseError::ShapeMismatch { field, .. }
            | ParseError::InvalidType { field, .. } => field,
        }
    }

    /// Name of the type that was being built
    pub fn type_name(&self) -> &'static str {
        match self {
            ParseError::MissingField { type_name, .. }
            | ParseError::ShapeMismatch { type_name, .. }
            | ParseError::InvalidType { type_name, .. } => type_name,
        }
    }
}
