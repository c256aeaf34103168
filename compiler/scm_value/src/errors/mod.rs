//! Error taxonomy for the value model.
//!
//! Every fallible operation returns `SchemeResult<T>`. An error carries a
//! coarse `ErrorKind`, a fixed description, and ordered irritants (labelled
//! values that locate the failure). The rendered form is stable so tools
//! and tests can match on it:
//!
//! ```text
//! out of bounds error (i: 5 length: 5) given a bad string index
//! ```
//!
//! Factory functions below are the public way to build each condition; they
//! keep descriptions and irritant labels uniform across sequence types.

use scm_ir::InternError;
use std::borrow::Cow;
use std::fmt;

/// Result of a fallible value-model operation.
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Coarse error category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unclassified failure.
    Unexpected,
    /// A value of the wrong kind was supplied.
    Type,
    /// A required reference was absent.
    Nil,
    /// A value was outside its valid domain.
    Value,
    /// An index was outside the valid range.
    OutOfBounds,
}

impl ErrorKind {
    /// The rendered name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "unexpected error",
            ErrorKind::Type => "type error",
            ErrorKind::Nil => "nil error",
            ErrorKind::Value => "value error",
            ErrorKind::OutOfBounds => "out of bounds error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled diagnostic value attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Irritant {
    pub label: Cow<'static, str>,
    pub value: String,
}

impl Irritant {
    pub fn new(label: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Irritant {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Irritant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Error returned by value-model operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ({}) {description}", render_irritants(.irritants))]
pub struct SchemeError {
    pub kind: ErrorKind,
    pub description: Cow<'static, str>,
    /// Irritants in the order they were attached.
    pub irritants: Vec<Irritant>,
}

fn render_irritants(irritants: &[Irritant]) -> String {
    irritants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl SchemeError {
    /// Create an error with no irritants.
    #[cold]
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        SchemeError {
            kind,
            description: description.into(),
            irritants: Vec::new(),
        }
    }

    /// Append an irritant.
    #[must_use]
    pub fn with_irritant(
        mut self,
        label: impl Into<Cow<'static, str>>,
        value: impl fmt::Display,
    ) -> Self {
        self.irritants.push(Irritant::new(label, value));
        self
    }

    /// Look up the first irritant with the given label.
    pub fn irritant(&self, label: &str) -> Option<&str> {
        self.irritants
            .iter()
            .find(|irr| irr.label == label)
            .map(|irr| irr.value.as_str())
    }
}

impl From<InternError> for SchemeError {
    fn from(err: InternError) -> Self {
        unexpected("symbol table is full").with_irritant("cause", err)
    }
}

// Factory functions

/// A required reference was absent. `label` names the missing operand.
#[cold]
pub fn nil_reference(label: &'static str) -> SchemeError {
    SchemeError::new(ErrorKind::Nil, "given a nil reference").with_irritant(label, "<nil>")
}

/// A sequence was requested with a negative length.
#[cold]
pub fn invalid_length(length: i64) -> SchemeError {
    SchemeError::new(ErrorKind::Value, "given a length < 0").with_irritant("length", length)
}

/// A sequence length could not be allocated.
#[cold]
pub fn length_too_large(length: i64) -> SchemeError {
    SchemeError::new(ErrorKind::Value, "given a length that cannot be allocated")
        .with_irritant("length", length)
}

/// An index fell outside `[0, length)` of the named sequence kind.
#[cold]
pub fn index_out_of_bounds(sequence: &str, index: i64, length: usize) -> SchemeError {
    SchemeError::new(
        ErrorKind::OutOfBounds,
        format!("given a bad {sequence} index"),
    )
    .with_irritant("i", index)
    .with_irritant("length", length)
}

/// A byte value fell outside `[0, 255]`.
#[cold]
pub fn byte_out_of_range(label: &'static str, value: i64) -> SchemeError {
    SchemeError::new(ErrorKind::Value, "given a number not in [0, 255]").with_irritant(label, value)
}

/// A value of the wrong kind was supplied.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> SchemeError {
    SchemeError::new(ErrorKind::Type, "given a value of the wrong type")
        .with_irritant("expected", expected.to_owned())
        .with_irritant("got", got.to_owned())
}

/// An unclassified failure.
#[cold]
pub fn unexpected(description: impl Into<Cow<'static, str>>) -> SchemeError {
    SchemeError::new(ErrorKind::Unexpected, description)
}
