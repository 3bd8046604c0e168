//! Errors raised when an object cannot be read as a circle

use thiserror::Error;

/// Why a field could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCircleKind {
    /// A required field (`x` or `y`) is absent
    #[error("is missing")]
    MissingField,
    /// The field is present but does not hold a number
    #[error("is not numeric (found {found})")]
    NonNumeric { found: String },
}

/// An object handed to the kernel is not a usable circle.
///
/// Both a missing required field and a present-but-malformed field end up
/// here. There is no recovery: the whole call is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid circle{suffix}: field `{field}` {kind}",
    suffix = candidate_suffix(.candidate)
)]
pub struct InvalidCircleError {
    /// Name of the offending field
    pub field: &'static str,
    pub kind: InvalidCircleKind,
    /// Position of the offending element in a batch call, if any
    pub candidate: Option<usize>,
}

fn candidate_suffix(candidate: &Option<usize>) -> String {
    candidate
        .map(|i| format!(" (candidate {i})"))
        .unwrap_or_default()
}

impl InvalidCircleError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: InvalidCircleKind::MissingField,
            candidate: None,
        }
    }

    pub fn non_numeric(field: &'static str, found: impl Into<String>) -> Self {
        Self {
            field,
            kind: InvalidCircleKind::NonNumeric {
                found: found.into(),
            },
            candidate: None,
        }
    }

    /// Tag the error with the batch position it came from
    pub fn at_candidate(mut self, index: usize) -> Self {
        self.candidate = Some(index);
        self
    }

    /// True if the field was absent rather than malformed
    pub fn is_missing(&self) -> bool {
        self.kind == InvalidCircleKind::MissingField
    }
}
