//! Validation failure records.

use serde::Serialize;
use thiserror::Error;

/// One offending field and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `biomarkers.crp`; `body` for the payload itself.
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in payload order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .errors.len(), join(.errors))]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

/// Accumulates field errors while a payload is walked.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Wrap the collected errors; only call once at least one was pushed.
    pub(crate) fn into_failure(self) -> ValidationFailure {
        debug_assert!(!self.errors.is_empty());
        ValidationFailure {
            errors: self.errors,
        }
    }

    /// Build the value only when no error was collected.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, ValidationFailure> {
        if self.errors.is_empty() {
            Ok(build())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }
}
