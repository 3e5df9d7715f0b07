//! Errors raised while editing or parsing field values

use chrono::NaiveDate;

/// A field key that does not name any form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{0}'")]
pub struct ParseFieldError(pub String);

/// A gender value outside the fixed option set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender '{0}', expected M or F")]
pub struct ParseGenderError(pub String);

/// Error returned when an edit cannot be applied to the form.
///
/// A rejected edit leaves both the snapshot and the error mapping untouched.
/// Field validation failures are never reported through this type; they live
/// in [`FieldErrors`](crate::validation::FieldErrors).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The gender text is not one of the options.
    #[error(transparent)]
    Gender(#[from] ParseGenderError),

    /// The date text is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// The date of birth is not strictly before today.
    #[error("Date of birth {date} must be on or before {max}")]
    DateNotInPast { date: NaiveDate, max: NaiveDate },
}

impl EditError {
    /// Creates a new invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}

/// Error returned by a [`SubmissionSink`](crate::form::SubmissionSink) that
/// could not take an accepted snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
