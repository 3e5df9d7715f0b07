//! Form state: the current snapshot and its validation errors.
//!
//! Submitting validates the whole snapshot and either hands it to a
//! [`SubmissionSink`] or keeps the errors for display. Editing a field clears
//! that field's error straight away, without re-validating; the next submit
//! recomputes everything.

mod clock;
mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use sink::{JsonDisplay, SubmissionSink};

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::FormConfig;
use crate::error::{EditError, SinkError};
use crate::model::{FieldName, FormSnapshot, Gender};
use crate::validation::{FieldErrors, validate_with};

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every rule passed; the snapshot was handed to the sink.
    Accepted(FormSnapshot),
    /// One or more fields failed; nothing was handed on.
    Rejected(FieldErrors),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The errors of a rejected submission (empty when accepted).
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// A user data form instance.
///
/// # Example
///
/// ```
/// use userdata_lib::form::Form;
/// use userdata_lib::model::{FieldName, FormSnapshot};
///
/// let mut form = Form::default();
/// let mut accepted: Vec<FormSnapshot> = Vec::new();
///
/// let outcome = form.submit(&mut |s: &FormSnapshot| accepted.push(s.clone())).unwrap();
/// assert!(!outcome.is_accepted());
/// assert!(form.error(FieldName::FirstName).is_some());
///
/// form.change(FieldName::FirstName, "Ada").unwrap();
/// assert!(form.error(FieldName::FirstName).is_none());
/// ```
#[derive(Debug)]
pub struct Form {
    config: FormConfig,
    snapshot: FormSnapshot,
    errors: FieldErrors,
    clock: Arc<dyn Clock>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl Form {
    /// Create an empty form. The phone field starts at the configured prefix.
    pub fn new(config: FormConfig) -> Self {
        Self {
            snapshot: FormSnapshot::with_phone_prefix(config.phone_prefix.clone()),
            config,
            errors: FieldErrors::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to bound the date of birth.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Start from an existing snapshot, with no errors shown.
    pub fn with_snapshot(mut self, snapshot: FormSnapshot) -> Self {
        self.snapshot = snapshot;
        self.errors.clear_all();
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Errors published by the last rejected submit, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Latest selectable date of birth: the day before today.
    pub fn max_date_of_birth(&self) -> NaiveDate {
        let today = self.clock.today();
        today.pred_opt().unwrap_or(today)
    }

    /// Validate the current snapshot without publishing the result.
    pub fn validate(&self) -> FieldErrors {
        validate_with(&self.snapshot, &self.config)
    }

    /// Apply textual input to a field.
    ///
    /// Gender accepts `M`/`F` or their labels; date of birth accepts
    /// `YYYY-MM-DD`. Blank text unsets either of them.
    pub fn change(&mut self, field: FieldName, text: &str) -> Result<(), EditError> {
        match field {
            FieldName::Gender => {
                self.set_gender(Gender::parse_optional(text)?);
                Ok(())
            }
            FieldName::DateOfBirth => {
                let text = text.trim();
                let date = if text.is_empty() {
                    None
                } else {
                    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .map_err(|_| EditError::invalid_date(text))?;
                    Some(date)
                };
                self.set_date_of_birth(date)
            }
            _ => {
                if let Some(slot) = self.snapshot.text_mut(field) {
                    *slot = text.to_string();
                }
                self.edited(field);
                Ok(())
            }
        }
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.snapshot.gender = gender;
        self.edited(FieldName::Gender);
    }

    /// Set the date of birth. Dates after [`max_date_of_birth`](Self::max_date_of_birth) are refused.
    pub fn set_date_of_birth(&mut self, date: Option<NaiveDate>) -> Result<(), EditError> {
        if let Some(date) = date {
            let max = self.max_date_of_birth();
            if date > max {
                return Err(EditError::DateNotInPast { date, max });
            }
        }
        self.snapshot.date_of_birth = date;
        self.edited(FieldName::DateOfBirth);
        Ok(())
    }

    /// Validate and, if clean, hand the snapshot to `sink`.
    ///
    /// A rejected submission publishes the full error mapping, replacing
    /// whatever was shown before. An accepted one clears it. Sink failures
    /// are returned after the errors have been cleared.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<Submission, SinkError>
    where
        S: SubmissionSink + ?Sized,
    {
        let errors = self.validate();
        if errors.is_empty() {
            log::info!("Form submission accepted");
            self.errors.clear_all();
            sink.accept(&self.snapshot)?;
            Ok(Submission::Accepted(self.snapshot.clone()))
        } else {
            log::debug!(
                "Form submission rejected with {} error(s): {:?}",
                errors.len(),
                errors.fields().collect::<Vec<_>>()
            );
            self.errors = errors.clone();
            Ok(Submission::Rejected(errors))
        }
    }

    /// Back to a blank form with no errors.
    pub fn reset(&mut self) {
        self.snapshot = FormSnapshot::with_phone_prefix(self.config.phone_prefix.clone());
        self.errors.clear_all();
        log::debug!("Form reset");
    }

    fn edited(&mut self, field: FieldName) {
        if field.is_secret() {
            log::trace!("Field {} changed", field);
        } else {
            log::trace!("Field {} changed to {:?}", field, self.snapshot.value(field));
        }
        if self.errors.clear(field) {
            log::debug!("Cleared error on {}", field);
        }
    }
}
