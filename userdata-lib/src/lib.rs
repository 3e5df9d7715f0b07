//! User data form library
//!
//! The validation core of a profile and login credentials form: a typed
//! field snapshot, a pure validator producing per-field error messages, and
//! the mutable form state that drives submissions and field edits.

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod validation;

pub use config::FormConfig;
pub use form::{Form, Submission, SubmissionSink};
pub use model::{FieldName, FormSnapshot, Gender};
pub use validation::{FieldErrors, validate, validate_with};
