//! Form validation.
//!
//! [`validate`] is a pure function from a [`FormSnapshot`] to the
//! [`FieldErrors`] it produces. It is built on a small fluent [`Validator`]
//! that runs every rule and lets a later failing rule replace an earlier
//! message for the same field.
//!
//! # Example
//!
//! ```
//! use userdata_lib::model::{FieldName, FormSnapshot};
//! use userdata_lib::validation::validate;
//!
//! let errors = validate(&FormSnapshot::default());
//! assert_eq!(errors.get(FieldName::FirstName), Some("First Name is required"));
//! ```
//!
//! [`FormSnapshot`]: crate::model::FormSnapshot

mod errors;
mod rules;
mod validator;

pub use errors::FieldErrors;
pub use rules::*;
pub use validator::{FieldBuilder, Validator};
