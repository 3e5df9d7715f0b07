//! The user data form's validation rules.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::FieldErrors;
use super::validator::Validator;
use crate::config::FormConfig;
use crate::model::{FieldName, FormSnapshot};

pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
pub const EMAIL_OR_PHONE_REQUIRED: &str = "Either Email or Phone Number is required";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const PHONE_FORMAT: &str = "Phone number must be 8 digits after +852";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// `local@domain.tld`, each part free of whitespace and `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Validate a snapshot with the default `+852` phone format.
pub fn validate(snapshot: &FormSnapshot) -> FieldErrors {
    validate_with(snapshot, &FormConfig::default())
}

/// Validate a snapshot against `config`.
///
/// Pure and total: the same snapshot always yields the same mapping, and an
/// empty mapping means the snapshot is acceptable. Email and phone format
/// messages replace the joint "either/or" message for their own field.
pub fn validate_with(snapshot: &FormSnapshot, config: &FormConfig) -> FieldErrors {
    let email_given = !snapshot.email.is_empty();
    let phone_given = !config.is_phone_unset(&snapshot.phone_number);

    Validator::new()
        .field(FieldName::FirstName, &snapshot.first_name)
            .required(FIRST_NAME_REQUIRED)
        .field(FieldName::LastName, &snapshot.last_name)
            .required(LAST_NAME_REQUIRED)
        .require_any(
            &[FieldName::Email, FieldName::PhoneNumber],
            email_given || phone_given,
            EMAIL_OR_PHONE_REQUIRED,
        )
        .field(FieldName::Email, &snapshot.email)
            .pattern(&EMAIL_PATTERN, INVALID_EMAIL)
        .field(FieldName::PhoneNumber, &snapshot.phone_number)
            .rule(
                |v| config.is_phone_unset(v) || config.is_phone_well_formed(v),
                config.phone_format_message(),
            )
        .field(FieldName::Password, &snapshot.password)
            .non_empty(PASSWORD_REQUIRED)
        .field(FieldName::ConfirmPassword, &snapshot.confirm_password)
            .non_empty(CONFIRM_PASSWORD_REQUIRED)
            .equals(&snapshot.password, PASSWORDS_DO_NOT_MATCH)
        .validate()
}
