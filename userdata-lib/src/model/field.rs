//! Field identifiers

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseFieldError;

/// Identifier of a single form field.
///
/// Variants are declared in display order, so ordered collections keyed by
/// `FieldName` iterate the way the form renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::DateOfBirth,
        Self::Email,
        Self::PhoneNumber,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// The camelCase key used in error mappings and JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Gender => "gender",
            Self::DateOfBirth => "dateOfBirth",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of Birth",
            Self::Email => "Email Address",
            Self::PhoneNumber => "Phone Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field holds a secret that must not be echoed or logged.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
