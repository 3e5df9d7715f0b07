//! Validator builder for fluent validation API.

use regex::Regex;

use super::errors::FieldErrors;
use crate::model::FieldName;

/// Builder for validating multiple form fields.
///
/// Every rule runs; none short-circuit. When several rules fail for the same
/// field, the message of the last failing rule wins.
///
/// # Example
///
/// ```
/// use userdata_lib::model::FieldName;
/// use userdata_lib::validation::Validator;
///
/// let errors = Validator::new()
///     .field(FieldName::FirstName, "  ")
///         .required("First Name is required")
///     .field(FieldName::Password, "secret")
///         .non_empty("Password is required")
///     .validate();
///
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to validate.
    pub fn field<'v>(self, name: FieldName, value: &'v str) -> FieldBuilder<'v> {
        FieldBuilder {
            validator: self,
            name,
            value,
        }
    }

    /// Cross-field rule: when `satisfied` is false, every field in `fields`
    /// receives `msg`.
    pub fn require_any(mut self, fields: &[FieldName], satisfied: bool, msg: &str) -> Self {
        if !satisfied {
            for field in fields {
                self.errors.insert(*field, msg);
            }
        }
        self
    }

    /// Finish and return the collected errors.
    pub fn validate(self) -> FieldErrors {
        self.errors
    }
}

/// Builder for adding validation rules to a single field.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    validator: Validator,
    name: FieldName,
    value: &'a str,
}

impl FieldBuilder<'_> {
    /// Add a custom rule. `f` returns true when the value is acceptable.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        if !f(self.value) {
            self.validator.errors.insert(self.name, msg);
        }
        self
    }

    /// Require the field to be non-empty after trimming whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require the field to be non-empty, whitespace counting as content.
    pub fn non_empty(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require the value to match `re`. Empty is valid; use `required()` for non-empty.
    pub fn pattern(self, re: &Regex, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_empty() || re.is_match(v), msg)
    }

    /// Require the value to equal `other`. Empty is valid; use `non_empty()` for non-empty.
    pub fn equals(self, other: &str, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_empty() || v == other, msg)
    }

    /// Continue to the next field.
    pub fn field<'v>(self, name: FieldName, value: &'v str) -> FieldBuilder<'v> {
        self.validator.field(name, value)
    }

    /// Continue with a cross-field rule.
    pub fn require_any(self, fields: &[FieldName], satisfied: bool, msg: &str) -> Validator {
        self.validator.require_any(fields, satisfied, msg)
    }

    /// Finish and return the collected errors.
    pub fn validate(self) -> FieldErrors {
        self.validator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_rule_overwrites() {
        let errors = Validator::new()
            .field(FieldName::Email, "nope")
            .rule(|_| false, "first")
            .rule(|_| true, "skipped")
            .rule(|_| false, "last")
            .validate();
        assert_eq!(errors.get(FieldName::Email), Some("last"));
    }

    #[test]
    fn test_require_any_marks_all_fields() {
        let errors = Validator::new()
            .require_any(&[FieldName::Email, FieldName::PhoneNumber], false, "one of")
            .validate();
        assert_eq!(errors.get(FieldName::Email), Some("one of"));
        assert_eq!(errors.get(FieldName::PhoneNumber), Some("one of"));
    }

    #[test]
    fn test_pattern_skips_empty() {
        let re = Regex::new("^a+$").unwrap();
        let errors = Validator::new()
            .field(FieldName::Email, "")
            .pattern(&re, "bad")
            .field(FieldName::FirstName, "b")
            .pattern(&re, "bad")
            .validate();
        assert!(!errors.contains(FieldName::Email));
        assert!(errors.contains(FieldName::FirstName));
    }
}
