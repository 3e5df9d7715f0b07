//! Form configuration types.

use crate::error::ConfigError;
use crate::model::{PHONE_DIGITS, PHONE_PREFIX};

/// Per-form configuration.
///
/// The phone prefix is both the required country code and the value an
/// untouched phone field holds ("not entered").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Country code prefix, e.g. `+852`.
    pub phone_prefix: String,

    /// Number of digits required after the prefix.
    pub phone_digits: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            phone_prefix: PHONE_PREFIX.to_string(),
            phone_digits: PHONE_DIGITS,
        }
    }
}

impl FormConfig {
    /// Create a config with the default `+852` / 8 digit phone format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phone country code prefix.
    pub fn phone_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.phone_prefix = prefix.into();
        self
    }

    /// Set the number of digits required after the prefix.
    pub fn phone_digits(mut self, digits: usize) -> Self {
        self.phone_digits = digits;
        self
    }

    /// Check the config for consistency, returning it unchanged if usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let Some(digits) = self.phone_prefix.strip_prefix('+') else {
            if self.phone_prefix.is_empty() {
                return Err(ConfigError::EmptyPhonePrefix);
            }
            return Err(ConfigError::MalformedPhonePrefix(self.phone_prefix));
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::MalformedPhonePrefix(self.phone_prefix));
        }
        if self.phone_digits == 0 {
            return Err(ConfigError::ZeroPhoneDigits);
        }
        Ok(self)
    }

    /// Whether `phone` is the untouched sentinel (or blank).
    pub fn is_phone_unset(&self, phone: &str) -> bool {
        phone.is_empty() || phone == self.phone_prefix
    }

    /// Whether `phone` is the prefix followed by exactly the configured digit count.
    pub fn is_phone_well_formed(&self, phone: &str) -> bool {
        phone
            .strip_prefix(self.phone_prefix.as_str())
            .is_some_and(|rest| {
                rest.len() == self.phone_digits && rest.bytes().all(|b| b.is_ascii_digit())
            })
    }

    /// Message reported when the phone number has the wrong shape.
    pub fn phone_format_message(&self) -> String {
        format!(
            "Phone number must be {} digits after {}",
            self.phone_digits, self.phone_prefix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_hong_kong_format() {
        let config = FormConfig::default();
        assert_eq!(config.phone_prefix, "+852");
        assert_eq!(config.phone_digits, 8);
        assert_eq!(
            config.phone_format_message(),
            "Phone number must be 8 digits after +852"
        );
    }

    #[test]
    fn test_validated_rejects_bad_prefix() {
        assert_eq!(
            FormConfig::new().phone_prefix("").validated(),
            Err(ConfigError::EmptyPhonePrefix)
        );
        assert_eq!(
            FormConfig::new().phone_prefix("852").validated(),
            Err(ConfigError::MalformedPhonePrefix("852".to_string()))
        );
        assert_eq!(
            FormConfig::new().phone_prefix("+").validated(),
            Err(ConfigError::MalformedPhonePrefix("+".to_string()))
        );
        assert_eq!(
            FormConfig::new().phone_digits(0).validated(),
            Err(ConfigError::ZeroPhoneDigits)
        );
    }

    #[test]
    fn test_phone_shape() {
        let config = FormConfig::new().phone_prefix("+44").phone_digits(10);
        assert!(config.is_phone_well_formed("+441234567890"));
        assert!(!config.is_phone_well_formed("+44123456789"));
        assert!(!config.is_phone_well_formed("+85212345678"));
        assert!(config.is_phone_unset("+44"));
        assert!(config.is_phone_unset(""));
    }
}
