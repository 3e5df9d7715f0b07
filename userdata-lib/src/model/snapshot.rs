//! Field snapshot

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::{FieldName, Gender, PHONE_PREFIX};

/// The complete set of form values at a point in time.
///
/// Serializes with camelCase keys. Unset gender and date of birth are written
/// as empty strings, and empty strings read back as unset.
///
/// # Example
///
/// ```
/// use userdata_lib::model::FormSnapshot;
///
/// let snapshot = FormSnapshot {
///     first_name: "Ada".into(),
///     last_name: "Lovelace".into(),
///     email: "ada@example.com".into(),
///     ..Default::default()
/// };
/// assert_eq!(snapshot.phone_number, "+852");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "blank_option")]
    pub gender: Option<Gender>,
    #[serde(with = "blank_option")]
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    /// Holds the country code prefix alone when nothing has been entered.
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            gender: None,
            date_of_birth: None,
            email: String::new(),
            phone_number: PHONE_PREFIX.to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormSnapshot {
    /// A blank snapshot whose phone field holds `phone_prefix`.
    pub fn with_phone_prefix(phone_prefix: impl Into<String>) -> Self {
        Self {
            phone_number: phone_prefix.into(),
            ..Default::default()
        }
    }

    /// Textual value of a field, as an input would display it.
    ///
    /// Unset gender and date of birth read as the empty string.
    pub fn value(&self, field: FieldName) -> Cow<'_, str> {
        match field {
            FieldName::FirstName => Cow::Borrowed(&self.first_name),
            FieldName::LastName => Cow::Borrowed(&self.last_name),
            FieldName::Gender => self
                .gender
                .map_or(Cow::Borrowed(""), |g| Cow::Borrowed(g.key())),
            FieldName::DateOfBirth => self
                .date_of_birth
                .map_or(Cow::Borrowed(""), |d| Cow::Owned(d.to_string())),
            FieldName::Email => Cow::Borrowed(&self.email),
            FieldName::PhoneNumber => Cow::Borrowed(&self.phone_number),
            FieldName::Password => Cow::Borrowed(&self.password),
            FieldName::ConfirmPassword => Cow::Borrowed(&self.confirm_password),
        }
    }

    /// Mutable access to a free-text field, `None` for gender and date of birth.
    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::PhoneNumber => Some(&mut self.phone_number),
            FieldName::Password => Some(&mut self.password),
            FieldName::ConfirmPassword => Some(&mut self.confirm_password),
            FieldName::Gender | FieldName::DateOfBirth => None,
        }
    }

    /// Pretty JSON of the snapshot, including secrets.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for FormSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(secret: &str) -> &'static str {
            if secret.is_empty() { "" } else { "********" }
        }

        f.debug_struct("FormSnapshot")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &mask(&self.password))
            .field("confirm_password", &mask(&self.confirm_password))
            .finish()
    }
}

/// Serde adapter writing `None` as `""` and reading `""` as `None`.
mod blank_option {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phone_is_sentinel() {
        assert_eq!(FormSnapshot::default().phone_number, PHONE_PREFIX);
        assert_eq!(FormSnapshot::with_phone_prefix("+44").phone_number, "+44");
    }

    #[test]
    fn test_debug_masks_passwords() {
        let snapshot = FormSnapshot {
            password: "hunter2".into(),
            confirm_password: "hunter2".into(),
            ..Default::default()
        };
        let debug = format!("{:?}", snapshot);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("********"));
    }

    #[test]
    fn test_value_of_optional_fields() {
        let mut snapshot = FormSnapshot::default();
        assert_eq!(snapshot.value(FieldName::Gender), "");
        assert_eq!(snapshot.value(FieldName::DateOfBirth), "");

        snapshot.gender = Some(Gender::Female);
        snapshot.date_of_birth = NaiveDate::from_ymd_opt(1990, 2, 3);
        assert_eq!(snapshot.value(FieldName::Gender), "F");
        assert_eq!(snapshot.value(FieldName::DateOfBirth), "1990-02-03");
    }
}
