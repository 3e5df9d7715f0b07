use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Deserialize;
use serde::Serialize;

use crate::model::FieldName;

/// Validation messages keyed by field.
///
/// A field with no entry is currently valid. Keys are [`FieldName`]s, so the
/// mapping can only ever name fields the form defines. Iteration follows the
/// form's display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every field passed validation.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for `field`, if it is currently invalid.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    /// Set the message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove the entry for `field`. Returns true if there was one.
    pub fn clear(&mut self, field: FieldName) -> bool {
        self.entries.remove(&field).is_some()
    }

    /// Remove every entry.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// The first invalid field in display order (for focusing).
    pub fn first(&self) -> Option<(FieldName, &str)> {
        self.iter().next()
    }

    /// Invalid fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl IntoIterator for FieldErrors {
    type Item = (FieldName, String);
    type IntoIter = btree_map::IntoIter<FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<M: Into<String>> FromIterator<(FieldName, M)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::Email, "first");
        errors.insert(FieldName::Email, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some("second"));
    }

    #[test]
    fn test_clear_reports_removal() {
        let mut errors: FieldErrors = [(FieldName::Password, "x")].into_iter().collect();
        assert!(errors.clear(FieldName::Password));
        assert!(!errors.clear(FieldName::Password));
        assert!(errors.is_valid());
    }

    #[test]
    fn test_iterates_in_display_order() {
        let errors: FieldErrors = [
            (FieldName::ConfirmPassword, "c"),
            (FieldName::FirstName, "a"),
            (FieldName::Email, "b"),
        ]
        .into_iter()
        .collect();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![FieldName::FirstName, FieldName::Email, FieldName::ConfirmPassword]
        );
        assert_eq!(errors.first(), Some((FieldName::FirstName, "a")));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let errors: FieldErrors = [(FieldName::PhoneNumber, "bad")].into_iter().collect();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"phoneNumber":"bad"}"#);
    }
}
