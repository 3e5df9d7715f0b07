//! Gender option set

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseGenderError;

/// Gender options offered by the form. "Not selected" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// All options, in display order.
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    /// Option key (`M` / `F`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Parse optional gender text; blank text means "not selected".
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseGenderError> {
        let s = s.trim();
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    /// Accepts the key or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.key().eq_ignore_ascii_case(s) || g.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseGenderError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("f".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert!("X".parse::<Gender>().is_err());
    }

    #[test]
    fn test_parse_optional_blank() {
        assert_eq!(Gender::parse_optional("  "), Ok(None));
        assert_eq!(Gender::parse_optional("male"), Ok(Some(Gender::Male)));
    }
}
