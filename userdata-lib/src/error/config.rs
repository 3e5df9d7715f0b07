//! Configuration errors

/// Errors produced when a [`FormConfig`](crate::FormConfig) is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The phone prefix doubles as the "not entered" sentinel and cannot be empty.
    #[error("Phone prefix must not be empty")]
    EmptyPhonePrefix,

    /// The prefix must be a `+` followed by digits.
    #[error("Phone prefix '{0}' must be '+' followed by digits")]
    MalformedPhonePrefix(String),

    #[error("Phone digit count must be greater than zero")]
    ZeroPhoneDigits,
}
