//! Typed form models

mod field;
mod gender;
mod snapshot;

pub use field::*;
pub use gender::*;
pub use snapshot::*;

/// Country code every phone number must start with.
///
/// A phone field holding exactly this value counts as "not entered".
pub const PHONE_PREFIX: &str = "+852";

/// Digits required after [`PHONE_PREFIX`].
pub const PHONE_DIGITS: usize = 8;
