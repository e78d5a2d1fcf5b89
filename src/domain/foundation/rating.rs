//! Rating value object for questionnaire answers (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A questionnaire rating: 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ))
        }
    }

    /// Parses free-form user text into a rating.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a base-10
    /// integer is an invalid format.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("rating", "not a whole number"))?;
        Self::try_from_i64(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Rating validator: true iff `text` is a base-10 integer in `1..=5`.
///
/// Never panics, whatever the input.
pub fn validate_rating(text: &str) -> bool {
    Rating::parse(text).is_ok()
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from_i64(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
