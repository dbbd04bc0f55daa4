//! Small validated value types shared by the promo crates.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// Input is trimmed of surrounding whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, or `TextError::Empty` if nothing is left after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors returned when constructing a [`Percentage`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PercentageError {
    #[error("percentage {0} is outside 0..=100")]
    OutOfRange(u32),
}

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percentage(u8);

impl Percentage {
    pub const MAX: Percentage = Percentage(100);

    pub fn new(value: u32) -> Result<Self, PercentageError> {
        if value > 100 {
            return Err(PercentageError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Builds a percentage, saturating anything above 100.
    pub fn saturating(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, handy for progress bars.
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl TryFrom<u32> for Percentage {
    type Error = PercentageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u32 {
    fn from(value: Percentage) -> Self {
        u32::from(value.0)
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
