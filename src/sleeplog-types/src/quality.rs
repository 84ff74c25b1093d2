use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subjective sleep quality rating, 1 (worst) to 5 (best).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuality {
    #[error("sleep quality must be between 1 and 5, got {0}")]
    OutOfRange(i64),
    #[error("sleep quality is not a number: `{0}`")]
    NotANumber(String),
}

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidQuality> {
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Quality> {
        (Self::MIN..=Self::MAX).map(Quality)
    }
}

impl TryFrom<u8> for Quality {
    type Error = InvalidQuality;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidQuality::OutOfRange(value.into()))
        }
    }
}

impl TryFrom<i16> for Quality {
    type Error = InvalidQuality;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidQuality::OutOfRange(value.into()))
            .and_then(Self::try_from)
    }
}

impl From<Quality> for u8 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl From<Quality> for i16 {
    fn from(value: Quality) -> Self {
        value.0.into()
    }
}

impl From<Quality> for f64 {
    fn from(value: Quality) -> Self {
        value.0.into()
    }
}

impl FromStr for Quality {
    type Err = InvalidQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s
            .parse::<i64>()
            .map_err(|_| InvalidQuality::NotANumber(s.to_owned()))?;

        u8::try_from(value)
            .map_err(|_| InvalidQuality::OutOfRange(value))
            .and_then(Self::try_from)
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
