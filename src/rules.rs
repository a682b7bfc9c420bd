//! Game rules: guess bounds, the attempt budget and the hint buckets.
//!
//! Everything here is pure; the session module layers state on top.

use std::num::IntErrorKind;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest number the secret (and a guess) can be.
pub const MIN_GUESS: u32 = 1;
/// Highest number the secret (and a guess) can be.
pub const MAX_GUESS: u32 = 100;
/// Attempts granted per session.
pub const MAX_ATTEMPTS: u32 = 10;
/// Storage key holding the best score.
pub const BEST_SCORE_KEY: &str = "numberGuessingGameBestScore";

// Hint bucket edges on |guess - secret|.
const VERY_CLOSE_MAX: u32 = 5;
const WARM_MAX: u32 = 10;

/// Why a raw guess was rejected. Rejections never consume an attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuessError {
    #[error("no number entered")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside 1..=100")]
    OutOfRange(String),
}

/// Parse user input into a guess in `MIN_GUESS..=MAX_GUESS`.
pub fn parse_guess(raw: &str) -> Result<u32, GuessError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }
    let value: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        // Digits that simply don't fit are a range problem, not a format one.
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            GuessError::OutOfRange(trimmed.to_string())
        }
        _ => GuessError::NotANumber(trimmed.to_string()),
    })?;
    if value < MIN_GUESS as i64 || value > MAX_GUESS as i64 {
        return Err(GuessError::OutOfRange(value.to_string()));
    }
    Ok(value as u32)
}

/// Live check used to enable the guess control while the player types.
pub fn is_valid_guess(raw: &str) -> bool {
    parse_guess(raw).is_ok()
}

/// Which side of the secret a wrong guess landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    TooHigh,
    TooLow,
}

impl Direction {
    pub fn of(guess: u32, secret: u32) -> Self {
        if guess > secret {
            Direction::TooHigh
        } else {
            Direction::TooLow
        }
    }
}

/// How far off a wrong guess was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Closeness {
    /// Within 5.
    VeryClose,
    /// 6 to 10 away.
    Warm,
    Cold,
}

impl Closeness {
    pub fn classify(difference: u32) -> Self {
        if difference <= VERY_CLOSE_MAX {
            Closeness::VeryClose
        } else if difference <= WARM_MAX {
            Closeness::Warm
        } else {
            Closeness::Cold
        }
    }

    pub fn between(guess: u32, secret: u32) -> Self {
        Self::classify(guess.abs_diff(secret))
    }
}
