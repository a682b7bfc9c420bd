//! A single guessing session: the secret, the attempt budget and the
//! Playing -> Won / Lost state machine.
//!
//! Sessions are plain owned values. Starting over means building a new one with
//! [`GameSession::start`]; nothing here touches the page or storage directly.

use log::debug;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rules::{
    Closeness, Direction, GuessError, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, parse_guess,
};
use crate::store::BestScore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Result of one `submit_guess` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum GuessOutcome {
    /// Input rejected; no attempt consumed.
    InvalidInput { reason: GuessError },
    /// Session already finished; nothing changed.
    NotPlaying,
    Hint {
        direction: Direction,
        closeness: Closeness,
        attempts_left: u32,
    },
    Win {
        secret: u32,
        score: u32,
        is_new_record: bool,
    },
    Loss { secret: u32 },
}

impl GuessOutcome {
    /// Whether the call used up an attempt.
    pub fn consumed_attempt(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Hint { .. } | GuessOutcome::Win { .. } | GuessOutcome::Loss { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    secret: u32,
    attempts_left: u32,
    state: GameState,
}

impl GameSession {
    /// New session with a secret drawn uniformly from `MIN_GUESS..=MAX_GUESS`.
    pub fn start<R: Rng>(rng: &mut R) -> Self {
        let secret = rng.gen_range(MIN_GUESS..=MAX_GUESS);
        debug!("Session started, secret is {secret}");
        Self::fresh(secret)
    }

    /// New session around a known secret.
    pub fn with_secret(secret: u32) -> Result<Self, GuessError> {
        if !(MIN_GUESS..=MAX_GUESS).contains(&secret) {
            return Err(GuessError::OutOfRange(secret.to_string()));
        }
        Ok(Self::fresh(secret))
    }

    fn fresh(secret: u32) -> Self {
        Self {
            secret,
            attempts_left: MAX_ATTEMPTS,
            state: GameState::Playing,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Attempts used so far.
    pub fn score(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts_left
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Whether the guess control should be enabled for `raw`.
    pub fn can_submit(&self, raw: &str) -> bool {
        self.state == GameState::Playing && parse_guess(raw).is_ok()
    }

    /// Apply one guess. `records` is consulted only when the guess wins.
    pub fn submit_guess(&mut self, raw: &str, records: &mut dyn BestScore) -> GuessOutcome {
        if self.state != GameState::Playing {
            return GuessOutcome::NotPlaying;
        }
        let guess = match parse_guess(raw) {
            Ok(guess) => guess,
            Err(reason) => return GuessOutcome::InvalidInput { reason },
        };

        self.attempts_left -= 1;

        if guess == self.secret {
            self.state = GameState::Won;
            let score = self.score();
            GuessOutcome::Win {
                secret: self.secret,
                score,
                is_new_record: records.record_if_best(score),
            }
        } else if self.attempts_left == 0 {
            self.state = GameState::Lost;
            GuessOutcome::Loss {
                secret: self.secret,
            }
        } else {
            GuessOutcome::Hint {
                direction: Direction::of(guess, self.secret),
                closeness: Closeness::between(guess, self.secret),
                attempts_left: self.attempts_left,
            }
        }
    }
}
