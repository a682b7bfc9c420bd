//! Owner of the current session, the RNG and the best score store.
//!
//! The page (or a test) holds one [`Game`] and forwards every user action to it.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::session::{GameSession, GameState, GuessOutcome};
use crate::store::BestScore;

/// What the page needs to render after any call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub attempts_left: u32,
    pub score: u32,
    pub state: GameState,
    /// `None` renders as "no record yet".
    pub best_score: Option<u32>,
}

pub struct Game<S, R> {
    records: S,
    rng: R,
    session: GameSession,
}

impl<S: BestScore, R: Rng> Game<S, R> {
    /// Builds the controller and starts the first session.
    pub fn new(records: S, mut rng: R) -> Self {
        let session = GameSession::start(&mut rng);
        Self {
            records,
            rng,
            session,
        }
    }

    /// Throw away the current session (finished or not) and deal a new secret.
    pub fn start(&mut self) -> Snapshot {
        self.session = GameSession::start(&mut self.rng);
        self.snapshot()
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        self.session.submit_guess(raw, &mut self.records)
    }

    pub fn can_submit(&self, raw: &str) -> bool {
        self.session.can_submit(raw)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn records(&self) -> &S {
        &self.records
    }

    pub fn best_score(&self) -> Option<u32> {
        self.records.load()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            attempts_left: self.session.attempts_left(),
            score: self.session.score(),
            state: self.session.state(),
            best_score: self.best_score(),
        }
    }
}
