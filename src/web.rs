//! Browser entry points. The page script owns the DOM (messages, confetti,
//! shake / pulse classes) and talks to the game only through [`NumberGame`].
//!
//! Outcomes and snapshots cross the boundary as JSON strings, e.g.
//! `{"kind":"Hint","direction":"TooHigh","closeness":"Warm","attempts_left":7}`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::rules;
use crate::store::{BestScoreStore, LocalStorage};

fn to_json<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|s| JsValue::from_str(&s))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct NumberGame {
    game: Game<BestScoreStore<LocalStorage>, StdRng>,
}

#[wasm_bindgen]
impl NumberGame {
    /// Loads the best score from `localStorage` and starts the first session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> NumberGame {
        NumberGame {
            game: Game::new(BestScoreStore::open(LocalStorage), StdRng::from_entropy()),
        }
    }

    /// Restart button. Returns the fresh snapshot.
    pub fn start(&mut self) -> Result<JsValue, JsValue> {
        to_json(&self.game.start())
    }

    #[wasm_bindgen(js_name = submitGuess)]
    pub fn submit_guess(&mut self, raw: &str) -> Result<JsValue, JsValue> {
        to_json(&self.game.submit_guess(raw))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_json(&self.game.snapshot())
    }

    /// Drives the guess button's disabled state on every input event.
    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self, raw: &str) -> bool {
        self.game.can_submit(raw)
    }

    #[wasm_bindgen(js_name = bestScore)]
    pub fn best_score(&self) -> Option<u32> {
        self.game.best_score()
    }
}

impl Default for NumberGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Input check that does not need a game instance (e.g. for `is-invalid` styling).
#[wasm_bindgen(js_name = isValidGuess)]
pub fn is_valid_guess(raw: &str) -> bool {
    rules::is_valid_guess(raw)
}

#[wasm_bindgen(js_name = maxAttempts)]
pub fn max_attempts() -> u32 {
    rules::MAX_ATTEMPTS
}
