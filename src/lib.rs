//! Number guessing game core crate.
//!
//! A session hides a number in 1..=100 and gives the player ten attempts, each
//! answered with a too-high / too-low hint and how close it was. The fewest
//! attempts ever needed to win is kept as a best score in a key/value medium
//! (`localStorage` in the browser). Rendering and animation stay in the page
//! script, which drives the game through `web::NumberGame`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod game;
pub mod rules;
pub mod session;
pub mod store;

#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(all(target_arch = "wasm32", feature = "serde_json"))]
pub mod web;

pub use game::{Game, Snapshot};
pub use rules::{
    BEST_SCORE_KEY, Closeness, Direction, GuessError, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS,
    is_valid_guess, parse_guess,
};
pub use session::{GameSession, GameState, GuessOutcome};
pub use store::{BestScore, BestScoreStore, KeyValueStorage, MemoryStorage, StoreError};

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("guess-number {} loaded", env!("CARGO_PKG_VERSION"));
}
