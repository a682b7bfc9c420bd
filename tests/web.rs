// Browser tests (wasm-pack test --headless --chrome). Compiled only on wasm32.
#![cfg(target_arch = "wasm32")]

use guess_number::web::NumberGame;
use guess_number::{BEST_SCORE_KEY, BestScore, BestScoreStore, KeyValueStorage, LocalStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "guessNumberTestBestScore";

fn clear(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trips_record() {
    clear(TEST_KEY);
    let mut store = BestScoreStore::open_with_key(LocalStorage, TEST_KEY);
    assert_eq!(store.load(), None);
    assert!(store.record_if_best(6));
    assert_eq!(LocalStorage.get_item(TEST_KEY).unwrap().as_deref(), Some("6"));
    let reopened = BestScoreStore::open_with_key(LocalStorage, TEST_KEY);
    assert_eq!(reopened.load(), Some(6));
    clear(TEST_KEY);
}

#[wasm_bindgen_test]
fn number_game_rejects_bad_input() {
    clear(BEST_SCORE_KEY);
    let mut game = NumberGame::new();
    assert!(!game.can_submit("abc"));
    assert!(game.can_submit("42"));
    let out = game.submit_guess("abc").unwrap().as_string().unwrap();
    assert!(out.contains("\"kind\":\"InvalidInput\""));
    let snap = game.snapshot().unwrap().as_string().unwrap();
    assert!(snap.contains("\"attempts_left\":10"));
    assert_eq!(game.best_score(), None);
}
