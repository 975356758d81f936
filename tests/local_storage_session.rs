#![cfg(target_arch = "wasm32")]

use portfolio_shell_wasm::domain::session::{Page, SessionPatch, SessionRecord, SessionRepository};
use portfolio_shell_wasm::infrastructure::storage::LocalStorageSessionRepository;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn save_load_clear_roundtrip() {
    let repo = LocalStorageSessionRepository::new();
    repo.clear();

    repo.save(&SessionPatch::new().page(Page::Markets).ticker("AMXB"));
    let record = repo.load();
    assert_eq!(record.active_page, Some(Page::Markets));
    assert_eq!(record.selected_ticker.as_deref(), Some("AMXB"));

    repo.clear();
    assert_eq!(repo.load(), SessionRecord::default());
}

#[wasm_bindgen_test]
fn merge_happens_against_the_stored_record() {
    let repo = LocalStorageSessionRepository::new();
    repo.clear();

    repo.save(&SessionPatch::new().page(Page::Watchlist));
    repo.save(&SessionPatch::new().ticker("FEMSA"));

    let record = repo.load();
    assert_eq!(record.active_page, Some(Page::Watchlist));
    assert_eq!(record.selected_ticker.as_deref(), Some("FEMSA"));

    repo.clear();
}
