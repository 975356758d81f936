use wasm_bindgen::prelude::*;

use crate::application::{AppCoordinator, initialize_global_coordinator, with_coordinator};
use crate::domain::navigation::{NavigationIntent, publish_intent};
use crate::domain::portfolio::Ticker;
use crate::infrastructure::http::PortfolioApiClient;
use crate::infrastructure::storage::LocalStorageSessionRepository;
use std::rc::Rc;

/// WASM API for interacting with JavaScript
/// Minimal logic - only a bridge to the application layer

/// Build the coordinator over localStorage and mount the Leptos app.
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app() {
    let repository = Rc::new(LocalStorageSessionRepository::new());
    let coordinator = AppCoordinator::new(repository, PortfolioApiClient::default());
    initialize_global_coordinator(coordinator);

    leptos::mount_to_body(crate::app::App);
}

/// Clear every saved preference and reinitialize the session to defaults.
#[wasm_bindgen(js_name = resetAllPreferences)]
pub fn reset_all_preferences() {
    with_coordinator(|c| c.session().reset_all_preferences());
}

/// Whether the persisted record holds at least one remembered choice.
#[wasm_bindgen(js_name = hasAnySavedPreferences)]
pub fn has_any_saved_preferences() -> bool {
    with_coordinator(|c| c.session().has_any_saved_preferences()).unwrap_or(false)
}

/// Publish an open-asset intent from the host page; a silent no-op when the
/// app is not mounted yet.
#[wasm_bindgen(js_name = openAsset)]
pub fn open_asset(ticker: String) {
    publish_intent(NavigationIntent::OpenAsset { ticker: Ticker::from(ticker.as_str()) });
}
