use portfolio_shell_wasm::domain::session::{
    InMemorySessionRepository, Page, PortfolioSnapshot, SessionPatch, SessionService, Theme,
    UserSnapshot,
};
use std::cell::RefCell;
use std::rc::Rc;

fn service(repo: &Rc<InMemorySessionRepository>) -> SessionService {
    SessionService::new(Rc::clone(repo) as Rc<_>)
}

#[test]
fn reload_in_fresh_instance_yields_every_patched_field() {
    let repo = Rc::new(InMemorySessionRepository::new());

    let first = service(&repo);
    first.patch(
        SessionPatch::new()
            .page(Page::AssetDetail)
            .ticker("AMXB")
            .theme(Theme::Dark)
            .user(Some(UserSnapshot { id: 2, display_name: "Val".to_string(), email: None }))
            .portfolio(Some(PortfolioSnapshot {
                id: 3,
                owner_user_id: 2,
                name: "Growth".to_string(),
            })),
    );
    let written = first.state();

    let reloaded = service(&repo).state();
    assert_eq!(reloaded, written);
    assert_eq!(reloaded.active_page, Page::AssetDetail);
    assert_eq!(reloaded.selected_ticker.value(), "AMXB");
    assert_eq!(reloaded.theme, Theme::Dark);
}

#[test]
fn corrupt_stored_value_degrades_to_defaults() {
    let repo = Rc::new(InMemorySessionRepository::with_raw("{not json"));

    let state = service(&repo).state();
    assert_eq!(state.active_page, Page::Overview);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.selected_ticker.value(), "WALMEX");
    assert!(state.current_user.is_none());
}

#[test]
fn unknown_persisted_fields_are_ignored() {
    let repo = Rc::new(InMemorySessionRepository::with_raw(
        r#"{"selected_ticker":"FEMSA","added_in_a_future_version":true}"#,
    ));

    let state = service(&repo).state();
    assert_eq!(state.selected_ticker.value(), "FEMSA");
}

#[test]
fn observers_see_the_committed_state() {
    let repo = Rc::new(InMemorySessionRepository::new());
    let session = service(&repo);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(move |state| sink.borrow_mut().push(state.active_page));

    session.patch(SessionPatch::new().page(Page::Markets));
    session.patch(SessionPatch::new().page(Page::Watchlist));

    assert_eq!(*seen.borrow(), vec![Page::Markets, Page::Watchlist]);
}

#[test]
fn empty_patch_is_a_no_op() {
    let repo = Rc::new(InMemorySessionRepository::new());
    let session = service(&repo);

    session.patch(SessionPatch::new());
    assert!(repo.raw().is_none());
}
