use portfolio_shell_wasm::domain::routing::{PageRouter, PortfolioPane};
use portfolio_shell_wasm::domain::session::{
    InMemorySessionRepository, Page, PortfolioSnapshot, PortfolioTarget, SessionPatch,
    SessionService, UserSnapshot,
};
use std::rc::Rc;

fn router_with_session() -> (Rc<SessionService>, PageRouter) {
    let session = Rc::new(SessionService::new(Rc::new(InMemorySessionRepository::new()) as Rc<_>));
    let router = PageRouter::new(Rc::clone(&session));
    (session, router)
}

fn ambient_selection() -> SessionPatch {
    SessionPatch::new()
        .user(Some(UserSnapshot { id: 1, display_name: "Ana".to_string(), email: None }))
        .portfolio(Some(PortfolioSnapshot { id: 1, owner_user_id: 1, name: "P1".to_string() }))
}

fn target_for_bruno() -> PortfolioTarget {
    PortfolioTarget {
        owner_user_id: 2,
        portfolio_id: 3,
        owner_display_name: "Bruno".to_string(),
        portfolio_name: "P3".to_string(),
    }
}

#[test]
fn explicit_target_wins_over_ambient_selection() {
    let (session, router) = router_with_session();
    session.patch(ambient_selection());
    router.view_portfolio(target_for_bruno());

    assert_eq!(router.active_page(), Page::PortfolioDetail);
    assert_eq!(
        router.portfolio_pane(),
        PortfolioPane::Portfolio {
            owner_user_id: 2,
            portfolio_id: 3,
            owner_name: "Bruno".to_string(),
            portfolio_name: "P3".to_string(),
        }
    );
}

#[test]
fn ambient_pair_renders_when_no_target_is_set() {
    let (session, router) = router_with_session();
    session.patch(ambient_selection());
    router.navigate_to(Page::PortfolioDetail);

    assert_eq!(
        router.portfolio_pane(),
        PortfolioPane::Portfolio {
            owner_user_id: 1,
            portfolio_id: 1,
            owner_name: "Ana".to_string(),
            portfolio_name: "P1".to_string(),
        }
    );
}

#[test]
fn missing_selection_prompts_instead_of_erroring() {
    let (_session, router) = router_with_session();
    router.navigate_to(Page::PortfolioDetail);

    assert_eq!(router.portfolio_pane(), PortfolioPane::SelectionPrompt);
}

#[test]
fn user_without_portfolio_still_prompts() {
    let (session, router) = router_with_session();
    session.patch(
        SessionPatch::new()
            .user(Some(UserSnapshot { id: 1, display_name: "Ana".to_string(), email: None })),
    );

    assert_eq!(router.portfolio_pane(), PortfolioPane::SelectionPrompt);
}

#[test]
fn leaving_the_portfolio_page_clears_the_target() {
    let (session, router) = router_with_session();
    session.patch(ambient_selection());
    router.view_portfolio(target_for_bruno());

    router.navigate_to(Page::Markets);
    assert!(session.state().portfolio_target.is_none());

    // Re-entering must now follow the ambient selection, not a stale target
    router.navigate_to(Page::PortfolioDetail);
    assert_eq!(
        router.portfolio_pane(),
        PortfolioPane::Portfolio {
            owner_user_id: 1,
            portfolio_id: 1,
            owner_name: "Ana".to_string(),
            portfolio_name: "P1".to_string(),
        }
    );
}

#[test]
fn navigating_within_portfolio_detail_keeps_the_target() {
    let (session, router) = router_with_session();
    router.view_portfolio(target_for_bruno());

    router.navigate_to(Page::PortfolioDetail);
    assert!(session.state().portfolio_target.is_some());
}
