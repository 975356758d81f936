//! End-to-end restart flow: remember a selection, restart, reconcile against
//! fresh authoritative data.

use portfolio_shell_wasm::domain::portfolio::{Portfolio, UserWithPortfolios};
use portfolio_shell_wasm::domain::session::{
    InMemorySessionRepository, Page, PortfolioSnapshot, SessionPatch, SessionService, UserSnapshot,
    reconcile_selection,
};
use std::rc::Rc;

fn authoritative_users() -> Vec<UserWithPortfolios> {
    vec![
        UserWithPortfolios {
            id: 1,
            display_name: "Ana".to_string(),
            email: None,
            portfolios: vec![Portfolio {
                id: 1,
                owner_user_id: 1,
                name: "P1".to_string(),
                created_at: None,
            }],
        },
        UserWithPortfolios {
            id: 2,
            display_name: "Bruno".to_string(),
            email: None,
            portfolios: vec![Portfolio {
                id: 3,
                owner_user_id: 2,
                name: "P3 renamed".to_string(),
                created_at: None,
            }],
        },
    ]
}

#[test]
fn restart_restores_and_reconciliation_refreshes_the_snapshot() {
    let repo = Rc::new(InMemorySessionRepository::new());

    // First run: the user browses to a portfolio of Bruno's
    {
        let session = SessionService::new(Rc::clone(&repo) as Rc<_>);
        session.patch(
            SessionPatch::new()
                .page(Page::PortfolioDetail)
                .user(Some(UserSnapshot { id: 2, display_name: "Bruno (old)".to_string(), email: None }))
                .portfolio(Some(PortfolioSnapshot {
                    id: 3,
                    owner_user_id: 2,
                    name: "P3".to_string(),
                })),
        );
    }

    // Process restart: state comes back from the store
    let session = SessionService::new(Rc::clone(&repo) as Rc<_>);
    let restored = session.state();
    assert_eq!(restored.active_page, Page::PortfolioDetail);
    assert_eq!(restored.current_user.as_ref().map(|u| u.id), Some(2));

    // Fresh fetch arrives; the same ids resolve, display text is corrected
    let users = authoritative_users();
    let patch = reconcile_selection(
        &users,
        restored.current_user.as_ref(),
        restored.current_portfolio.as_ref(),
    );
    session.patch(patch);

    let state = session.state();
    assert_eq!(state.current_user.as_ref().map(|u| u.display_name.as_str()), Some("Bruno"));
    assert_eq!(
        state.current_portfolio.as_ref().map(|p| p.name.as_str()),
        Some("P3 renamed")
    );

    // And the refreshed snapshots were persisted for the next run
    let next_run = SessionService::new(Rc::clone(&repo) as Rc<_>).state();
    assert_eq!(next_run.current_user, state.current_user);
    assert_eq!(next_run.current_portfolio, state.current_portfolio);
}

#[test]
fn restart_after_user_deletion_falls_back_cleanly() {
    let repo = Rc::new(InMemorySessionRepository::new());
    {
        let session = SessionService::new(Rc::clone(&repo) as Rc<_>);
        session.patch(
            SessionPatch::new()
                .user(Some(UserSnapshot { id: 99, display_name: "Gone".to_string(), email: None }))
                .portfolio(Some(PortfolioSnapshot {
                    id: 50,
                    owner_user_id: 99,
                    name: "Lost".to_string(),
                })),
        );
    }

    let session = SessionService::new(Rc::clone(&repo) as Rc<_>);
    let state = session.state();
    let patch =
        reconcile_selection(&authoritative_users(), state.current_user.as_ref(), state.current_portfolio.as_ref());
    session.patch(patch);

    let state = session.state();
    assert_eq!(state.current_user.as_ref().map(|u| u.id), Some(1));
    assert_eq!(state.current_portfolio.as_ref().map(|p| p.id), Some(1));
}
