use portfolio_shell_wasm::domain::portfolio::{Portfolio, UserWithPortfolios};
use portfolio_shell_wasm::domain::session::{
    PortfolioSnapshot, UserSnapshot, reconcile_selection,
};

fn portfolio(id: i32, owner: i32, name: &str) -> Portfolio {
    Portfolio { id, owner_user_id: owner, name: name.to_string(), created_at: None }
}

/// User A (id 1) with [P1, P2], user B (id 2) with [P3].
fn authoritative_users() -> Vec<UserWithPortfolios> {
    vec![
        UserWithPortfolios {
            id: 1,
            display_name: "Ana".to_string(),
            email: None,
            portfolios: vec![portfolio(1, 1, "P1"), portfolio(2, 1, "P2")],
        },
        UserWithPortfolios {
            id: 2,
            display_name: "Bruno".to_string(),
            email: Some("bruno@example.com".to_string()),
            portfolios: vec![portfolio(3, 2, "P3")],
        },
    ]
}

fn remembered_user(id: i32) -> UserSnapshot {
    UserSnapshot { id, display_name: "stale name".to_string(), email: None }
}

fn remembered_portfolio(id: i32, owner: i32) -> PortfolioSnapshot {
    PortfolioSnapshot { id, owner_user_id: owner, name: "stale name".to_string() }
}

#[test]
fn matching_ids_restore_the_remembered_pair() {
    let users = authoritative_users();
    let patch = reconcile_selection(
        &users,
        Some(&remembered_user(2)),
        Some(&remembered_portfolio(3, 2)),
    );

    let user = patch.current_user.expect("patched").expect("present");
    let portfolio = patch.current_portfolio.expect("patched").expect("present");
    assert_eq!(user.id, 2);
    assert_eq!(portfolio.id, 3);
}

#[test]
fn vanished_user_falls_back_to_first_user_and_portfolio() {
    let users = authoritative_users();
    let patch = reconcile_selection(&users, Some(&remembered_user(99)), None);

    let user = patch.current_user.expect("patched").expect("present");
    let portfolio = patch.current_portfolio.expect("patched").expect("present");
    assert_eq!(user.id, 1);
    assert_eq!(portfolio.id, 1);
}

#[test]
fn portfolio_owned_by_another_user_is_rejected() {
    let users = authoritative_users();
    // Remembered user 1 but portfolio 3, which belongs to user 2
    let patch = reconcile_selection(
        &users,
        Some(&remembered_user(1)),
        Some(&remembered_portfolio(3, 2)),
    );

    let portfolio = patch.current_portfolio.expect("patched").expect("present");
    assert_eq!(portfolio.id, 1);
}

#[test]
fn owner_id_mismatch_guards_against_id_collisions() {
    // User 1 owns a portfolio with id 3 too; the remembered snapshot however
    // says its owner was user 2, so it must not be resurrected for user 1.
    let mut users = authoritative_users();
    users[0].portfolios.push(portfolio(3, 1, "P3-of-Ana"));

    let patch = reconcile_selection(
        &users,
        Some(&remembered_user(1)),
        Some(&remembered_portfolio(3, 2)),
    );

    let portfolio = patch.current_portfolio.expect("patched").expect("present");
    assert_eq!(portfolio.id, 1);
}

#[test]
fn empty_authoritative_list_clears_the_selection() {
    let patch = reconcile_selection(&[], Some(&remembered_user(1)), Some(&remembered_portfolio(1, 1)));

    assert_eq!(patch.current_user, Some(None));
    assert_eq!(patch.current_portfolio, Some(None));
}

#[test]
fn stale_display_text_is_refreshed_even_when_ids_match() {
    let users = authoritative_users();
    let patch = reconcile_selection(
        &users,
        Some(&remembered_user(2)),
        Some(&remembered_portfolio(3, 2)),
    );

    let user = patch.current_user.expect("patched").expect("present");
    let portfolio = patch.current_portfolio.expect("patched").expect("present");
    assert_eq!(user.display_name, "Bruno");
    assert_eq!(user.email.as_deref(), Some("bruno@example.com"));
    assert_eq!(portfolio.name, "P3");
}

#[test]
fn user_without_portfolios_resolves_to_no_portfolio() {
    let users = vec![UserWithPortfolios {
        id: 7,
        display_name: "Carla".to_string(),
        email: None,
        portfolios: Vec::new(),
    }];

    let patch = reconcile_selection(&users, None, None);
    assert_eq!(patch.current_user.expect("patched").expect("present").id, 7);
    assert_eq!(patch.current_portfolio, Some(None));
}
