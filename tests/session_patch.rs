use portfolio_shell_wasm::domain::session::{
    InMemorySessionRepository, Page, PortfolioSnapshot, PortfolioTarget, SessionPatch,
    SessionRecord, SessionRepository, Theme, UserSnapshot,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

fn user_snapshot(id: i32) -> UserSnapshot {
    UserSnapshot { id, display_name: format!("user-{id}"), email: None }
}

fn portfolio_snapshot(id: i32, owner: i32) -> PortfolioSnapshot {
    PortfolioSnapshot { id, owner_user_id: owner, name: format!("portfolio-{id}") }
}

#[test]
fn later_patch_fields_win() {
    let repo = InMemorySessionRepository::new();
    repo.save(&SessionPatch::new().page(Page::Markets).ticker("AMXB"));
    repo.save(&SessionPatch::new().ticker("FEMSA"));

    let record = repo.load();
    assert_eq!(record.active_page, Some(Page::Markets));
    assert_eq!(record.selected_ticker.as_deref(), Some("FEMSA"));
}

#[test]
fn repeated_identical_patch_is_idempotent() {
    let repo = InMemorySessionRepository::new();
    let patch = SessionPatch::new().page(Page::Watchlist).theme(Theme::Dark).ticker("WALMEX");

    repo.save(&patch);
    let first = repo.load();
    repo.save(&patch);
    let second = repo.load();

    assert_eq!(first, second);
}

#[test]
fn untouched_fields_survive_a_partial_patch() {
    let repo = InMemorySessionRepository::new();
    repo.save(&SessionPatch::new().user(Some(user_snapshot(1))).theme(Theme::Dark));
    repo.save(&SessionPatch::new().page(Page::AssetDetail));

    let record = repo.load();
    assert_eq!(record.theme, Some(Theme::Dark));
    assert_eq!(record.current_user, Some(user_snapshot(1)));
    assert_eq!(record.active_page, Some(Page::AssetDetail));
}

#[test]
fn clearing_a_snapshot_field_persists_as_absent() {
    let repo = InMemorySessionRepository::new();
    repo.save(
        &SessionPatch::new().target(Some(PortfolioTarget {
            owner_user_id: 1,
            portfolio_id: 2,
            owner_display_name: "A".to_string(),
            portfolio_name: "P".to_string(),
        })),
    );
    repo.save(&SessionPatch::new().target(None));

    assert_eq!(repo.load().portfolio_target, None);
}

#[derive(Clone, Debug)]
struct ArbPatch(SessionPatch);

impl Arbitrary for ArbPatch {
    fn arbitrary(g: &mut Gen) -> Self {
        const PAGES: [Page; 5] =
            [Page::Overview, Page::PortfolioDetail, Page::Markets, Page::Watchlist, Page::AssetDetail];
        const TICKERS: [&str; 4] = ["WALMEX", "AMXB", "FEMSA", ""];

        let mut patch = SessionPatch::new();
        if bool::arbitrary(g) {
            patch = patch.page(*g.choose(&PAGES).expect("non-empty"));
        }
        if bool::arbitrary(g) {
            patch = patch.ticker(g.choose(&TICKERS).expect("non-empty"));
        }
        if bool::arbitrary(g) {
            patch = patch.theme(if bool::arbitrary(g) { Theme::Light } else { Theme::Dark });
        }
        if bool::arbitrary(g) {
            let user =
                if bool::arbitrary(g) { Some(user_snapshot(i32::arbitrary(g).rem_euclid(4))) } else { None };
            patch = patch.user(user);
        }
        if bool::arbitrary(g) {
            let portfolio = if bool::arbitrary(g) {
                Some(portfolio_snapshot(
                    i32::arbitrary(g).rem_euclid(6),
                    i32::arbitrary(g).rem_euclid(4),
                ))
            } else {
                None
            };
            patch = patch.portfolio(portfolio);
        }
        if bool::arbitrary(g) {
            let target = if bool::arbitrary(g) {
                Some(PortfolioTarget {
                    owner_user_id: i32::arbitrary(g).rem_euclid(4),
                    portfolio_id: i32::arbitrary(g).rem_euclid(6),
                    owner_display_name: "owner".to_string(),
                    portfolio_name: "portfolio".to_string(),
                })
            } else {
                None
            };
            patch = patch.target(target);
        }
        ArbPatch(patch)
    }
}

#[quickcheck]
fn sequential_saves_equal_sequential_merge(p1: ArbPatch, p2: ArbPatch) -> bool {
    let repo = InMemorySessionRepository::new();
    repo.save(&p1.0);
    repo.save(&p2.0);

    let mut expected = SessionRecord::default();
    expected.apply(&p1.0);
    expected.apply(&p2.0);

    repo.load() == expected
}
