use crate::domain::portfolio::{TickerMatch, UserWithPortfolios};
use crate::domain::session::SessionState;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    /// Mirror of the committed session, updated by a SessionService observer.
    pub session: RwSignal<SessionState>,
    pub users: RwSignal<Vec<UserWithPortfolios>>,
    pub users_loading: RwSignal<bool>,
    pub users_error: RwSignal<Option<String>>,
    pub search_term: RwSignal<String>,
    pub search_results: RwSignal<Vec<TickerMatch>>,
    pub show_create_user_modal: RwSignal<bool>,
    pub show_create_portfolio_modal: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        session: create_rw_signal(SessionState::default()),
        users: create_rw_signal(Vec::new()),
        users_loading: create_rw_signal(false),
        users_error: create_rw_signal(None),
        search_term: create_rw_signal(String::new()),
        search_results: create_rw_signal(Vec::new()),
        show_create_user_modal: create_rw_signal(false),
        show_create_portfolio_modal: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub session_signal => session: crate::domain::session::SessionState,
    pub users_signal => users: Vec<crate::domain::portfolio::UserWithPortfolios>,
    pub search_results_signal => search_results: Vec<crate::domain::portfolio::TickerMatch>,
}
