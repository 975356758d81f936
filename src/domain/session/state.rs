use crate::domain::logging::LogComponent;
use crate::domain::portfolio::{Portfolio, Ticker, UserWithPortfolios};
use crate::log_debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Ticker shown when nothing was ever selected or a selection was cleared.
pub const DEFAULT_TICKER: &str = "WALMEX";

/// The five top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Page {
    #[strum(serialize = "overview")]
    #[serde(rename = "overview")]
    Overview,

    #[strum(serialize = "portfolio_detail")]
    #[serde(rename = "portfolio_detail")]
    PortfolioDetail,

    #[strum(serialize = "markets")]
    #[serde(rename = "markets")]
    Markets,

    #[strum(serialize = "watchlist")]
    #[serde(rename = "watchlist")]
    Watchlist,

    #[strum(serialize = "asset_detail")]
    #[serde(rename = "asset_detail")]
    AssetDetail,
}

impl Default for Page {
    fn default() -> Self {
        Page::Overview
    }
}

/// Visual theme; persisted together with the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Theme {
    #[strum(serialize = "light")]
    #[serde(rename = "light")]
    Light,

    #[strum(serialize = "dark")]
    #[serde(rename = "dark")]
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the document body.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Cached snapshot of a user; the authoritative record lives in the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: i32,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&UserWithPortfolios> for UserSnapshot {
    fn from(user: &UserWithPortfolios) -> Self {
        Self { id: user.id, display_name: user.display_name.clone(), email: user.email.clone() }
    }
}

/// Cached snapshot of a portfolio; same caveat as [`UserSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub id: i32,
    pub owner_user_id: i32,
    pub name: String,
}

impl From<&Portfolio> for PortfolioSnapshot {
    fn from(portfolio: &Portfolio) -> Self {
        Self { id: portfolio.id, owner_user_id: portfolio.owner_user_id, name: portfolio.name.clone() }
    }
}

/// An explicit "go look at this portfolio" request. Wins over the ambient
/// selection until cleared by navigating to any non-portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTarget {
    pub owner_user_id: i32,
    pub portfolio_id: i32,
    pub owner_display_name: String,
    pub portfolio_name: String,
}

/// The partial persisted record. Any field may be absent on disk; absence is
/// "use default", never an error. Unknown fields are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_page: Option<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<UserSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_portfolio: Option<PortfolioSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_target: Option<PortfolioTarget>,
}

impl SessionRecord {
    /// Shallow field-by-field merge of a patch over this record.
    pub fn apply(&mut self, patch: &SessionPatch) {
        if let Some(page) = patch.active_page {
            self.active_page = Some(page);
        }
        if let Some(ticker) = &patch.selected_ticker {
            self.selected_ticker = Some(ticker.value().to_string());
        }
        if let Some(theme) = patch.theme {
            self.theme = Some(theme);
        }
        if let Some(user) = &patch.current_user {
            self.current_user = user.clone();
        }
        if let Some(portfolio) = &patch.current_portfolio {
            self.current_portfolio = portfolio.clone();
        }
        if let Some(target) = &patch.portfolio_target {
            self.portfolio_target = target.clone();
        }
    }

    /// True iff the record carries something worth offering a "reset
    /// preferences" affordance for.
    pub fn has_any_preferences(&self) -> bool {
        self.selected_ticker.is_some() || self.portfolio_target.is_some() || self.current_user.is_some()
    }
}

/// Whole-field patch applied through [`SessionService::patch`]. The snapshot
/// fields are three-state: absent leaves the field alone, `Some(None)`
/// clears it, `Some(Some(v))` replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub active_page: Option<Page>,
    pub selected_ticker: Option<Ticker>,
    pub theme: Option<Theme>,
    pub current_user: Option<Option<UserSnapshot>>,
    pub current_portfolio: Option<Option<PortfolioSnapshot>>,
    pub portfolio_target: Option<Option<PortfolioTarget>>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: Page) -> Self {
        self.active_page = Some(page);
        self
    }

    /// An empty or blank ticker resets to [`DEFAULT_TICKER`], never to "".
    pub fn ticker(mut self, raw: &str) -> Self {
        let ticker = Ticker::new(raw.to_string()).unwrap_or_else(|_| Ticker::from(DEFAULT_TICKER));
        self.selected_ticker = Some(ticker);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn user(mut self, user: Option<UserSnapshot>) -> Self {
        self.current_user = Some(user);
        self
    }

    pub fn portfolio(mut self, portfolio: Option<PortfolioSnapshot>) -> Self {
        self.current_portfolio = Some(portfolio);
        self
    }

    pub fn target(mut self, target: Option<PortfolioTarget>) -> Self {
        self.portfolio_target = Some(target);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active_page.is_none()
            && self.selected_ticker.is_none()
            && self.theme.is_none()
            && self.current_user.is_none()
            && self.current_portfolio.is_none()
            && self.portfolio_target.is_none()
    }
}

/// The resolved in-memory session: every preference has a value, snapshots
/// stay optional. Mutated exclusively through [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub active_page: Page,
    pub selected_ticker: Ticker,
    pub theme: Theme,
    pub current_user: Option<UserSnapshot>,
    pub current_portfolio: Option<PortfolioSnapshot>,
    pub portfolio_target: Option<PortfolioTarget>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_record(SessionRecord::default())
    }
}

impl SessionState {
    /// Resolve a partial record against the documented defaults.
    pub fn from_record(record: SessionRecord) -> Self {
        let selected_ticker = record
            .selected_ticker
            .and_then(|raw| Ticker::new(raw).ok())
            .unwrap_or_else(|| Ticker::from(DEFAULT_TICKER));

        let mut state = Self {
            active_page: record.active_page.unwrap_or_default(),
            selected_ticker,
            theme: record.theme.unwrap_or_default(),
            current_user: record.current_user,
            current_portfolio: record.current_portfolio,
            portfolio_target: record.portfolio_target,
        };
        state.enforce_owner_invariant();
        state
    }

    /// Shallow-merge a patch into the resolved state.
    pub fn apply(&mut self, patch: &SessionPatch) {
        if let Some(page) = patch.active_page {
            self.active_page = page;
        }
        if let Some(ticker) = &patch.selected_ticker {
            self.selected_ticker = ticker.clone();
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(user) = &patch.current_user {
            self.current_user = user.clone();
        }
        if let Some(portfolio) = &patch.current_portfolio {
            self.current_portfolio = portfolio.clone();
        }
        if let Some(target) = &patch.portfolio_target {
            self.portfolio_target = target.clone();
        }
        self.enforce_owner_invariant();
    }

    /// A portfolio selection is never retained across a different owning
    /// user; it must be re-derived by reconciliation.
    fn enforce_owner_invariant(&mut self) {
        let mismatch = match (&self.current_user, &self.current_portfolio) {
            (Some(user), Some(portfolio)) => portfolio.owner_user_id != user.id,
            _ => false,
        };
        if mismatch {
            log_debug!(
                LogComponent::Session("State"),
                "dropping portfolio selection owned by another user"
            );
            self.current_portfolio = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ticker_in_record_falls_back_to_default() {
        let record = SessionRecord { selected_ticker: Some("   ".to_string()), ..Default::default() };
        let state = SessionState::from_record(record);
        assert_eq!(state.selected_ticker.value(), DEFAULT_TICKER);
    }

    #[test]
    fn blank_ticker_patch_resets_to_default() {
        let patch = SessionPatch::new().ticker("");
        assert_eq!(patch.selected_ticker.as_ref().map(|t| t.value()), Some(DEFAULT_TICKER));
    }

    #[test]
    fn foreign_owned_portfolio_is_dropped_on_apply() {
        let mut state = SessionState::default();
        state.apply(
            &SessionPatch::new()
                .user(Some(UserSnapshot { id: 1, display_name: "A".into(), email: None }))
                .portfolio(Some(PortfolioSnapshot { id: 3, owner_user_id: 2, name: "P3".into() })),
        );
        assert!(state.current_portfolio.is_none());
    }
}
