use super::state::{PortfolioSnapshot, SessionPatch, UserSnapshot};
use crate::domain::logging::LogComponent;
use crate::domain::portfolio::UserWithPortfolios;
use crate::{log_debug, log_info};

/// Resolve the remembered user/portfolio selection against the freshly
/// fetched authoritative list.
///
/// A remembered id that no longer exists silently falls back (first user,
/// first portfolio of the resolved user); it is not an error. The returned
/// patch always rewrites both snapshots so stale cached display text is
/// corrected even when the ids still match.
pub fn reconcile_selection(
    users: &[UserWithPortfolios],
    remembered_user: Option<&UserSnapshot>,
    remembered_portfolio: Option<&PortfolioSnapshot>,
) -> SessionPatch {
    if users.is_empty() {
        log_info!(LogComponent::Session("Reconcile"), "no users in service; clearing selection");
        return SessionPatch::new().user(None).portfolio(None);
    }

    let resolved_user = match remembered_user.and_then(|snap| users.iter().find(|u| u.id == snap.id)) {
        Some(user) => user,
        None => {
            if let Some(snap) = remembered_user {
                log_debug!(
                    LogComponent::Session("Reconcile"),
                    "remembered user {} gone; falling back to first user",
                    snap.id
                );
            }
            &users[0]
        }
    };

    // Ownership guard: a remembered portfolio id only counts when the
    // remembered owner matches the resolved user AND the resolved user
    // actually owns a portfolio with that id.
    let resolved_portfolio = remembered_portfolio
        .filter(|snap| snap.owner_user_id == resolved_user.id)
        .and_then(|snap| resolved_user.portfolio_by_id(snap.id))
        .or_else(|| {
            if remembered_portfolio.is_some() {
                log_debug!(
                    LogComponent::Session("Reconcile"),
                    "remembered portfolio not usable for user {}; falling back to first",
                    resolved_user.id
                );
            }
            resolved_user.first_portfolio()
        });

    SessionPatch::new()
        .user(Some(UserSnapshot::from(resolved_user)))
        .portfolio(resolved_portfolio.map(PortfolioSnapshot::from))
}
