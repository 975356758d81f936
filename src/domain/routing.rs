use crate::domain::logging::LogComponent;
use crate::domain::navigation::{self, NavigationBus, NavigationIntent};
use crate::domain::session::{Page, PortfolioTarget, SessionPatch, SessionService, SessionState};
use crate::log_info;
use std::rc::Rc;

/// What the portfolio-detail page should render once precedence is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioPane {
    Portfolio {
        owner_user_id: i32,
        portfolio_id: i32,
        owner_name: String,
        portfolio_name: String,
    },
    /// No portfolio to show; render a selection prompt, not an error.
    SelectionPrompt,
}

/// Single owner of "which page is shown" and of the arbitration between an
/// explicit navigation target, the ambient selection and the defaults.
pub struct PageRouter {
    session: Rc<SessionService>,
}

impl PageRouter {
    pub fn new(session: Rc<SessionService>) -> Self {
        Self { session }
    }

    pub fn active_page(&self) -> Page {
        self.session.state().active_page
    }

    /// Make this router the bus's (only) subscriber.
    pub fn attach(router: &Rc<Self>, bus: &NavigationBus) {
        let router = Rc::clone(router);
        bus.subscribe(move |intent| router.handle_intent(intent));
    }

    /// Make this router the process-wide bus's (only) subscriber.
    pub fn attach_process_bus(router: &Rc<Self>) {
        let router = Rc::clone(router);
        navigation::subscribe_navigation(move |intent| router.handle_intent(intent));
    }

    /// Direct user navigation (clicking a nav item). Leaving the portfolio
    /// area clears any explicit navigation target.
    pub fn navigate_to(&self, page: Page) {
        let mut patch = SessionPatch::new().page(page);
        if page != Page::PortfolioDetail {
            patch = patch.target(None);
        }
        self.session.patch(patch);
    }

    /// A "view this portfolio" action from anywhere in the UI.
    pub fn view_portfolio(&self, target: PortfolioTarget) {
        log_info!(
            LogComponent::Navigation("Router"),
            "🎯 Viewing portfolio '{}' of {}",
            target.portfolio_name,
            target.owner_display_name
        );
        self.session.patch(SessionPatch::new().target(Some(target)).page(Page::PortfolioDetail));
    }

    /// Translate a bus-delivered intent into selection patches plus the
    /// corresponding page transition.
    pub fn handle_intent(&self, intent: &NavigationIntent) {
        log_info!(LogComponent::Navigation("Router"), "handling intent {}", intent.kind());
        match intent {
            NavigationIntent::OpenAsset { ticker } => {
                self.session.patch(
                    SessionPatch::new().ticker(ticker.value()).page(Page::AssetDetail).target(None),
                );
            }
            NavigationIntent::OpenPortfolio {
                owner_user_id,
                portfolio_id,
                owner_display_name,
                portfolio_name,
            } => {
                self.view_portfolio(PortfolioTarget {
                    owner_user_id: *owner_user_id,
                    portfolio_id: *portfolio_id,
                    owner_display_name: owner_display_name.clone(),
                    portfolio_name: portfolio_name.clone(),
                });
            }
            NavigationIntent::OpenPage { page } => self.navigate_to(*page),
        }
    }

    /// Render-selection precedence for `Page::PortfolioDetail`:
    /// 1. explicit navigation target, 2. ambient user+portfolio pair,
    /// 3. selection prompt.
    pub fn portfolio_pane(&self) -> PortfolioPane {
        Self::resolve_portfolio_pane(&self.session.state())
    }

    pub fn resolve_portfolio_pane(state: &SessionState) -> PortfolioPane {
        if let Some(target) = &state.portfolio_target {
            return PortfolioPane::Portfolio {
                owner_user_id: target.owner_user_id,
                portfolio_id: target.portfolio_id,
                owner_name: target.owner_display_name.clone(),
                portfolio_name: target.portfolio_name.clone(),
            };
        }
        if let (Some(user), Some(portfolio)) = (&state.current_user, &state.current_portfolio) {
            return PortfolioPane::Portfolio {
                owner_user_id: user.id,
                portfolio_id: portfolio.id,
                owner_name: user.display_name.clone(),
                portfolio_name: portfolio.name.clone(),
            };
        }
        PortfolioPane::SelectionPrompt
    }
}
