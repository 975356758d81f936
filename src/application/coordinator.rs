use crate::domain::errors::ServiceResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::portfolio::{Portfolio, UserWithPortfolios};
use crate::domain::routing::PageRouter;
use crate::domain::session::{
    PortfolioSnapshot, SessionPatch, SessionRepository, SessionService, UserSnapshot,
    reconcile_selection,
};
use crate::infrastructure::http::PortfolioApiClient;
use std::cell::RefCell;
use std::rc::Rc;

/// Wires the session, the router and the service client together and owns
/// the startup/refresh choreography.
pub struct AppCoordinator {
    session: Rc<SessionService>,
    router: Rc<PageRouter>,
    api: Rc<PortfolioApiClient>,
}

impl AppCoordinator {
    /// Restore the session from the repository and attach the router as the
    /// single subscriber of the process-wide navigation bus.
    pub fn new(repository: Rc<dyn SessionRepository>, api: PortfolioApiClient) -> Self {
        get_logger().info(LogComponent::Application("Coordinator"), "Creating app coordinator");

        let session = Rc::new(SessionService::new(repository));
        let router = Rc::new(PageRouter::new(Rc::clone(&session)));
        PageRouter::attach_process_bus(&router);

        Self { session, router, api: Rc::new(api) }
    }

    pub fn session(&self) -> &Rc<SessionService> {
        &self.session
    }

    pub fn router(&self) -> &Rc<PageRouter> {
        &self.router
    }

    pub fn api(&self) -> &Rc<PortfolioApiClient> {
        &self.api
    }

    /// Fetch the authoritative user list and reconcile the remembered
    /// selection against it. Service failures propagate to the caller; the
    /// session keeps its current (still valid) value.
    pub async fn refresh_users(&self) -> ServiceResult<Vec<UserWithPortfolios>> {
        let users = self.api.list_users_with_portfolios().await?;
        let state = self.session.state();
        let patch =
            reconcile_selection(&users, state.current_user.as_ref(), state.current_portfolio.as_ref());
        self.session.patch(patch);
        Ok(users)
    }

    /// User picked in the header bubble: select them plus their first
    /// portfolio, and drop any explicit navigation target.
    pub fn select_user(&self, user: &UserWithPortfolios) {
        self.session.patch(
            SessionPatch::new()
                .user(Some(UserSnapshot::from(user)))
                .portfolio(user.first_portfolio().map(PortfolioSnapshot::from))
                .target(None),
        );
    }

    /// Portfolio picked in the selector; clears the explicit target so the
    /// ambient selection governs again.
    pub fn select_portfolio(&self, portfolio: &Portfolio) {
        self.session.patch(
            SessionPatch::new().portfolio(Some(PortfolioSnapshot::from(portfolio))).target(None),
        );
    }

    pub fn select_ticker(&self, raw: &str) {
        self.session.patch(SessionPatch::new().ticker(raw));
    }

    pub fn toggle_theme(&self) {
        let theme = self.session.state().theme.toggled();
        self.session.patch(SessionPatch::new().theme(theme));
    }

    /// Create a user, then re-fetch and reconcile.
    pub async fn create_user(
        &self,
        display_name: &str,
        email: Option<String>,
    ) -> ServiceResult<Vec<UserWithPortfolios>> {
        self.api.create_user(display_name, email).await?;
        self.refresh_users().await
    }

    /// Create a portfolio, then re-fetch and reconcile.
    pub async fn create_portfolio(
        &self,
        owner_user_id: i32,
        name: &str,
    ) -> ServiceResult<Vec<UserWithPortfolios>> {
        self.api.create_portfolio(owner_user_id, name).await?;
        self.refresh_users().await
    }
}

// Global coordinator instance (thread-local for WASM)
thread_local! {
    static GLOBAL_COORDINATOR: RefCell<Option<Rc<AppCoordinator>>> = RefCell::new(None);
}

/// Install the global coordinator
pub fn initialize_global_coordinator(coordinator: AppCoordinator) {
    GLOBAL_COORDINATOR.with(|global| {
        *global.borrow_mut() = Some(Rc::new(coordinator));
    });
}

/// Run a closure against the global coordinator, if installed
pub fn with_coordinator<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&AppCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow().as_ref().map(|c| f(c)))
}

/// Clone the global coordinator handle for async tasks
pub fn coordinator_handle() -> Option<Rc<AppCoordinator>> {
    GLOBAL_COORDINATOR.with(|global| global.borrow().clone())
}
