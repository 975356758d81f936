use super::dto::{
    CreateUserRequest, CreatePortfolioRequest, CreatedIdDto, HoldingDto, MovementDto,
    PortfolioStatsDto, PricePointDto, RecordMovementRequest, TickerMatchDto, UserWithPortfoliosDto,
};
use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::portfolio::{
    Holding, Movement, PortfolioStats, PricePoint, Ticker, TickerMatch, UserWithPortfolios,
};
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default mount point of the data/compute service.
pub const DEFAULT_API_BASE: &str = "/api";

/// Async HTTP client for the external data/compute service.
///
/// The service is an opaque collaborator: every figure it returns is used
/// as-is. Failures are returned to the calling UI region and never touch
/// the session.
pub struct PortfolioApiClient {
    base_url: String,
}

impl PortfolioApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users?include=portfolios", self.base_url)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/tickers/search?q={}", self.base_url, query)
    }

    pub fn price_history_url(&self, ticker: &Ticker) -> String {
        format!("{}/tickers/{}/history", self.base_url, ticker.value())
    }

    pub fn holdings_url(&self, portfolio_id: i32) -> String {
        format!("{}/portfolios/{}/holdings", self.base_url, portfolio_id)
    }

    pub fn stats_url(&self, portfolio_id: i32) -> String {
        format!("{}/portfolios/{}/stats", self.base_url, portfolio_id)
    }

    pub fn transactions_url(&self, portfolio_id: i32) -> String {
        format!("{}/portfolios/{}/transactions", self.base_url, portfolio_id)
    }

    pub fn movements_url(&self, portfolio_id: i32) -> String {
        format!("{}/portfolios/{}/movements", self.base_url, portfolio_id)
    }

    /// Authoritative ordered list of users, each with its ordered portfolios.
    pub async fn list_users_with_portfolios(&self) -> ServiceResult<Vec<UserWithPortfolios>> {
        let dtos: Vec<UserWithPortfoliosDto> = self.get_json(self.users_url()).await?;
        get_logger().info(
            LogComponent::Infrastructure("PortfolioAPI"),
            &format!("✅ Loaded {} users from service", dtos.len()),
        );
        Ok(dtos.iter().map(UserWithPortfoliosDto::to_domain).collect())
    }

    /// Ticker search used only to populate selection UI; never persisted.
    pub async fn search_tickers(&self, query: &str) -> ServiceResult<Vec<TickerMatch>> {
        let dtos: Vec<TickerMatchDto> = self.get_json(self.search_url(query)).await?;
        dtos.iter().map(TickerMatchDto::to_domain).collect()
    }

    pub async fn price_history(&self, ticker: &Ticker) -> ServiceResult<Vec<PricePoint>> {
        let dtos: Vec<PricePointDto> = self.get_json(self.price_history_url(ticker)).await?;
        Ok(dtos.iter().map(PricePointDto::to_domain).collect())
    }

    pub async fn holdings(&self, portfolio_id: i32) -> ServiceResult<Vec<Holding>> {
        let dtos: Vec<HoldingDto> = self.get_json(self.holdings_url(portfolio_id)).await?;
        dtos.iter().map(HoldingDto::to_domain).collect()
    }

    pub async fn portfolio_stats(&self, portfolio_id: i32) -> ServiceResult<PortfolioStats> {
        let dto: PortfolioStatsDto = self.get_json(self.stats_url(portfolio_id)).await?;
        Ok(dto.to_domain())
    }

    pub async fn transactions(&self, portfolio_id: i32) -> ServiceResult<Vec<Movement>> {
        let dtos: Vec<MovementDto> = self.get_json(self.transactions_url(portfolio_id)).await?;
        dtos.iter().map(MovementDto::to_domain).collect()
    }

    /// Create a user; the caller re-fetches the user list afterwards.
    pub async fn create_user(&self, display_name: &str, email: Option<String>) -> ServiceResult<i32> {
        let body = CreateUserRequest { display_name: display_name.to_string(), email };
        let created: CreatedIdDto = self.post_json(format!("{}/users", self.base_url), &body).await?;
        Ok(created.id)
    }

    /// Create a portfolio; the caller re-fetches the user list afterwards.
    pub async fn create_portfolio(&self, owner_user_id: i32, name: &str) -> ServiceResult<i32> {
        let body = CreatePortfolioRequest { owner_user_id, name: name.to_string() };
        let created: CreatedIdDto =
            self.post_json(format!("{}/portfolios", self.base_url), &body).await?;
        Ok(created.id)
    }

    /// Record a buy/sell/deposit movement against a portfolio.
    pub async fn record_movement(
        &self,
        portfolio_id: i32,
        request: &RecordMovementRequest,
    ) -> ServiceResult<i32> {
        let created: CreatedIdDto =
            self.post_json(self.movements_url(portfolio_id), request).await?;
        Ok(created.id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> ServiceResult<T> {
        get_logger().debug(
            LogComponent::Infrastructure("PortfolioAPI"),
            &format!("📡 GET {url}"),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }

        response.json().await.map_err(|e| ServiceError::Decode(format!("{e:?}")))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> ServiceResult<T> {
        get_logger().debug(
            LogComponent::Infrastructure("PortfolioAPI"),
            &format!("📡 POST {url}"),
        );

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ServiceError::Decode(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }

        response.json().await.map_err(|e| ServiceError::Decode(format!("{e:?}")))
    }
}

impl Default for PortfolioApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
