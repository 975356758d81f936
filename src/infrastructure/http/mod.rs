pub mod dto;
pub mod portfolio_api_client;

pub use portfolio_api_client::{DEFAULT_API_BASE, PortfolioApiClient};
