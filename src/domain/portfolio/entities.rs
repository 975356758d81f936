pub use super::value_objects::{MovementKind, Ticker};
use serde::{Deserialize, Serialize};

/// Domain entity - portfolio as owned by the external service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i32,
    pub owner_user_id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Domain entity - authoritative user record with its ordered portfolios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithPortfolios {
    pub id: i32,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub portfolios: Vec<Portfolio>,
}

impl UserWithPortfolios {
    pub fn first_portfolio(&self) -> Option<&Portfolio> {
        self.portfolios.first()
    }

    pub fn portfolio_by_id(&self, portfolio_id: i32) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.id == portfolio_id)
    }
}

/// One search hit from the ticker search endpoint; display-only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMatch {
    pub ticker: Ticker,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

/// A point of the price history series, consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: u64,
    pub price: f64,
}

/// Aggregated holding row for one ticker inside a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: Ticker,
    pub quantity: f64,
    pub average_price: f64,
    pub market_value: f64,
}

/// Valuation summary computed server-side for a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_value: f64,
    pub total_cost: f64,
    pub gain_absolute: f64,
    pub gain_percent: f64,
}

/// A recorded buy/sell/deposit movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i32,
    pub portfolio_id: i32,
    pub ticker: Ticker,
    pub kind: MovementKind,
    pub quantity: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<String>,
}
