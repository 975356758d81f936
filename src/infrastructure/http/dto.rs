use crate::domain::errors::ServiceError;
use crate::domain::portfolio::{
    Holding, Movement, MovementKind, Portfolio, PortfolioStats, PricePoint, Ticker, TickerMatch,
    UserWithPortfolios,
};
use serde::{Deserialize, Serialize};

/// DTO for a portfolio as the service serializes it
#[derive(Debug, Deserialize)]
pub struct PortfolioDto {
    pub id: i32,
    #[serde(rename = "ownerUserId")]
    pub owner_user_id: i32,
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl PortfolioDto {
    pub fn to_domain(&self) -> Portfolio {
        Portfolio {
            id: self.id,
            owner_user_id: self.owner_user_id,
            name: self.name.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// DTO for one user with its ordered portfolio list
#[derive(Debug, Deserialize)]
pub struct UserWithPortfoliosDto {
    pub id: i32,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub portfolios: Vec<PortfolioDto>,
}

impl UserWithPortfoliosDto {
    pub fn to_domain(&self) -> UserWithPortfolios {
        UserWithPortfolios {
            id: self.id,
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            portfolios: self.portfolios.iter().map(PortfolioDto::to_domain).collect(),
        }
    }
}

/// DTO for one ticker search hit
#[derive(Debug, Deserialize)]
pub struct TickerMatchDto {
    pub ticker: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(default)]
    pub series: Option<String>,
}

impl TickerMatchDto {
    pub fn to_domain(&self) -> Result<TickerMatch, ServiceError> {
        let ticker = Ticker::new(self.ticker.clone())
            .map_err(|e| ServiceError::Decode(format!("search hit has invalid ticker: {e}")))?;
        Ok(TickerMatch { ticker, company_name: self.company_name.clone(), series: self.series.clone() })
    }
}

/// DTO for a price history point
#[derive(Debug, Deserialize)]
pub struct PricePointDto {
    pub timestamp: u64,
    pub price: f64,
}

impl PricePointDto {
    pub fn to_domain(&self) -> PricePoint {
        PricePoint { timestamp: self.timestamp, price: self.price }
    }
}

/// DTO for an aggregated holding row
#[derive(Debug, Deserialize)]
pub struct HoldingDto {
    pub ticker: String,
    pub quantity: f64,
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    #[serde(rename = "marketValue")]
    pub market_value: f64,
}

impl HoldingDto {
    pub fn to_domain(&self) -> Result<Holding, ServiceError> {
        let ticker = Ticker::new(self.ticker.clone())
            .map_err(|e| ServiceError::Decode(format!("holding has invalid ticker: {e}")))?;
        Ok(Holding {
            ticker,
            quantity: self.quantity,
            average_price: self.average_price,
            market_value: self.market_value,
        })
    }
}

/// DTO for the server-computed valuation summary
#[derive(Debug, Deserialize)]
pub struct PortfolioStatsDto {
    #[serde(rename = "totalValue")]
    pub total_value: f64,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "gainAbsolute")]
    pub gain_absolute: f64,
    #[serde(rename = "gainPercent")]
    pub gain_percent: f64,
}

impl PortfolioStatsDto {
    pub fn to_domain(&self) -> PortfolioStats {
        PortfolioStats {
            total_value: self.total_value,
            total_cost: self.total_cost,
            gain_absolute: self.gain_absolute,
            gain_percent: self.gain_percent,
        }
    }
}

/// DTO for one recorded movement
#[derive(Debug, Deserialize)]
pub struct MovementDto {
    pub id: i32,
    #[serde(rename = "portfolioId")]
    pub portfolio_id: i32,
    pub ticker: String,
    pub kind: MovementKind,
    pub quantity: f64,
    pub price: f64,
    #[serde(rename = "recordedAt", default)]
    pub recorded_at: Option<String>,
}

impl MovementDto {
    pub fn to_domain(&self) -> Result<Movement, ServiceError> {
        let ticker = Ticker::new(self.ticker.clone())
            .map_err(|e| ServiceError::Decode(format!("movement has invalid ticker: {e}")))?;
        Ok(Movement {
            id: self.id,
            portfolio_id: self.portfolio_id,
            ticker,
            kind: self.kind,
            quantity: self.quantity,
            price: self.price,
            recorded_at: self.recorded_at.clone(),
        })
    }
}

/// Response carrying only the id of a newly created row
#[derive(Debug, Deserialize)]
pub struct CreatedIdDto {
    pub id: i32,
}

/// Request body for creating a user
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request body for creating a portfolio
#[derive(Debug, Serialize)]
pub struct CreatePortfolioRequest {
    #[serde(rename = "ownerUserId")]
    pub owner_user_id: i32,
    pub name: String,
}

/// Request body for recording a buy/sell/deposit movement
#[derive(Debug, Serialize)]
pub struct RecordMovementRequest {
    pub ticker: String,
    pub kind: MovementKind,
    pub quantity: f64,
    pub price: f64,
}
