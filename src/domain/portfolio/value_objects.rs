use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

/// Value Object - market ticker symbol
///
/// Never empty; construction from arbitrary input uppercases and validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(ticker: String) -> Result<Self, String> {
        if ticker.trim().is_empty() {
            return Err("Ticker cannot be empty".to_string());
        }
        Ok(Self(ticker.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Movement kinds accepted by the transaction-recording endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr, Serialize, Deserialize)]
pub enum MovementKind {
    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,

    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,

    #[strum(serialize = "deposit")]
    #[serde(rename = "deposit")]
    Deposit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_uppercases_and_trims() {
        let ticker = Ticker::from(" walmex ");
        assert_eq!(ticker.value(), "WALMEX");
    }

    #[test]
    fn empty_ticker_rejected() {
        assert!(Ticker::new("   ".to_string()).is_err());
    }
}
