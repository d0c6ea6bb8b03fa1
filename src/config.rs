//! Order book configuration

use serde::{Deserialize, Serialize};

/// Order book configuration
///
/// Loaded from `ORDERBOOK_*` environment variables by [`OrderBookConfig::from_env`],
/// e.g. `ORDERBOOK_SYMBOL=ETH/USD ORDERBOOK_ORDER_CAPACITY=100000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookConfig {
    /// Instrument identifier
    pub symbol: String,
    /// Resting orders to pre-allocate per side
    pub order_capacity: usize,
}

impl Default for OrderBookConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC/USD".to_string(),
            order_capacity: 1024,
        }
    }
}

impl OrderBookConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_order_capacity(mut self, order_capacity: usize) -> Self {
        self.order_capacity = order_capacity;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("ORDERBOOK"))
            .build()?;

        cfg.try_deserialize()
    }

    /// Load configuration from file, with environment overrides
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("ORDERBOOK"))
            .build()?;

        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = OrderBookConfig::default();
        assert_eq!(cfg.symbol, "BTC/USD");
        assert_eq!(cfg.order_capacity, 1024);
    }

    #[test]
    fn test_builder() {
        let cfg = OrderBookConfig::new("ETH/USD").with_order_capacity(10);
        assert_eq!(cfg.symbol, "ETH/USD");
        assert_eq!(cfg.order_capacity, 10);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let cfg: OrderBookConfig = serde_json::from_str(r#"{"symbol":"SOL/USD"}"#).unwrap();
        assert_eq!(cfg.symbol, "SOL/USD");
        assert_eq!(cfg.order_capacity, 1024);
    }
}
