//! Asset vocabulary and quote display data
//!
//! Quotes are presentation constants supplied by configuration; nothing in
//! here fetches or computes a price.

use serde::{Deserialize, Serialize};

/// An asset the app knows how to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    Btc,
    Eth,
    Sol,
}

impl Asset {
    /// All supported assets, in hub display order
    pub const ALL: [Asset; 3] = [Asset::Btc, Asset::Eth, Asset::Sol];

    /// Ticker symbol shown in lists
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Btc => "BTC",
            Asset::Eth => "ETH",
            Asset::Sol => "SOL",
        }
    }

    /// Full name shown on the detail screen
    pub fn name(&self) -> &'static str {
        match self {
            Asset::Btc => "Bitcoin",
            Asset::Eth => "Ethereum",
            Asset::Sol => "Solana",
        }
    }
}

/// Direction of the last displayed price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }

    #[cfg(feature = "cli")]
    pub fn color(&self) -> ratatui::style::Color {
        match self {
            Trend::Up => ratatui::style::Color::Green,
            Trend::Down => ratatui::style::Color::Red,
        }
    }
}

/// One row of the hub's asset list. The price is a pre-formatted display
/// string, not a number the app ever does arithmetic on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub asset: Asset,
    pub price: String,
    pub trend: Trend,
}

impl Quote {
    pub fn new(asset: Asset, price: impl Into<String>, trend: Trend) -> Self {
        Self {
            asset,
            price: price.into(),
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_labels() {
        assert_eq!(Asset::Btc.symbol(), "BTC");
        assert_eq!(Asset::Btc.name(), "Bitcoin");
        assert_eq!(Asset::Sol.name(), "Solana");
    }

    #[test]
    fn test_trend_arrows() {
        assert_eq!(Trend::Up.arrow(), "▲");
        assert_eq!(Trend::Down.arrow(), "▼");
    }

    #[test]
    fn test_quote_toml_roundtrip() {
        let quote = Quote::new(Asset::Eth, "$2,500", Trend::Down);
        let serialized = toml::to_string(&quote).unwrap();
        let parsed: Quote = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, quote);
        // Symbols serialize in ticker form
        assert!(serialized.contains("ETH"));
    }
}
