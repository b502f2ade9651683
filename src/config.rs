//! Configuration loading and validation
//!
//! Every value the screens display - hub quotes, profile figures, the
//! assistant's canned reply - comes from here. Defaults reproduce the
//! shipped placeholder data, and a `config.toml` under the user config
//! directory overrides them, so a real data source can replace the table
//! without touching any rendering code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::market::{Asset, Quote, Trend};

/// Validation failures for a loaded configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate quote for {0}")]
    DuplicateQuote(&'static str),
    #[error("assistant reply must not be blank")]
    BlankReply,
}

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub market: MarketConfig,
    pub assistant: AssistantConfig,
    pub profile: ProfileConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            market: MarketConfig::default(),
            assistant: AssistantConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Config::default())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the config directory path (~/.config/cryptobot)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("cryptobot"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Reject configurations the screens cannot render sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<Asset> = Vec::new();
        for quote in &self.market.quotes {
            if seen.contains(&quote.asset) {
                return Err(ConfigError::DuplicateQuote(quote.asset.symbol()));
            }
            seen.push(quote.asset);
        }
        if self.assistant.reply.trim().is_empty() {
            return Err(ConfigError::BlankReply);
        }
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show HH:MM:SS timestamps on chat message headers
    pub show_timestamps: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_timestamps: true,
        }
    }
}

/// Quotes shown on the hub screen, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub quotes: Vec<Quote>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            quotes: vec![
                Quote::new(Asset::Btc, "$40,000", Trend::Up),
                Quote::new(Asset::Eth, "$2,500", Trend::Down),
                Quote::new(Asset::Sol, "$150", Trend::Up),
            ],
        }
    }
}

/// Assistant screen text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Canned reply appended after every user message
    pub reply: String,
    /// Placeholder shown in the empty chat input
    pub input_placeholder: String,
    /// Prompt line shown at the bottom of the hub
    pub hub_prompt: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply: "This is a sample output from the computer.".to_string(),
            input_placeholder: "Message CryptoBot".to_string(),
            hub_prompt: "How can CryptoBot help you?".to_string(),
        }
    }
}

/// One row of the profile screen's trade history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub asset: Asset,
    /// Pre-formatted percentage, e.g. "+2.5%"
    pub change: String,
    pub trend: Trend,
}

/// User profile display data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub portfolio_value: String,
    pub total_trades: u32,
    pub success_rate: String,
    pub recent_trades: Vec<TradeRecord>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Umair".to_string(),
            email: "umairslav@giki.com".to_string(),
            portfolio_value: "$15,230.75".to_string(),
            total_trades: 128,
            success_rate: "78%".to_string(),
            recent_trades: vec![
                TradeRecord {
                    asset: Asset::Btc,
                    change: "+2.5%".to_string(),
                    trend: Trend::Up,
                },
                TradeRecord {
                    asset: Asset::Eth,
                    change: "-1.3%".to_string(),
                    trend: Trend::Down,
                },
                TradeRecord {
                    asset: Asset::Sol,
                    change: "+0.8%".to_string(),
                    trend: Trend::Up,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_reproduce_placeholder_data() {
        let config = Config::default();

        assert_eq!(config.market.quotes.len(), 3);
        assert_eq!(config.market.quotes[0].asset, Asset::Btc);
        assert_eq!(config.market.quotes[0].price, "$40,000");
        assert_eq!(config.market.quotes[1].trend, Trend::Down);

        assert_eq!(
            config.assistant.reply,
            "This is a sample output from the computer."
        );
        assert_eq!(config.profile.name, "Umair");
        assert_eq!(config.profile.portfolio_value, "$15,230.75");
        assert_eq!(config.profile.total_trades, 128);
        assert_eq!(config.profile.recent_trades.len(), 3);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[assistant]
reply = "Beep boop."

[[market.quotes]]
asset = "BTC"
price = "$100,000"
trend = "up"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.assistant.reply, "Beep boop.");
        assert_eq!(config.market.quotes.len(), 1);
        assert_eq!(config.market.quotes[0].price, "$100,000");
        // Untouched sections keep their defaults
        assert_eq!(config.profile.email, "umairslav@giki.com");
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = Config::load_from(Path::new("/nonexistent/cryptobot.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_quotes() {
        let mut config = Config::default();
        config
            .market
            .quotes
            .push(Quote::new(Asset::Btc, "$41,000", Trend::Up));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateQuote("BTC")));
    }

    #[test]
    fn test_validate_rejects_blank_reply() {
        let mut config = Config::default();
        config.assistant.reply = "   ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::BlankReply));
    }
}
