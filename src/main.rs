use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cryptobot::{app::App, config::Config, market::Asset, navigation::Destination};

/// CryptoBot - a terminal-based crypto assistant shell
#[derive(Parser, Debug)]
#[command(name = "cryptobot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to open at startup
    #[arg(long, default_value = "home")]
    screen: String,
}

/// Resolve a `--screen` name to its destination
fn parse_screen(name: &str) -> Result<Destination> {
    match name.to_ascii_lowercase().as_str() {
        "home" => Ok(Destination::Home),
        "chat" => Ok(Destination::Chat),
        "btc" => Ok(Destination::Asset(Asset::Btc)),
        "eth" => Ok(Destination::Asset(Asset::Eth)),
        "sol" => Ok(Destination::Asset(Asset::Sol)),
        "settings" => Ok(Destination::Settings),
        "profile" => Ok(Destination::Profile),
        other => anyhow::bail!(
            "Unknown screen: {other} (expected home, chat, btc, eth, sol, settings or profile)"
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file - the terminal belongs to the UI
    let log_file = std::fs::File::create("/tmp/cryptobot.log")?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate().context("Invalid configuration")?;

    let start = parse_screen(&args.screen)?;

    // Run the application
    let mut app = App::new(config, start).await?;
    app.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_screen_accepts_every_destination() {
        assert_eq!(parse_screen("home").unwrap(), Destination::Home);
        assert_eq!(parse_screen("CHAT").unwrap(), Destination::Chat);
        assert_eq!(parse_screen("btc").unwrap(), Destination::Asset(Asset::Btc));
        assert_eq!(parse_screen("eth").unwrap(), Destination::Asset(Asset::Eth));
        assert_eq!(parse_screen("sol").unwrap(), Destination::Asset(Asset::Sol));
        assert_eq!(parse_screen("settings").unwrap(), Destination::Settings);
        assert_eq!(parse_screen("profile").unwrap(), Destination::Profile);
    }

    #[test]
    fn test_parse_screen_rejects_unknown_names() {
        assert!(parse_screen("doge").is_err());
    }
}
