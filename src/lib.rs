//! CryptoBot - a terminal-based crypto assistant shell
//!
//! Screens render constant, configuration-supplied display data; the
//! assistant screen owns the only real state, an append-only conversation.
//!
//! # Example
//!
//! ```
//! use cryptobot::conversation::{Conversation, Origin};
//!
//! let mut chat = Conversation::new("This is a sample output from the computer.");
//! assert!(chat.submit("What is BTC doing today?").is_some());
//!
//! let messages = chat.messages();
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].origin, Origin::User);
//! assert_eq!(messages[1].origin, Origin::Assistant);
//! ```

// Core modules (always available)
pub mod config;
pub mod conversation;
pub mod market;
pub mod navigation;

// CLI-only modules
#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod ui;

// Re-export the public API
pub use config::Config;
pub use conversation::{Conversation, Message, MessageId, Origin};
pub use market::{Asset, Quote, Trend};
pub use navigation::{Destination, HubEntry, Navigator, Router};
