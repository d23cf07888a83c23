//! # csstat - Steam profile resolution and Counter-Strike stat reports
//!
//! Turns whatever a user pastes into chat (a 17-digit Steam ID or a
//! profile URL) into a canonical [`SteamId`], and turns the raw stat
//! counters the Steam Web API returns into display-ready metrics.
//!
//! ## Pipeline
//!
//! ```text
//! &str --resolve--> SteamId --SteamClient--> (DisplayProfile, CounterSet) --derive--> PlayerReport
//! ```
//!
//! [`resolve`] and [`derive`] are pure and synchronous; only
//! [`SteamClient`] touches the network.
//!
//! ## Example
//!
//! ```rust
//! use csstat::*;
//! use csstat::report::labels;
//!
//! let id = resolve("https://steamcommunity.com/profiles/76561197960287930/").unwrap();
//! assert_eq!(id.as_str(), "76561197960287930");
//!
//! let counters: CounterSet = [
//!     ("total_shots_hit", 450.0),
//!     ("total_shots_fired", 1000.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = derive(&counters, DisplayProfile::new("gaben", "")).with_steam_id(id);
//! assert_eq!(report.metric(GroupKind::Combat, labels::ACCURACY), Some("45.0%"));
//! ```
//!
//! ## Modules
//!
//! - [`steam_id`] - Steam ID type and profile reference resolution
//! - [`counters`] - Raw counter bag and upstream counter names
//! - [`report`] - Derived metric groups
//! - [`format`] - Number, duration and ratio formatting
//! - [`profile`] - Player display profile
//! - [`config`] - Client configuration
//! - [`client`] - Steam Web API transport
//! - [`service`] - Resolve, fetch and derive in one call
//! - [`error`] - Error types

pub mod client;
pub mod config;
pub mod counters;
pub mod error;
pub mod format;
pub mod profile;
pub mod report;
pub mod service;
pub mod steam_id;

pub use client::SteamClient;
pub use config::ClientConfig;
pub use counters::{lookup, CounterSet};
pub use error::{ClientError, ConfigError, Error, ResolveError};
pub use profile::DisplayProfile;
pub use report::{derive, GroupKind, Metric, MetricGroup, PlayerReport};
pub use service::StatsService;
pub use steam_id::{resolve, SteamId};
