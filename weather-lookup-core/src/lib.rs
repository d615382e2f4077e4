//! Core library for the `weather-lookup` app.
//!
//! This crate defines:
//! - The weather query client (WeatherAPI.com)
//! - The persisted ledger of recent searches and its storage capability
//! - The temperature unit preference and unit-aware display panel
//! - The application shell that ties them together
//! - Configuration & credentials handling
//!
//! It is used by `weather-lookup-cli`, but can also back other front ends.

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod model;
pub mod provider;
pub mod shell;
pub mod storage;
pub mod unit;

pub use config::Config;
pub use display::WeatherPanel;
pub use error::QueryError;
pub use ledger::{MAX_RECENT_SEARCHES, RecentSearches};
pub use model::{Condition, CurrentConditions, Location, WeatherResult};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use shell::{AppShell, Phase, ShellView, Submission};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use unit::{TemperatureUnit, UnitPreference};
