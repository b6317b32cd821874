//! Core library for the Skycast weather dashboard.
//!
//! This crate defines:
//! - City reference data and the autocomplete suggestion ranker
//! - Abstraction over the upstream weather provider
//! - Recent-search history behind an injected key-value store
//! - Shared payload models and the fetch error taxonomy
//! - Client-side configuration handling
//!
//! It is used by `skycast-server` and `skycast-cli`, but can also be reused
//! by other binaries or services.

pub mod cities;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod recent;
pub mod suggest;

pub use config::Config;
pub use error::FetchError;
pub use model::{WeatherBundle, WeatherData};
pub use provider::{ApiKeySource, WeatherProvider};
