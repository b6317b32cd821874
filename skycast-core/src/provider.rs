use crate::{error::FetchError, model::WeatherBundle};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Environment variable holding the upstream API credential.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Where the upstream credential comes from.
///
/// `Env` is resolved on every request, so the server picks up a credential
/// set after startup; `Static` pins a key for tests and explicit config.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    Static(String),
    Env(String),
}

impl ApiKeySource {
    pub fn env_default() -> Self {
        ApiKeySource::Env(API_KEY_ENV.to_string())
    }

    /// Resolve to a usable key; empty values count as absent.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Static(key) => Some(key.clone()),
            ApiKeySource::Env(var) => std::env::var(var).ok(),
        };
        key.filter(|k| !k.is_empty())
    }
}

/// A source of combined current-conditions + forecast payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherBundle, FetchError>;
}
