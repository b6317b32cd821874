use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    error::FetchError,
    model::WeatherBundle,
    provider::{ApiKeySource, WeatherProvider},
};

/// OpenWeather v2.5 REST base.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather "current weather" and "5-day/3-hour forecast"
/// resources. Metric units, fixed `en` locale, single attempt per call.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    key: ApiKeySource,
    http: Client,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(key: ApiKeySource) -> Self {
        Self::with_base_url(key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different upstream base; used by tests to
    /// substitute a stub server.
    pub fn with_base_url(key: ApiKeySource, base_url: impl Into<String>) -> Self {
        Self {
            key,
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json(
        &self,
        resource: &str,
        city: &str,
        api_key: &str,
    ) -> Result<Value, FetchError> {
        let url = format!("{}/{}", self.base_url, resource);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .send()
            .await
            .map_err(classify_transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND => FetchError::CityNotFound,
                StatusCode::UNAUTHORIZED => FetchError::InvalidKey,
                other => FetchError::Upstream(other.as_u16()),
            });
        }

        let body = res.text().await.map_err(classify_transport)?;

        // Existence check only: the payload must be a JSON object, its
        // fields are passed through untouched.
        let object: serde_json::Map<String, Value> =
            serde_json::from_str(&body).map_err(FetchError::MalformedResponse)?;

        Ok(Value::Object(object))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherBundle, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::BlankCity);
        }

        let api_key = self.key.resolve().ok_or(FetchError::MissingApiKey)?;

        let current = self.get_json("weather", city, &api_key).await?;

        // Best-effort: forecast unavailability never fails the request.
        let forecast = match self.get_json("forecast", city, &api_key).await {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("forecast fetch for {city:?} failed: {err}");
                None
            }
        };

        Ok(WeatherBundle { current, forecast })
    }
}

/// Network-level failures are distinguished from upstream HTTP statuses.
fn classify_transport(err: reqwest::Error) -> FetchError {
    if err.is_builder() {
        FetchError::Internal(err.to_string())
    } else {
        FetchError::Unreachable(err)
    }
}
