//! Shared payload models.
//!
//! The proxy treats upstream payloads as opaque JSON and passes them through
//! unchanged ([`WeatherBundle`]). The typed view ([`WeatherData`] and
//! friends) is a lenient decode of the same JSON used by display code: every
//! field is optional or defaulted, so a payload with absent nested fields
//! still renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combined proxy payload: current conditions plus a best-effort forecast.
///
/// `forecast` is `None` (serialized as `null`) when the forecast fetch
/// failed; forecast unavailability never fails the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: Value,
    pub forecast: Option<Value>,
}

/// Typed, lenient view of a [`WeatherBundle`] for rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherData {
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub name: String,
    /// Observation time, unix seconds.
    pub dt: i64,
    /// Offset from UTC in seconds.
    pub timezone: i64,
    /// Meters.
    pub visibility: Option<f64>,
    pub coord: Option<Coord>,
    pub main: Metrics,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub sys: Sys,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Percent.
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
    /// Degrees, meteorological.
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
    pub city: ForecastCity,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: Metrics,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastCity {
    pub name: String,
    pub country: Option<String>,
    pub timezone: i64,
    pub population: Option<u64>,
}
