//! Human-friendly rendering of weather payloads.
//!
//! Derived display fields live here: compass labels for wind bearings,
//! local-time formatting from the payload's UTC offset, and the condensed
//! daily forecast. UV index and air quality are not provider data; they are
//! deterministic placeholders and every rendering labels them "estimated".

use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, Utc};
use skycast_core::model::{CurrentConditions, Forecast, ForecastEntry, WeatherData};

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a wind bearing in degrees.
pub fn wind_direction(degrees: f64) -> &'static str {
    let idx = (degrees / 22.5).round().rem_euclid(16.0) as usize;
    COMPASS[idx % 16]
}

/// Placeholder UV estimate from the local hour. Not provider data.
pub fn estimated_uv_index(local_hour: u32) -> u32 {
    if !(6..=18).contains(&local_hour) {
        0
    } else if !(10..=16).contains(&local_hour) {
        3
    } else {
        7
    }
}

pub fn uv_label(uv: u32) -> &'static str {
    match uv {
        0..=2 => "low",
        3..=5 => "moderate",
        6..=7 => "high",
        _ => "very high",
    }
}

/// Placeholder air-quality estimate in 1..=100, derived deterministically
/// from the city name and observation time. Not provider data.
pub fn estimated_air_quality(city: &str, observed_at: i64) -> u32 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    city.hash(&mut hasher);
    observed_at.hash(&mut hasher);
    (hasher.finish() % 100) as u32 + 1
}

pub fn air_quality_label(index: u32) -> &'static str {
    match index {
        0..=50 => "good",
        51..=100 => "moderate",
        _ => "poor",
    }
}

/// Condense the 3-hourly forecast list to at most five daily entries.
pub fn daily_entries(forecast: &Forecast) -> Vec<&ForecastEntry> {
    forecast.list.iter().step_by(8).take(5).collect()
}

/// Payload offsets are untrusted; anything that doesn't fit a valid
/// `FixedOffset` falls back to UTC instead of wrapping.
fn fixed_offset(offset_secs: i64) -> FixedOffset {
    i32::try_from(offset_secs)
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
}

fn local_time(ts: i64, offset_secs: i64, fmt: &str) -> String {
    let offset = fixed_offset(offset_secs);
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(utc) => utc.with_timezone(&offset).format(fmt).to_string(),
        None => "n/a".to_string(),
    }
}

fn local_hour(ts: i64, offset_secs: i64) -> u32 {
    use chrono::Timelike;
    let offset = fixed_offset(offset_secs);
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&offset).hour())
        .unwrap_or(12)
}

fn description(entry_weather: &[skycast_core::model::Condition]) -> &str {
    entry_weather
        .first()
        .map(|w| w.description.as_str())
        .unwrap_or("unknown")
}

fn render_current(out: &mut String, current: &CurrentConditions) {
    let location = match current.sys.country.as_deref() {
        Some(country) => format!("{}, {}", current.name, country),
        None => current.name.clone(),
    };

    let _ = writeln!(out, "{location}");
    let _ = writeln!(
        out,
        "  {}  {:.0}°C (feels like {:.0}°C)",
        description(&current.weather),
        current.main.temp,
        current.main.feels_like
    );
    let _ = writeln!(
        out,
        "  min {:.0}°C / max {:.0}°C",
        current.main.temp_min, current.main.temp_max
    );
    let _ = writeln!(out, "  humidity    {:.0}%", current.main.humidity);

    match current.wind.deg {
        Some(deg) => {
            let _ = writeln!(
                out,
                "  wind        {:.1} m/s {} ({deg:.0}°)",
                current.wind.speed,
                wind_direction(deg)
            );
        }
        None => {
            let _ = writeln!(out, "  wind        {:.1} m/s", current.wind.speed);
        }
    }

    let _ = writeln!(out, "  pressure    {:.0} hPa", current.main.pressure);

    match current.visibility {
        Some(meters) => {
            let _ = writeln!(out, "  visibility  {:.1} km", meters / 1000.0);
        }
        None => {
            let _ = writeln!(out, "  visibility  n/a");
        }
    }

    let uv = estimated_uv_index(local_hour(current.dt, current.timezone));
    let _ = writeln!(out, "  UV index    {uv} ({}, estimated)", uv_label(uv));

    let aq = estimated_air_quality(&current.name, current.dt);
    let _ = writeln!(
        out,
        "  air quality {aq} ({}, estimated)",
        air_quality_label(aq)
    );

    let sunrise = current
        .sys
        .sunrise
        .map(|ts| local_time(ts, current.timezone, "%H:%M"))
        .unwrap_or_else(|| "n/a".to_string());
    let sunset = current
        .sys
        .sunset
        .map(|ts| local_time(ts, current.timezone, "%H:%M"))
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(out, "  sunrise {sunrise} / sunset {sunset}");

    match current.coord {
        Some(coord) => {
            let _ = writeln!(out, "  coordinates {:.2}°, {:.2}°", coord.lat, coord.lon);
        }
        None => {
            let _ = writeln!(out, "  coordinates n/a");
        }
    }

    let _ = writeln!(
        out,
        "  updated {}",
        local_time(current.dt, current.timezone, "%Y-%m-%d %H:%M")
    );
}

fn render_forecast(out: &mut String, forecast: &Forecast) {
    let _ = writeln!(out);
    let _ = writeln!(out, "5-day forecast — {}", forecast.city.name);

    for entry in daily_entries(forecast) {
        let day = local_time(entry.dt, forecast.city.timezone, "%a %d %b");
        let _ = writeln!(
            out,
            "  {day}  {:>3.0}°C  {}  humidity {:.0}%  wind {:.1} m/s",
            entry.main.temp,
            description(&entry.weather),
            entry.main.humidity,
            entry.wind.speed
        );
    }
}

/// Render a full payload. Never fails: absent optional fields render as
/// `n/a`, and a missing forecast just omits the forecast section.
pub fn render(data: &WeatherData) -> String {
    let mut out = String::new();
    render_current(&mut out, &data.current);
    if let Some(forecast) = &data.forecast {
        render_forecast(&mut out, forecast);
    }
    out
}
