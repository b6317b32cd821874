//! HTTP REST API for the weather proxy.
//!
//! One substantive route: `GET /api/weather?city=<name>` proxies the
//! upstream provider and converts every failure into a structured JSON
//! error body with a matching status code. No retry, no coalescing, no
//! rate limiting; each request issues its own pair of upstream calls.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use skycast_core::{FetchError, WeatherProvider};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Freshness hint attached to successful responses.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: Option<String>,
}

/// JSON error body, `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(err: &FetchError) -> Response {
    let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// GET /api/weather?city=<name> - Combined current conditions + forecast
async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    // Validation happens before the provider sees the request.
    let Some(city) = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    else {
        return error_response(&FetchError::BlankCity);
    };

    log::info!("weather lookup for {city:?}");

    match state.provider.fetch(city).await {
        Ok(bundle) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(bundle),
        )
            .into_response(),
        Err(err) => {
            log::warn!("weather lookup for {city:?} failed: {err}");
            error_response(&err)
        }
    }
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router.
pub fn create_router(provider: Arc<dyn WeatherProvider>) -> Router {
    let state = AppState { provider };

    // Permissive CORS; also answers the OPTIONS preflight.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/weather", get(get_weather))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_http_server(
    provider: Arc<dyn WeatherProvider>,
    bind: &str,
    port: u16,
) -> anyhow::Result<()> {
    let app = create_router(provider);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    log::info!("HTTP server listening on {bind}:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
