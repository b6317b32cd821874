//! End-to-end tests of the proxy endpoint over a real listener.
//!
//! Two setups: a mock provider to exercise the handler's status mapping,
//! and a stub upstream server behind a real `OpenWeatherClient` to exercise
//! the full proxy path without touching the network.

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use skycast_core::{
    ApiKeySource, FetchError, WeatherProvider,
    model::WeatherBundle,
    provider::openweather::OpenWeatherClient,
};
use std::{collections::HashMap, sync::Arc};

use skycast_server::http::{CACHE_CONTROL_VALUE, create_router};

#[derive(Debug)]
enum MockProvider {
    Success { with_forecast: bool },
    NotFound,
    InvalidKey,
    MissingKey,
    Upstream(u16),
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch(&self, _city: &str) -> Result<WeatherBundle, FetchError> {
        match self {
            MockProvider::Success { with_forecast } => Ok(WeatherBundle {
                current: current_payload(),
                forecast: with_forecast.then(forecast_payload),
            }),
            MockProvider::NotFound => Err(FetchError::CityNotFound),
            MockProvider::InvalidKey => Err(FetchError::InvalidKey),
            MockProvider::MissingKey => Err(FetchError::MissingApiKey),
            MockProvider::Upstream(status) => Err(FetchError::Upstream(*status)),
        }
    }
}

fn current_payload() -> Value {
    json!({
        "name": "London",
        "dt": 1700000000,
        "timezone": 0,
        "main": {"temp": 8.0, "feels_like": 6.2, "humidity": 81},
        "weather": [{"description": "overcast clouds", "icon": "04d"}],
        "wind": {"speed": 4.1, "deg": 250}
    })
}

fn forecast_payload() -> Value {
    json!({
        "city": {"name": "London", "country": "GB", "timezone": 0},
        "list": [{"dt": 1700010800,
                  "main": {"temp": 7.0, "feels_like": 5.5, "humidity": 85},
                  "weather": [{"description": "light rain", "icon": "10d"}],
                  "wind": {"speed": 5.0, "deg": 240}}]
    })
}

async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn spawn_proxy(provider: Arc<dyn WeatherProvider>) -> String {
    spawn_app(create_router(provider)).await
}

#[tokio::test]
async fn missing_city_is_rejected_with_400() {
    let base = spawn_proxy(Arc::new(MockProvider::Success {
        with_forecast: true,
    }))
    .await;

    let res = reqwest::get(format!("{base}/api/weather")).await.unwrap();
    assert_eq!(res.status().as_u16(), 400);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("city"));
}

#[tokio::test]
async fn blank_city_is_rejected_with_400() {
    let base = spawn_proxy(Arc::new(MockProvider::Success {
        with_forecast: true,
    }))
    .await;

    let res = reqwest::get(format!("{base}/api/weather?city=%20%20"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[tokio::test]
async fn success_returns_bundle_with_freshness_hint() {
    let base = spawn_proxy(Arc::new(MockProvider::Success {
        with_forecast: true,
    }))
    .await;

    let res = reqwest::get(format!("{base}/api/weather?city=London"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(
        res.headers().get("cache-control").unwrap(),
        CACHE_CONTROL_VALUE
    );

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["current"]["name"], "London");
    assert_eq!(body["forecast"]["city"]["name"], "London");
}

#[tokio::test]
async fn absent_forecast_is_explicit_null() {
    let base = spawn_proxy(Arc::new(MockProvider::Success {
        with_forecast: false,
    }))
    .await;

    let res = reqwest::get(format!("{base}/api/weather?city=London"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let body: Value = res.json().await.unwrap();
    assert!(body["forecast"].is_null());
    assert_eq!(body["current"]["name"], "London");
}

#[tokio::test]
async fn provider_errors_map_to_statuses() {
    for (provider, expected) in [
        (MockProvider::NotFound, 404),
        (MockProvider::InvalidKey, 401),
        (MockProvider::MissingKey, 500),
        (MockProvider::Upstream(429), 429),
    ] {
        let base = spawn_proxy(Arc::new(provider)).await;
        let res = reqwest::get(format!("{base}/api/weather?city=Anywhere"))
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), expected);

        let body: Value = res.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn preflight_gets_permissive_cors() {
    let base = spawn_proxy(Arc::new(MockProvider::NotFound)).await;

    let client = reqwest::Client::new();
    let res = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/weather"))
        .header("Origin", "http://example.net")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();

    assert!(res.status().is_success());
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn health_endpoint_answers() {
    let base = spawn_proxy(Arc::new(MockProvider::NotFound)).await;
    let res = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");
}

// --- full path through a stub upstream -----------------------------------

/// Minimal OpenWeather stand-in: knows "Atlantis" is missing and can be
/// told to fail the forecast resource.
fn stub_upstream(forecast_ok: bool) -> Router {
    Router::new()
        .route(
            "/weather",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("q").map(String::as_str) {
                    Some("Atlantis") => (
                        StatusCode::NOT_FOUND,
                        Json(json!({"cod": "404", "message": "city not found"})),
                    )
                        .into_response(),
                    _ => Json(current_payload()).into_response(),
                }
            }),
        )
        .route(
            "/forecast",
            get(move || async move {
                if forecast_ok {
                    Json(forecast_payload()).into_response()
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }),
        )
}

async fn spawn_proxy_with_stub_upstream(forecast_ok: bool) -> String {
    let upstream = spawn_app(stub_upstream(forecast_ok)).await;
    let client =
        OpenWeatherClient::with_base_url(ApiKeySource::Static("TESTKEY".to_string()), upstream);
    spawn_proxy(Arc::new(client)).await
}

#[tokio::test]
async fn full_path_proxies_current_and_forecast() {
    let base = spawn_proxy_with_stub_upstream(true).await;

    let res = reqwest::get(format!("{base}/api/weather?city=London"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["current"]["name"], "London");
    assert_eq!(body["forecast"]["list"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn full_path_unknown_city_is_404() {
    let base = spawn_proxy_with_stub_upstream(true).await;

    let res = reqwest::get(format!("{base}/api/weather?city=Atlantis"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn full_path_non_json_upstream_body_is_502() {
    // A maintenance page or misbehaving gateway in front of the upstream.
    let upstream = spawn_app(Router::new().route(
        "/weather",
        get(|| async { "<html>down for maintenance</html>" }),
    ))
    .await;
    let client =
        OpenWeatherClient::with_base_url(ApiKeySource::Static("TESTKEY".to_string()), upstream);
    let base = spawn_proxy(Arc::new(client)).await;

    let res = reqwest::get(format!("{base}/api/weather?city=London"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 502);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("unreadable"));
}

#[tokio::test]
async fn full_path_forecast_failure_still_succeeds() {
    let base = spawn_proxy_with_stub_upstream(false).await;

    let res = reqwest::get(format!("{base}/api/weather?city=London"))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["current"]["name"], "London");
    assert!(body["forecast"].is_null());
}
