//! Error taxonomy for the weather fetch path.
//!
//! Every failure mode the proxy endpoint can surface maps to exactly one
//! variant here, and every variant carries the HTTP status the endpoint
//! responds with. Messages are user-facing; callers print them verbatim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// No upstream API credential configured. Fatal to the request, checked
    /// before any network I/O.
    #[error("weather API key is not configured on the server")]
    MissingApiKey,

    /// Blank or missing city name, rejected before any network I/O.
    #[error("city name is required")]
    BlankCity,

    #[error("city not found; check the name and try again")]
    CityNotFound,

    #[error("the configured weather API key was rejected")]
    InvalidKey,

    /// Any other non-success upstream HTTP status; the code is passed
    /// through to the caller.
    #[error("weather service error: upstream returned status {0}")]
    Upstream(u16),

    /// Network-level failure, as opposed to an HTTP error response.
    #[error("could not reach the weather service; try again shortly")]
    Unreachable(#[source] reqwest::Error),

    #[error("the weather service returned an unreadable response")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl FetchError {
    /// The HTTP status the proxy endpoint answers with for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            FetchError::MissingApiKey => 500,
            FetchError::BlankCity => 400,
            FetchError::CityNotFound => 404,
            FetchError::InvalidKey => 401,
            FetchError::Upstream(status) => *status,
            FetchError::Unreachable(_) => 503,
            FetchError::MalformedResponse(_) => 502,
            FetchError::Internal(_) => 500,
        }
    }
}
