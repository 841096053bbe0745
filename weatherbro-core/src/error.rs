use reqwest::StatusCode;
use thiserror::Error;

/// Errors from fetching and decoding a weather observation.
///
/// All of these are terminal for the run: nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network-level failure: connection refused, DNS, timeout, body read.
    #[error("Failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 401 from the API.
    #[error("Invalid API key")]
    Auth,

    /// HTTP 404 from the API.
    #[error("City '{city}' not found. Please check the city name")]
    NotFound {
        /// The city as it was queried.
        city: String,
    },

    /// Any other non-success HTTP status.
    #[error("Weather service returned status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
}
