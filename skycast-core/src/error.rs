/// Failure kinds for the weather pipeline.
///
/// Every fallible operation in this crate returns one of these four kinds;
/// transport errors never leak out as raw `reqwest` errors. The CLI is the
/// single place that turns them into a message and an exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid local setup, e.g. no API key. No request was made.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Location lookup failed: no result, or the lookup response was unusable.
    #[error("Geocoding error: {0}")]
    GeoCoding(String),

    /// The provider rejected or rate-limited the request, or answered with
    /// something other than the documented weather payload.
    #[error("Weather API error: {0}")]
    WeatherApi(String),

    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("Network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, Error>;
