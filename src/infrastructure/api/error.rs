use thiserror::Error;

/// Failures talking to the dashboard endpoints.
///
/// A server-reported business failure is not an `ApiError`: it arrives as a
/// well-formed response whose `status` is not the success sentinel.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid session cookie value")]
    InvalidCookie,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
