//! Error types used across the review-balancer crate.
use thiserror::Error;

/// Failure reaching the GraphQL API. No result is available for the cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("GraphQL API responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Tried to create a header value from invalid string data")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

/// The payload could not be read as a GraphQL response at the top level.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to decode response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response JSON is not an object")]
    NotAnObject,

    #[error("Response JSON has no 'data' key")]
    MissingData,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required")]
    Missing(String),

    #[error("Environment variable '{0}' is empty")]
    Empty(String),
}
