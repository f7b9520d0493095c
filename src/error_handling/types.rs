//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! Every variant here is fatal to the run: the exporter performs no
//! retries and recovers from nothing (a partial export left on stdout is
//! the caller's problem to discard).

use log::SetLoggerError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for API token resolution.
///
/// Both variants abort the run before any network request is issued.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The token environment variable is not set at all.
    #[error("environment variable {0} is not set; export a GitLab API token under that name")]
    Missing(String),

    /// The token environment variable is set but empty.
    ///
    /// The API would answer 401 for an empty token anyway; rejecting it
    /// here gives a clearer failure than a late HTTP error.
    #[error("environment variable {0} is set but empty")]
    Empty(String),
}

/// Error types for fetching a page of variables.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable response (DNS, connect,
    /// timeout, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// URL the request was issued against.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("API returned {status} for {url}: {body}")]
    Status {
        /// URL the request was issued against.
        url: String,
        /// HTTP status code of the response.
        status: StatusCode,
        /// Response body, truncated for readability.
        body: String,
    },

    /// The response body was not a JSON array of key/value records.
    #[error("failed to decode response from {url} as a JSON variable list: {source}")]
    Decode {
        /// URL the request was issued against.
        url: String,
        /// Underlying deserialization error.
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_messages_name_the_variable() {
        let missing = CredentialError::Missing("GITLAB_API_TOKEN".to_string());
        assert!(missing.to_string().contains("GITLAB_API_TOKEN"));
        assert!(missing.to_string().contains("not set"));

        let empty = CredentialError::Empty("MY_TOKEN".to_string());
        assert!(empty.to_string().contains("MY_TOKEN"));
        assert!(empty.to_string().contains("empty"));
    }

    #[test]
    fn test_fetch_status_error_includes_status_and_body() {
        let err = FetchError::Status {
            url: "https://gitlab.example.com/api/v4/projects/1/variables".to_string(),
            status: StatusCode::UNAUTHORIZED,
            body: "{\"message\":\"401 Unauthorized\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("/projects/1/variables"));
        assert!(msg.contains("Unauthorized"));
    }
}
