//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Per-request timeout from configuration
/// - User-Agent header from configuration
///
/// Redirect following is left at reqwest's default; the variables
/// endpoint answers directly and pagination URLs come back absolute.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation
/// fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_timeout() {
        let config = Config {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
