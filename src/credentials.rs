//! API token resolution.
//!
//! The token is read from the process environment exactly once, before
//! the first request, and then passed by reference into the fetch layer.
//! Nothing in this crate logs or prints the token; the `Debug` impl
//! redacts it so accidental `{:?}` formatting stays safe.

use std::env;
use std::fmt;

use crate::error_handling::CredentialError;

/// An opaque API token for the project-configuration endpoint.
///
/// Sent in the `PRIVATE-TOKEN` request header. Construct with
/// [`ApiToken::from_env`] at startup; absence of the variable is a fatal
/// configuration error surfaced before any network activity.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Resolves the token from the environment variable named `var`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] if the variable is unset (or
    /// not valid Unicode), and [`CredentialError::Empty`] if it is set to
    /// an empty string.
    pub fn from_env(var: &str) -> Result<Self, CredentialError> {
        match env::var(var) {
            Ok(value) if value.is_empty() => Err(CredentialError::Empty(var.to_string())),
            Ok(value) => Ok(ApiToken(value)),
            Err(_) => Err(CredentialError::Missing(var.to_string())),
        }
    }

    /// Returns the raw token for use as a request header value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own uniquely named variable: env vars are
    // process-global and cargo runs tests in parallel.

    #[test]
    fn test_from_env_reads_token() {
        env::set_var("GITLAB_ENV_TEST_TOKEN_PRESENT", "glpat-abc123");
        let token = ApiToken::from_env("GITLAB_ENV_TEST_TOKEN_PRESENT").unwrap();
        assert_eq!(token.as_str(), "glpat-abc123");
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = ApiToken::from_env("GITLAB_ENV_TEST_TOKEN_UNSET").unwrap_err();
        assert!(matches!(err, CredentialError::Missing(_)));
    }

    #[test]
    fn test_from_env_empty_variable() {
        env::set_var("GITLAB_ENV_TEST_TOKEN_EMPTY", "");
        let err = ApiToken::from_env("GITLAB_ENV_TEST_TOKEN_EMPTY").unwrap_err();
        assert!(matches!(err, CredentialError::Empty(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        env::set_var("GITLAB_ENV_TEST_TOKEN_DEBUG", "super-secret");
        let token = ApiToken::from_env("GITLAB_ENV_TEST_TOKEN_DEBUG").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "ApiToken(***)");
    }
}
