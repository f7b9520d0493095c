//! Configuration constants.
//!
//! Central location for default values and protocol constants used
//! throughout the application.

/// Environment variable the API token is read from by default.
///
/// Can be overridden with `--token-env` for setups that keep the token
/// under a different name (e.g. per-project tokens in CI).
pub const TOKEN_ENV_VAR: &str = "GITLAB_API_TOKEN";

/// Request header the token is sent in.
///
/// GitLab uses a private-token header rather than the standard
/// `Authorization: Bearer` scheme.
pub const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default HTTP User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("gitlab_env/", env!("CARGO_PKG_VERSION"));

/// Maximum number of bytes of an API error body quoted in error messages.
///
/// GitLab error bodies are normally short JSON blobs, but a misconfigured
/// URL can hit an HTML error page; truncation keeps those readable.
pub const MAX_ERROR_BODY_LENGTH: usize = 512;
