//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, TOKEN_ENV_VAR};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line in the binary; can also be constructed
/// programmatically (e.g. in tests) via `Default` plus struct update
/// syntax.
///
/// # Examples
///
/// ```no_run
/// use gitlab_env::Config;
///
/// let config = Config {
///     url: "https://gitlab.com/api/v4/projects/42/variables".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gitlab_env",
    version,
    about = "Export GitLab project CI variables as shell `export` statements",
    long_about = "Fetches the paginated project variables endpoint and prints one\n\
                  `export KEY=\"VALUE\"` line per variable to stdout, for use as\n\
                  `eval \"$(gitlab_env <URL>)\"`. Logging and the run summary go to\n\
                  stderr so stdout stays clean for eval."
)]
pub struct Config {
    /// Full URL of the project variables endpoint
    /// (e.g. https://gitlab.com/api/v4/projects/<id>/variables)
    pub url: String,

    /// Environment variable the API token is read from
    #[arg(long, value_name = "VAR", default_value = TOKEN_ENV_VAR)]
    pub token_env: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, value_name = "UA", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            token_env: TOKEN_ENV_VAR.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
