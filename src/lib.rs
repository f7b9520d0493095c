//! gitlab_env library: export project CI variables as shell statements.
//!
//! This library fetches the paginated project variables endpoint of a
//! GitLab-style API and renders each variable as an `export KEY="VALUE"`
//! line, so a shell can source the project configuration with
//! `eval "$(gitlab_env <url>)"`.
//!
//! # Example
//!
//! ```no_run
//! use gitlab_env::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://gitlab.com/api/v4/projects/42/variables".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! eprintln!("Exported {} variables", report.records);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. The API token must be present in the environment (default
//! variable: `GITLAB_API_TOKEN`) before [`run_export`] is called.

#![warn(missing_docs)]

pub mod config;
mod credentials;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod shell;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use credentials::ApiToken;
pub use error_handling::{CredentialError, FetchError, InitializationError};
pub use fetch::fetch_page;
pub use models::{Page, Variable};
pub use run::{run_export, run_export_to, ExportReport};
pub use shell::{escape_value, format_export, write_exports};

// Internal run module (contains the main export logic)
mod run {
    use std::io::{self, Write};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use url::Url;

    use crate::config::Config;
    use crate::credentials::ApiToken;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::shell::write_exports;

    /// Results of a completed export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Number of export lines written
        pub records: usize,
        /// Number of pages fetched
        pub pages: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration, writing to stdout.
    ///
    /// This is the main entry point for the library. The API token is
    /// resolved from the environment variable named by
    /// `config.token_env` *before* any network request is issued, so a
    /// missing credential fails fast.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The token environment variable is unset or empty
    /// - The initial URL does not parse
    /// - The HTTP client cannot be constructed
    /// - Any page fetch fails (transport, non-2xx status, or non-JSON
    ///   body) — the run aborts with whatever was already printed left
    ///   on stdout
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        // Resolve the credential before anything touches the network
        let token = ApiToken::from_env(&config.token_env)?;

        Url::parse(&config.url)
            .with_context(|| format!("invalid variables endpoint URL: {}", config.url))?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_export_to(&client, &token, &config.url, &mut out).await
    }

    /// Drives the fetch/emit loop against an arbitrary writer.
    ///
    /// Fetches pages strictly one at a time, starting from
    /// `initial_url`, writing each page's export lines before advancing.
    /// The loop terminates when a fetched page carries no `rel="next"`
    /// link. Output ordering is page order then in-page order; keys are
    /// neither sorted nor deduplicated.
    ///
    /// Exposed separately from [`run_export`] so tests (and embedders)
    /// can capture the output in a buffer instead of stdout.
    pub async fn run_export_to<W: Write>(
        client: &reqwest::Client,
        token: &ApiToken,
        initial_url: &str,
        out: &mut W,
    ) -> Result<ExportReport> {
        let start_time = Instant::now();
        let mut pages = 0usize;
        let mut records = 0usize;

        let mut next = Some(initial_url.to_string());
        while let Some(url) = next {
            let page = fetch_page(client, token, &url).await?;
            records +=
                write_exports(out, &page.variables).context("Failed to write export lines")?;
            pages += 1;
            next = page.next_url;
        }
        out.flush().context("Failed to flush output")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Exported {} variable(s) across {} page(s) in {:.1}s",
            records, pages, elapsed_seconds
        );

        Ok(ExportReport {
            records,
            pages,
            elapsed_seconds,
        })
    }
}
