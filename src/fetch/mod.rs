//! Fetching pages of variables from the API.

mod link;

pub use link::{next_link, parse_link_header, Link};

use reqwest::Client;

use crate::config::{MAX_ERROR_BODY_LENGTH, PRIVATE_TOKEN_HEADER};
use crate::credentials::ApiToken;
use crate::error_handling::FetchError;
use crate::models::{Page, Variable};

/// Fetches one page of variables from `url`.
///
/// Issues an authenticated GET (token in the `PRIVATE-TOKEN` header),
/// decodes the body as a JSON array of key/value records, and extracts
/// the next-page URL from the `Link` response header if one is present.
///
/// # Errors
///
/// - [`FetchError::Transport`] if the request never produces a response
/// - [`FetchError::Status`] on a non-2xx response, with the (truncated)
///   body included for diagnosis
/// - [`FetchError::Decode`] if the body is not a JSON variable list
pub async fn fetch_page(client: &Client, token: &ApiToken, url: &str) -> Result<Page, FetchError> {
    log::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .header(PRIVATE_TOKEN_HEADER, token.as_str())
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
            body: truncate_body(&body),
        });
    }

    // Pagination metadata has to be read before .json() consumes the response.
    let next_url = link::next_link(response.headers());

    let variables: Vec<Variable> =
        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

    log::debug!(
        "Fetched {} variable(s) from {} (more pages: {})",
        variables.len(),
        url,
        next_url.is_some()
    );

    Ok(Page {
        variables,
        next_url,
    })
}

/// Truncates an error body for inclusion in an error message.
///
/// Cuts at a character boundary at or below [`MAX_ERROR_BODY_LENGTH`]
/// bytes and appends an ellipsis marker when anything was dropped.
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, original length: {} bytes)", &body[..end], body.len())
}
