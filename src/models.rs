//! Data models for API responses.

use serde::Deserialize;

/// A single project variable as returned by the API.
///
/// The endpoint sends additional fields per record (`variable_type`,
/// `protected`, `masked`, ...); only the key and value matter for the
/// export and the rest are ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Variable {
    /// Variable name, emitted verbatim (no validation or normalization).
    pub key: String,
    /// Variable value; may contain characters that need shell escaping.
    pub value: String,
}

/// One batch of results from the paginated variables endpoint.
#[derive(Debug)]
pub struct Page {
    /// Variables in API response order.
    pub variables: Vec<Variable>,
    /// Target of the `rel="next"` link relation, absent on the last page.
    pub next_url: Option<String>,
}
