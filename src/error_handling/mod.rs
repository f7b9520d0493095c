//! Error handling for the exporter.
//!
//! All errors are fatal; see the taxonomy in [`types`].

mod types;

pub use types::{CredentialError, FetchError, InitializationError};
