//! Error types for s3dump
//!
//! A single error enum covers the whole pipeline. The variants split along
//! the propagation boundaries that matter:
//! - listing-side failures (`MalformedRecord`, `InvalidTimestamp`,
//!   `InvalidSize`, `Listing`) abort an enumeration run outright,
//! - object-side failures (`Network`, `Io`, `ObjectUrl`) are handled by the
//!   retry policy in [`crate::retry`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for s3dump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for s3dump
#[derive(Debug, Error)]
pub enum Error {
    /// A `<Contents>` fragment is missing a required child element
    #[error("malformed listing record: missing <{field}> in fragment: {fragment}")]
    MalformedRecord {
        /// Name of the missing element (`Key`, `LastModified` or `Size`)
        field: &'static str,
        /// The offending fragment text
        fragment: String,
    },

    /// A `<LastModified>` value does not match the listing wire format
    #[error("invalid <LastModified> timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The raw timestamp text
        value: String,
        /// The underlying parse failure
        source: chrono::format::ParseError,
    },

    /// A `<Size>` value is not a non-negative integer
    #[error("invalid <Size> value {value:?}: {source}")]
    InvalidSize {
        /// The raw size text
        value: String,
        /// The underlying parse failure
        source: std::num::ParseIntError,
    },

    /// Fetching one listing page failed (transport or HTTP status)
    #[error("listing request for prefix {prefix} failed: {source}")]
    Listing {
        /// The prefix whose listing request failed
        prefix: u32,
        /// The underlying transport failure
        source: reqwest::Error,
    },

    /// An object key does not resolve against the bucket endpoint
    #[error("cannot resolve URL for object {key:?}: {source}")]
    ObjectUrl {
        /// The object key that failed to resolve
        key: String,
        /// The underlying URL parse failure
        source: url::ParseError,
    },

    /// Network error during an object download
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured output directory does not exist
    #[error("output directory not found: {0}")]
    OutputDirNotFound(PathBuf),

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the invalid setting
        message: String,
    },
}
