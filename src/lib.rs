//! # s3dump
//!
//! Library behind the `s3dump` CLI: enumerate the contents of a publicly
//! listable S3-compatible bucket and download every object, batch by batch.
//!
//! The pipeline is built from small pieces:
//! - [`client::BucketClient`] walks a numeric `prefix=` range on the
//!   listing endpoint and parses each page into [`types::RemoteObject`]s,
//!   lazily.
//! - [`batch::batched`] regroups that stream into fixed-size windows.
//! - [`dump::Dumper`] drains one window at a time, downloading its objects
//!   concurrently with bounded, jittered retry; the window boundary is a
//!   synchronization barrier, so at most one batch is ever in flight.
//!
//! ## Quick Start
//!
//! ```no_run
//! use s3dump::{DumpConfig, Dumper};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = DumpConfig::new("http://bucket.example.com/".parse()?);
//!     config.output_dir = "./dump".into();
//!
//!     let report = Dumper::new(config)?.run().await?;
//!     println!("dumped {} objects ({} failed)", report.dumped, report.failed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Generic stream batching
pub mod batch;
/// Bucket HTTP access (listing enumeration, object download)
pub mod client;
/// Configuration types
pub mod config;
/// The dump pipeline driver
pub mod dump;
/// Error types
pub mod error;
/// Listing response parsing
pub mod listing;
/// Retry logic with exponential backoff
pub mod retry;
/// Core types
pub mod types;

// Re-export commonly used types
pub use client::BucketClient;
pub use config::{
    DEFAULT_BATCH_COUNT, DEFAULT_FROM_PREFIX, DEFAULT_TO_PREFIX, DumpConfig, RetryConfig,
};
pub use dump::{DumpReport, Dumper};
pub use error::{Error, Result};
pub use types::RemoteObject;
