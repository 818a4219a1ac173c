//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Number of objects downloaded simultaneously when unspecified
pub const DEFAULT_BATCH_COUNT: usize = 20;

/// First listing prefix enumerated when unspecified
pub const DEFAULT_FROM_PREFIX: u32 = 0;

/// Last listing prefix (inclusive) enumerated when unspecified
pub const DEFAULT_TO_PREFIX: u32 = 99;

/// Top-level dump configuration
#[derive(Clone, Debug)]
pub struct DumpConfig {
    /// Base URL of the bucket's listing endpoint
    pub base_url: Url,

    /// Batch size, which is also the concurrency cap: at most this many
    /// downloads are in flight at any instant (default: 20)
    pub batch_count: usize,

    /// Directory dumped objects are written into (default: `.`).
    /// Must exist before the dump starts; it is never created.
    pub output_dir: PathBuf,

    /// First listing prefix to enumerate (default: 0)
    pub from_prefix: u32,

    /// Last listing prefix to enumerate, inclusive (default: 99).
    /// A range with `from_prefix > to_prefix` is empty and dumps nothing.
    pub to_prefix: u32,

    /// Retry behavior for object downloads
    pub retry: RetryConfig,
}

impl DumpConfig {
    /// Configuration with the documented defaults for everything but the
    /// endpoint.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            batch_count: DEFAULT_BATCH_COUNT,
            output_dir: PathBuf::from("."),
            from_prefix: DEFAULT_FROM_PREFIX,
            to_prefix: DEFAULT_TO_PREFIX,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration for object downloads
///
/// Only transient failures are retried; see
/// [`IsRetryable`](crate::retry::IsRetryable).
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial one (default: 5)
    pub max_attempts: u32,

    /// Initial delay before the first retry (default: 1 second)
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 60 seconds)
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: true)
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}
