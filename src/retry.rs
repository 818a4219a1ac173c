//! Retry logic with exponential backoff
//!
//! Object downloads are retried on transient failures with exponential
//! backoff and optional jitter to prevent thundering herd against a
//! recovering endpoint. Permanent failures (a 404, a bad key, a full disk)
//! fail fast instead of spinning.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::config::RetryConfig;
use crate::error::Error;

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (network timeouts, connection resets, server errors)
/// should return `true`. Permanent failures (client errors, malformed
/// listings, missing directories) should return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be
    /// retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            Error::Network(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|status| status.is_server_error())
            }
            Error::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::NotConnected
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::Interrupted
            ),
            // Listing and parse failures abort the run; the retry loop
            // never sees them. Everything else is permanent.
            Error::MalformedRecord { .. }
            | Error::InvalidTimestamp { .. }
            | Error::InvalidSize { .. }
            | Error::Listing { .. }
            | Error::ObjectUrl { .. }
            | Error::OutputDirNotFound(_)
            | Error::Config { .. } => false,
        }
    }
}

/// Execute an async operation, retrying transient failures with
/// exponential backoff.
///
/// Retryable errors are retried up to `config.max_attempts` additional
/// times; the delay starts at `config.initial_delay` and grows by
/// `config.backoff_multiplier` per attempt, capped at `config.max_delay`,
/// with optional jitter. Returns the successful result, or the last error
/// once attempts are exhausted or a permanent error occurs.
pub async fn fetch_with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IsRetryable + std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "fetch succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() && attempt < config.max_attempts => {
                attempt += 1;

                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis(),
                    "fetch failed, retrying"
                );

                let jittered_delay = if config.jitter {
                    add_jitter(delay)
                } else {
                    delay
                };

                tokio::time::sleep(jittered_delay).await;

                let next_delay =
                    Duration::from_secs_f64(delay.as_secs_f64() * config.backoff_multiplier);
                delay = next_delay.min(config.max_delay);
            }
            Err(e) => {
                if e.is_retryable() {
                    tracing::error!(
                        error = %e,
                        attempts = attempt + 1,
                        "fetch failed after all retry attempts exhausted"
                    );
                } else {
                    tracing::error!(error = %e, "fetch failed with non-retryable error");
                }
                return Err(e);
            }
        }
    }
}

/// Add random jitter to a delay.
///
/// Uniformly distributed between 0% and 100% of the delay, so the actual
/// delay lands between `delay` and `2 * delay`.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    Duration::from_secs_f64(delay.as_secs_f64() * (1.0 + jitter_factor))
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TestError::Transient => write!(f, "transient error"),
                TestError::Permanent => write!(f, "permanent error"),
            }
        }
    }

    impl IsRetryable for TestError {
        fn is_retryable(&self) -> bool {
            matches!(self, TestError::Transient)
        }
    }

    fn fast_config(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_secs(1),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }

    #[tokio::test]
    async fn success_needs_no_retry() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(5), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TestError>(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 1, "should only call once");
    }

    #[tokio::test]
    async fn k_transient_failures_take_k_plus_one_attempts() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(5), || {
            let counter = counter_clone.clone();
            async move {
                let count = counter.fetch_add(1, Ordering::SeqCst);
                if count < 3 {
                    Err(TestError::Transient)
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(
            counter.load(Ordering::SeqCst),
            4,
            "3 failures then success means 4 attempts"
        );
    }

    #[tokio::test]
    async fn exhausted_attempts_return_last_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(2), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Transient)
            }
        })
        .await;

        assert!(matches!(result, Err(TestError::Transient)));
        assert_eq!(
            counter.load(Ordering::SeqCst),
            3,
            "should try initial + 2 retries"
        );
    }

    #[tokio::test]
    async fn permanent_error_is_not_retried() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(5), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Permanent)
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(
            counter.load(Ordering::SeqCst),
            1,
            "should not retry permanent error"
        );
    }

    #[tokio::test]
    async fn zero_max_attempts_fails_on_first_transient_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(0), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Transient)
            }
        })
        .await;

        assert!(matches!(result, Err(TestError::Transient)));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backoff_delays_increase_exponentially() {
        let config = RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: false,
        };

        let timestamps = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let ts_clone = timestamps.clone();

        let _result = fetch_with_retry(&config, || {
            let ts = ts_clone.clone();
            async move {
                ts.lock().await.push(std::time::Instant::now());
                Err::<i32, _>(TestError::Transient)
            }
        })
        .await;

        let ts = timestamps.lock().await;
        assert_eq!(ts.len(), 4, "initial + 3 retries = 4 calls");

        let gap1 = ts[1].duration_since(ts[0]);
        let gap2 = ts[2].duration_since(ts[1]);
        let gap3 = ts[3].duration_since(ts[2]);

        assert!(
            gap1 >= Duration::from_millis(40),
            "first delay should be ~50ms, was {gap1:?}"
        );
        assert!(
            gap2 >= Duration::from_millis(80),
            "second delay should be ~100ms, was {gap2:?}"
        );
        assert!(
            gap3 >= Duration::from_millis(160),
            "third delay should be ~200ms, was {gap3:?}"
        );
    }

    #[tokio::test]
    async fn delays_are_capped_at_max_delay() {
        // Aggressive multiplier: without capping, delays would be 50ms,
        // 500ms, 5000ms. With max_delay=200ms: 50ms, 200ms, 200ms.
        let config = RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_millis(200),
            backoff_multiplier: 10.0,
            jitter: false,
        };

        let timestamps = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let ts_clone = timestamps.clone();

        let _result = fetch_with_retry(&config, || {
            let ts = ts_clone.clone();
            async move {
                ts.lock().await.push(std::time::Instant::now());
                Err::<i32, _>(TestError::Transient)
            }
        })
        .await;

        let ts = timestamps.lock().await;
        assert_eq!(ts.len(), 4);

        // Generous tolerance for scheduling overhead
        let max_allowed = Duration::from_millis(350);
        for i in 1..ts.len() {
            let gap = ts[i].duration_since(ts[i - 1]);
            assert!(
                gap <= max_allowed,
                "delay before attempt {} was {gap:?}, exceeding max_delay + tolerance",
                i + 1
            );
        }
    }

    #[test]
    fn add_jitter_stays_within_bounds() {
        let delay = Duration::from_millis(50);
        for i in 0..200 {
            let jittered = add_jitter(delay);
            assert!(
                jittered >= delay,
                "iteration {i}: jittered {jittered:?} < base delay"
            );
            assert!(
                jittered <= delay * 2,
                "iteration {i}: jittered {jittered:?} > 2x base delay"
            );
        }
    }

    #[test]
    fn add_jitter_on_zero_delay_returns_zero() {
        assert_eq!(add_jitter(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn transient_io_errors_are_retryable() {
        for kind in [
            std::io::ErrorKind::TimedOut,
            std::io::ErrorKind::ConnectionRefused,
            std::io::ErrorKind::ConnectionReset,
            std::io::ErrorKind::ConnectionAborted,
            std::io::ErrorKind::BrokenPipe,
            std::io::ErrorKind::Interrupted,
        ] {
            let err = Error::Io(std::io::Error::new(kind, "boom"));
            assert!(err.is_retryable(), "{kind:?} should be retryable");
        }
    }

    #[test]
    fn permanent_io_errors_are_not_retryable() {
        for kind in [
            std::io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied,
        ] {
            let err = Error::Io(std::io::Error::new(kind, "boom"));
            assert!(!err.is_retryable(), "{kind:?} is permanent");
        }
    }

    #[test]
    fn listing_side_errors_are_never_retryable() {
        assert!(
            !Error::MalformedRecord {
                field: "Key",
                fragment: String::new(),
            }
            .is_retryable()
        );
        assert!(!Error::OutputDirNotFound("missing".into()).is_retryable());
        assert!(
            !Error::Config {
                message: "bad".to_string(),
            }
            .is_retryable()
        );
    }

    // reqwest::Error has no public constructor; its retryability mapping
    // (timeout/connect/5xx) is exercised by the integration tests.
}
