//! The dump pipeline: batch the listing stream and drain it with bounded
//! concurrency.
//!
//! Batches never overlap. Every download of a batch has completed,
//! successfully or terminally, before the next batch is pulled from the
//! enumerator, so the batch size doubles as the concurrency cap.

use futures::pin_mut;
use futures::stream::{self, StreamExt};

use crate::batch::batched;
use crate::client::BucketClient;
use crate::config::DumpConfig;
use crate::error::{Error, Result};
use crate::retry::fetch_with_retry;
use crate::types::RemoteObject;

/// Outcome of a completed dump run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpReport {
    /// Objects downloaded to disk
    pub dumped: u64,
    /// Objects given up on after exhausting retries
    pub failed: u64,
}

/// Drives the enumerate, batch and download pipeline for one bucket.
pub struct Dumper {
    client: BucketClient,
    config: DumpConfig,
}

impl Dumper {
    /// Build a dumper from a validated configuration.
    pub fn new(config: DumpConfig) -> Result<Self> {
        if config.batch_count == 0 {
            return Err(Error::Config {
                message: "batch_count must be at least 1".to_string(),
            });
        }

        Ok(Self {
            client: BucketClient::new(config.base_url.clone()),
            config,
        })
    }

    /// Run the dump to completion.
    ///
    /// The output directory must already exist; if it does not, no HTTP
    /// request is ever made. A listing or parse failure aborts the run
    /// with its error. Per-object terminal failures do not abort: they
    /// are logged and tallied in the returned report.
    pub async fn run(&self) -> Result<DumpReport> {
        if !tokio::fs::try_exists(&self.config.output_dir).await? {
            return Err(Error::OutputDirNotFound(self.config.output_dir.clone()));
        }

        tracing::info!(
            url = %self.config.base_url,
            from_prefix = self.config.from_prefix,
            to_prefix = self.config.to_prefix,
            batch_count = self.config.batch_count,
            "starting dump"
        );

        let listing = self
            .client
            .enumerate_objects(self.config.from_prefix..=self.config.to_prefix);
        let batches = batched(listing, self.config.batch_count);
        pin_mut!(batches);

        let mut report = DumpReport::default();
        while let Some(window) = batches.next().await {
            let objects: Vec<RemoteObject> = window.into_iter().collect::<Result<_>>()?;
            self.drain_batch(&objects, &mut report).await;
            tracing::info!(dumped = report.dumped, failed = report.failed, "dump progress");
        }

        Ok(report)
    }

    /// Download every object of one batch concurrently and wait for all of
    /// them. At most `batch_count` transfers are in flight.
    async fn drain_batch(&self, objects: &[RemoteObject], report: &mut DumpReport) {
        let outcomes: Vec<bool> = stream::iter(objects)
            .map(|object| self.download_with_retry(object))
            .buffer_unordered(self.config.batch_count)
            .collect()
            .await;

        for succeeded in outcomes {
            if succeeded {
                report.dumped += 1;
            } else {
                report.failed += 1;
            }
        }
    }

    /// Resilient fetch: one object, retried per the configured policy.
    /// Terminal failure is absorbed into the tally, never propagated.
    async fn download_with_retry(&self, object: &RemoteObject) -> bool {
        let attempt = || self.client.download_object(object, &self.config.output_dir);

        match fetch_with_retry(&self.config.retry, attempt).await {
            Ok(path) => {
                tracing::debug!(key = %object.key, path = %path.display(), "object dumped");
                true
            }
            Err(error) => {
                tracing::warn!(key = %object.key, %error, "giving up on object");
                false
            }
        }
    }
}
