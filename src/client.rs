//! HTTP access to the bucket: listing enumeration and object download.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use async_stream::try_stream;
use futures::Stream;
use reqwest::header::{self, HeaderMap};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};
use crate::listing;
use crate::types::RemoteObject;

/// Client for one bucket endpoint.
///
/// Owns the HTTP session shared by every listing and object request. The
/// underlying connection pool is safe for concurrent use from all download
/// tasks and is released when the last clone is dropped, on every exit
/// path.
#[derive(Clone, Debug)]
pub struct BucketClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BucketClient {
    /// Create a client for the given listing endpoint.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Lazily enumerate every object in the given inclusive prefix range.
    ///
    /// One listing request is issued per prefix, in ascending order, and
    /// each page's records are yielded in document order before the next
    /// prefix is fetched. A prefix with no records contributes nothing.
    /// The stream is single-pass and ends at range exhaustion or at the
    /// first listing or parse failure; listing requests are never retried.
    pub fn enumerate_objects(
        &self,
        prefixes: RangeInclusive<u32>,
    ) -> impl Stream<Item = Result<RemoteObject>> + '_ {
        try_stream! {
            for prefix in prefixes {
                let body = self.fetch_listing_page(prefix).await?;
                for record in listing::parse_listing(&body) {
                    yield record?;
                }
            }
        }
    }

    /// Fetch one listing page and return its full body.
    async fn fetch_listing_page(&self, prefix: u32) -> Result<String> {
        tracing::debug!(prefix, "fetching listing page");

        let page = async {
            self.http
                .get(self.base_url.clone())
                .query(&[("prefix", prefix)])
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        };

        page.await.map_err(|source| Error::Listing { prefix, source })
    }

    /// Download one object into `dest_dir`, making exactly one attempt.
    ///
    /// The body is streamed to disk chunk by chunk rather than buffered
    /// wholesale. Returns the path the object was written to; the target
    /// file is created or overwritten. Transport and filesystem errors
    /// propagate untouched -- retry policy lives a layer up.
    pub async fn download_object(
        &self,
        object: &RemoteObject,
        dest_dir: &Path,
    ) -> Result<PathBuf> {
        let url = self
            .base_url
            .join(&object.key)
            .map_err(|source| Error::ObjectUrl {
                key: object.key.clone(),
                source,
            })?;

        let mut response = self.http.get(url).send().await?.error_for_status()?;
        let extension = file_extension(response.headers()).unwrap_or_default();
        let path = dest_dir.join(object.file_name(&extension));

        let mut file = tokio::fs::File::create(&path).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(path)
    }
}

/// Best-effort file extension from the `content-type` header: everything
/// after the last `/`, dot-prefixed. A missing, unreadable or empty
/// subtype degrades to no extension; this never fails a download.
fn file_extension(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    let subtype = content_type.rsplit('/').next()?;
    if subtype.is_empty() {
        return None;
    }
    Some(format!(".{subtype}"))
}
