//! Generic stream batching.

use async_stream::stream;
use futures::{Stream, StreamExt, pin_mut};

/// Group a stream into ordered windows of at most `size` elements.
///
/// Every window except possibly the last holds exactly `size` elements; the
/// trailing partial window is yielded only if non-empty, so an empty source
/// produces no windows at all. Element order is preserved and element
/// contents are never inspected. Elements are pulled one at a time, so the
/// source is only driven as far as the consumer demands.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn batched<S>(source: S, size: usize) -> impl Stream<Item = Vec<S::Item>>
where
    S: Stream,
{
    assert!(size > 0, "batch size must be positive");

    stream! {
        pin_mut!(source);
        let mut window = Vec::with_capacity(size);
        while let Some(item) = source.next().await {
            window.push(item);
            if window.len() == size {
                yield std::mem::replace(&mut window, Vec::with_capacity(size));
            }
        }
        if !window.is_empty() {
            yield window;
        }
    }
}
