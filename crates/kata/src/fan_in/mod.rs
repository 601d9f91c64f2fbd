//! Channel fan-in over Tokio tasks.
//!
//! [`source`] turns a finite sequence into a pre-filled, already-closed
//! channel. [`merge`] drains any number of such channels into a single output
//! channel, closing it once every input is exhausted.
//!
//! ## Model
//!
//! - One drain task per source forwards values into the merged channel.
//!   Values from one source keep their relative order; across sources the
//!   interleaving is up to the scheduler.
//! - The merged channel is a one-slot hand-off, so a drain task parks until a
//!   reader takes the previous value.
//! - A coordinator task joins every drain task and only then releases the last
//!   sender, which is what closes the merged channel. Readers see
//!   end-of-stream only after every drain task has finished.
//!
//! A source whose sender is never dropped keeps [`merge`] open forever. Use
//! [`merge_with_cancel`] when sources are not known to be finite.

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests;

/// A finite, pre-filled input channel.
pub type Source<T> = mpsc::Receiver<T>;

/// The output of a merge. Yields `None` once every source has been drained.
pub type Merged<T> = mpsc::Receiver<T>;

/// Capacity of the merged channel: a single-value hand-off between drain tasks
/// and the reader.
pub const HANDOFF_CAPACITY: usize = 1;

/// Builds a channel pre-loaded with `values`, in order, and closed for writes.
///
/// The channel's capacity equals the number of values (a bounded channel
/// needs at least one slot, so an empty input still allocates one). With no
/// values the returned receiver yields `None` straight away.
///
/// # Example
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut rx = kata::fan_in::source([1, 2, 3]);
/// assert_eq!(rx.recv().await, Some(1));
/// assert_eq!(rx.recv().await, Some(2));
/// assert_eq!(rx.recv().await, Some(3));
/// assert_eq!(rx.recv().await, None);
/// # });
/// ```
pub fn source<T, I>(values: I) -> Source<T>
where
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    let (tx, rx) = mpsc::channel(values.len().max(1));

    for value in values {
        // Capacity covers every value and `rx` is still alive.
        let sent = tx.try_send(value);
        debug_assert!(sent.is_ok(), "source channel rejected a value");
    }

    rx
}

/// Merges every source into a single channel.
///
/// Returns immediately; the forwarding runs on spawned Tokio tasks. The
/// returned channel closes once every source has been drained. With no
/// sources it closes without yielding anything.
///
/// If the returned receiver is dropped, drain tasks stop, whether they are
/// waiting on a source or on a forward, and the sources are released.
///
/// # Panics
///
/// Panics if called outside of a Tokio runtime.
pub fn merge<T, I>(sources: I) -> Merged<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Source<T>>,
{
    merge_with_cancel(sources, CancellationToken::new())
}

/// Like [`merge`], but stops early once `token` is cancelled.
///
/// After cancellation every drain task exits at its next suspension point and
/// the merged channel closes, possibly before all values were forwarded. This
/// bounds the merge even when some source is never closed.
///
/// # Panics
///
/// Panics if called outside of a Tokio runtime.
pub fn merge_with_cancel<T, I>(sources: I, token: CancellationToken) -> Merged<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Source<T>>,
{
    let (merged_tx, merged_rx) = mpsc::channel(HANDOFF_CAPACITY);

    let drains: Vec<_> = sources
        .into_iter()
        .enumerate()
        .map(|(source_id, source)| {
            tokio::spawn(drain(source_id, source, merged_tx.clone(), token.clone()))
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Merging {} sources", drains.len());

    tokio::spawn(async move {
        for result in join_all(drains).await {
            if let Err(_e) = result {
                #[cfg(feature = "tracing")]
                tracing::error!("Drain task failed: {_e}");
            }
        }

        // Every drain task has dropped its sender; releasing this one closes
        // the merged channel.
        drop(merged_tx);

        #[cfg(feature = "tracing")]
        tracing::trace!("Merged channel closed");
    });

    merged_rx
}

/// [`merge`], exposed as a [`Stream`](futures::Stream).
///
/// # Panics
///
/// Panics if called outside of a Tokio runtime.
pub fn merge_stream<T, I>(sources: I) -> ReceiverStream<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Source<T>>,
{
    ReceiverStream::new(merge(sources))
}

/// Forwards every value of `source` into `merged` until the source closes,
/// the reader goes away, or `token` is cancelled.
///
/// The reader is watched while waiting on the source too, so an idle open
/// source does not pin the task after the reader is gone.
async fn drain<T>(
    _source_id: usize,
    mut source: Source<T>,
    merged: mpsc::Sender<T>,
    token: CancellationToken,
) {
    let mut _forwarded = 0_usize;

    loop {
        let value = tokio::select! {
            biased;
            () = token.cancelled() => break,
            () = merged.closed() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Source {_source_id}: merged reader dropped while idle");
                break;
            }
            value = source.recv() => match value {
                Some(value) => value,
                None => break,
            },
        };

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            sent = merged.send(value) => {
                if sent.is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Source {_source_id}: merged reader dropped");
                    break;
                }
            }
        }

        _forwarded += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Source {_source_id} drained after {_forwarded} values");
}
