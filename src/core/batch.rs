//! Batch fan-out
//!
//! Runs a per-document operation over a sequence of documents with
//! bounded concurrency. Results come back in input order regardless
//! of completion order. Each document's operation builds all of its
//! own state; nothing is shared across documents, so sequential and
//! concurrent execution produce identical per-document results.
//!
//! Cancellation is cooperative: dropping the returned future abandons
//! in-flight documents whole, so partial per-document state is never
//! observable.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Applies `op` to every document, at most `concurrency` at a time,
/// preserving input order in the output
pub async fn for_each_document<T, F, Fut, R>(documents: Vec<T>, concurrency: usize, op: F) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(documents)
        .map(op)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
