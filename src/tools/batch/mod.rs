//! Batch Tools


use futures_util::stream::{self, StreamExt};

/// Run async operations with bounded concurrency, keeping input order.
///
/// A concurrency of 1 (or 0) runs each operation to completion before the
/// next one starts.
pub async fn batch_ordered<I, F, Fut, R>(items: I, concurrency: usize, operation: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: std::future::Future<Output = R>,
{
    stream::iter(items)
        .map(operation)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
