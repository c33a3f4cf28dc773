//! Asynchronous panic boundary.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tagerr_core::{Thrown, UnhandledException};

use crate::catch::caught;

/// Await `fut`, turning a panic raised while polling it into an
/// [`UnhandledException`].
///
/// The future is treated as unwind safe: on panic it is dropped and never
/// polled again.
pub async fn try_future<F>(fut: F) -> Result<F::Output, UnhandledException>
where
    F: Future,
{
    try_future_with(fut, UnhandledException::new).await
}

/// Await `fut`, turning a panic into the caller's error type with `map`.
pub async fn try_future_with<F, E, M>(fut: F, map: M) -> Result<F::Output, E>
where
    F: Future,
    M: FnOnce(Thrown) -> E,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .map_err(|payload| map(caught(payload)))
}
