//! Synchronous panic boundary.

use std::panic::{self, UnwindSafe};

use tagerr_core::{Thrown, UnhandledException};

/// Run `f`, turning a panic into an [`UnhandledException`].
///
/// The panic hook still runs, so the usual panic message is printed. Wrap
/// the closure in `AssertUnwindSafe` when it captures `&mut` state.
pub fn try_catch<T, F>(f: F) -> Result<T, UnhandledException>
where
    F: FnOnce() -> T + UnwindSafe,
{
    try_catch_with(f, UnhandledException::new)
}

/// Run `f`, turning a panic into the caller's error type with `map`.
pub fn try_catch_with<T, E, F, M>(f: F, map: M) -> Result<T, E>
where
    F: FnOnce() -> T + UnwindSafe,
    M: FnOnce(Thrown) -> E,
{
    panic::catch_unwind(f).map_err(|payload| map(caught(payload)))
}

pub(crate) fn caught(payload: Box<dyn std::any::Any + Send>) -> Thrown {
    let thrown = Thrown::from_panic(payload);
    tracing::warn!(cause = %thrown, "Caught panic at failure boundary");
    thrown
}
