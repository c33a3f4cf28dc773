//! Handler tables keyed by tag, and the two dispatch operations over them.
//!
//! Dispatch priority:
//! 1. Handler registered for `error.tag()` that accepts the narrowed variant
//! 2. `match_partial` only: the `otherwise` fallback
//! 3. `match_exhaustive` only: panic (the table and the union have drifted)

use std::collections::HashMap;
use std::fmt;

use crate::tagged::{TaggedError, TaggedUnion, Variant};

type Handler<'h, U, T> = Box<dyn FnOnce(&U) -> Option<T> + 'h>;

/// A per-call table mapping tags to handlers of the narrowed variant.
///
/// ```rust
/// use tagerr_core::{match_partial, Handlers, Thrown, UnhandledException};
///
/// let err = UnhandledException::new(Thrown::value(7));
/// let out = match_partial(
///     &err,
///     Handlers::new().on(|e: &UnhandledException| format!("caught {}", e.cause())),
///     |e| format!("other: {e}"),
/// );
/// assert_eq!(out, "caught 7");
/// ```
pub struct Handlers<'h, U: ?Sized, T> {
    table: HashMap<&'static str, Handler<'h, U, T>>,
}

impl<'h, U: TaggedError + ?Sized, T> Handlers<'h, U, T> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register the handler for variant `V`, replacing any earlier one.
    pub fn on<V, F>(mut self, handler: F) -> Self
    where
        V: Variant<U>,
        F: FnOnce(&V) -> T + 'h,
        T: 'h,
    {
        let previous = self.table.insert(
            V::TAG,
            Box::new(move |error: &U| <V as Variant<U>>::narrow(error).map(handler)),
        );
        if previous.is_some() {
            tracing::debug!(tag = V::TAG, "replaced existing error handler");
        }
        self
    }

    /// Returns `true` if a handler is registered for `tag`.
    pub fn handles(&self, tag: &str) -> bool {
        self.table.contains_key(tag)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Tags declared by the union that have no handler, in declaration order.
    pub fn missing_tags(&self) -> Vec<&'static str>
    where
        U: TaggedUnion,
    {
        U::TAGS
            .iter()
            .copied()
            .filter(|tag| !self.handles(tag))
            .collect()
    }

    fn take(&mut self, tag: &str) -> Option<Handler<'h, U, T>> {
        self.table.remove(tag)
    }
}

impl<'h, U: TaggedError + ?Sized, T> Default for Handlers<'h, U, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: ?Sized, T> fmt::Debug for Handlers<'_, U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.table.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("Handlers").field("tags", &tags).finish()
    }
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────

/// Invoke the handler for `error`'s tag.
///
/// `handlers` must cover every variant `error` can be. When it does not,
/// the caller has a bug and this panics at the call site; prefer a native
/// `match` on a [`tagged_union!`](crate::tagged_union) enum, which the
/// compiler checks for exhaustiveness.
///
/// # Panics
///
/// If no handler is registered for `error.tag()`, or the registered handler's
/// variant cannot be narrowed from `error`.
#[track_caller]
pub fn match_exhaustive<U, T>(error: &U, mut handlers: Handlers<'_, U, T>) -> T
where
    U: TaggedError + ?Sized,
{
    let tag = error.tag();
    let Some(handler) = handlers.take(tag) else {
        tracing::error!(tag, registered = ?handlers, "no handler for error tag");
        panic!("No handler for error tag: {tag}");
    };
    match handler(error) {
        Some(out) => out,
        None => {
            tracing::error!(tag, "handler could not narrow error to its variant");
            panic!("Handler for error tag {tag} does not accept this value");
        }
    }
}

/// Invoke the handler for `error`'s tag, or `otherwise` when there is none.
///
/// `otherwise` receives the original error and runs at most once.
pub fn match_partial<U, T, F>(error: &U, mut handlers: Handlers<'_, U, T>, otherwise: F) -> T
where
    U: TaggedError + ?Sized,
    F: FnOnce(&U) -> T,
{
    let tag = error.tag();
    if let Some(out) = handlers.take(tag).and_then(|handler| handler(error)) {
        return out;
    }
    tracing::trace!(tag, "no handler for error tag, using fallback");
    otherwise(error)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
