//! `UnhandledException`: the catch-all variant for values caught at a boundary.

use std::error::Error;
use std::sync::Arc;

use crate::tagged::TaggedError;
use crate::thrown::Thrown;

const MESSAGE_PREFIX: &str = "Unhandled exception: ";

/// The structured part of a cause, exposed as `Error::source()`.
#[derive(Debug, Clone, thiserror::Error)]
enum ErrorCause {
    #[error(transparent)]
    Tagged(Arc<dyn TaggedError>),
    #[error(transparent)]
    Plain(Arc<dyn Error + Send + Sync>),
}

impl ErrorCause {
    fn of(cause: &Thrown) -> Option<Self> {
        match cause {
            Thrown::Tagged(e) => Some(Self::Tagged(Arc::clone(e))),
            Thrown::Error(e) => Some(Self::Plain(Arc::clone(e))),
            _ => None,
        }
    }
}

/// Wraps anything thrown that is not a recognised domain variant.
///
/// The message is derived from the cause once, at construction. The cause
/// itself is kept unchanged; when it is an error it is also the `source()`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct UnhandledException {
    message: String,
    #[source]
    source: Option<ErrorCause>,
    cause: Thrown,
}

impl UnhandledException {
    /// Wrap `cause`, rendering it into the message.
    pub fn new(cause: impl Into<Thrown>) -> Self {
        let cause = cause.into();
        Self {
            message: format!("{MESSAGE_PREFIX}{cause}"),
            source: ErrorCause::of(&cause),
            cause,
        }
    }

    /// `"Unhandled exception: "` followed by the rendered cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original thrown value.
    pub fn cause(&self) -> &Thrown {
        &self.cause
    }

    /// Unwrap into the original thrown value.
    pub fn into_cause(self) -> Thrown {
        self.cause
    }
}

impl From<Thrown> for UnhandledException {
    fn from(cause: Thrown) -> Self {
        Self::new(cause)
    }
}

crate::impl_tagged!(UnhandledException);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagged::{Tagged, TaggedError};
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[derive(Debug, thiserror::Error)]
    #[error("socket closed")]
    struct SocketClosed;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct RequestFailed(#[source] SocketClosed);

    #[test]
    fn tag_is_fixed() {
        assert_eq!(UnhandledException::TAG, "UnhandledException");
        assert_eq!(UnhandledException::new("x").tag(), "UnhandledException");
    }

    #[test]
    fn error_cause_supplies_message_and_identity() {
        let original: Arc<dyn Error + Send + Sync> = Arc::new(Boom);
        let e = UnhandledException::new(Thrown::Error(original.clone()));
        assert_eq!(e.message(), "Unhandled exception: boom");
        assert_eq!(e.to_string(), e.message());
        match e.cause() {
            Thrown::Error(stored) => assert!(Arc::ptr_eq(stored, &original)),
            other => panic!("unexpected cause {other:?}"),
        }
    }

    #[test]
    fn non_error_cause_is_rendered_not_coerced() {
        let e = UnhandledException::new(Thrown::value(42));
        assert_eq!(e.message(), "Unhandled exception: 42");
        assert_eq!(e.cause().downcast_value::<i32>(), Some(&42));
        assert!(e.source().is_none());
    }

    #[test]
    fn absent_cause_renders_null() {
        assert_eq!(UnhandledException::new(Thrown::absent()).message(), "Unhandled exception: null");
    }

    #[test]
    fn trace_includes_whole_cause_chain() {
        let e = UnhandledException::new(Thrown::error(RequestFailed(SocketClosed)));
        assert_eq!(
            e.trace().to_string(),
            "Unhandled exception: request failed\nCaused by: request failed\nCaused by: socket closed"
        );
    }

    #[test]
    fn tagged_cause_is_the_source() {
        let e = UnhandledException::new(Thrown::tagged(UnhandledException::new("inner")));
        assert_eq!(
            e.source().map(|s| s.to_string()).as_deref(),
            Some("Unhandled exception: inner")
        );
        assert_eq!(e.trace().depth(), 2);
    }

    #[test]
    fn into_cause_returns_the_stored_value() {
        let cause = UnhandledException::new("disk full").into_cause();
        assert_eq!(cause.downcast_value::<&str>(), Some(&"disk full"));
    }
}
