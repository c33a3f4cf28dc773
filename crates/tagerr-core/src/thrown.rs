//! `Thrown`: a caught value of unknown shape, plus the two type guards.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::tagged::{AsDynError, TaggedError};

// ─── PanicPayload ─────────────────────────────────────────────────────────────

/// The payload of a caught panic.
///
/// Keeps the original `Box<dyn Any + Send>` so it can be handed back to
/// `std::panic::resume_unwind`.
pub struct PanicPayload {
    message: Option<String>,
    payload: Mutex<Option<Box<dyn Any + Send>>>,
}

impl PanicPayload {
    /// Wrap a payload as returned by `std::panic::catch_unwind`.
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());
        Self {
            message,
            payload: Mutex::new(Some(payload)),
        }
    }

    /// The panic message, when the payload was a string.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Take the original payload. Returns `None` once it has been taken.
    pub fn take(&self) -> Option<Box<dyn Any + Send>> {
        self.payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("Box<dyn Any>"))
    }
}

impl fmt::Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicPayload")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ─── Thrown ───────────────────────────────────────────────────────────────────

/// Anything a failure boundary can catch.
///
/// Values are stored as given; the only derived data is the string rendering
/// taken when a plain value is wrapped.
#[derive(Clone)]
pub enum Thrown {
    /// A tagged error of this model.
    Tagged(Arc<dyn TaggedError>),
    /// A structured error without a tag.
    Error(Arc<dyn Error + Send + Sync + 'static>),
    /// A caught panic.
    Panic(Arc<PanicPayload>),
    /// Any other value.
    Value {
        value: Arc<dyn Any + Send + Sync>,
        rendered: String,
    },
    /// No value at all.
    Absent,
}

impl Thrown {
    /// Wrap a tagged error.
    pub fn tagged<E: TaggedError>(err: E) -> Self {
        Self::Tagged(Arc::new(err))
    }

    /// Wrap a structured error without a tag.
    ///
    /// The tag is not recovered: a tagged error wrapped here reports
    /// `is_tagged_error() == false`. Use [`Thrown::tagged`] to keep it.
    pub fn error<E: Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Error(Arc::new(err))
    }

    /// Wrap a plain value, rendered with `Display`.
    pub fn value<V: Any + fmt::Display + Send + Sync>(value: V) -> Self {
        let rendered = value.to_string();
        Self::Value {
            value: Arc::new(value),
            rendered,
        }
    }

    /// Wrap a plain value, rendered with `Debug`.
    pub fn debug_value<V: Any + fmt::Debug + Send + Sync>(value: V) -> Self {
        let rendered = format!("{value:?}");
        Self::Value {
            value: Arc::new(value),
            rendered,
        }
    }

    /// The null analogue, rendered as `null`.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Wrap a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::Panic(Arc::new(PanicPayload::new(payload)))
    }

    /// `true` for structured errors, tagged or not.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Tagged(_) | Self::Error(_))
    }

    /// `true` only for tagged errors.
    pub fn is_tagged_error(&self) -> bool {
        matches!(self, Self::Tagged(_))
    }

    /// The tag of a wrapped tagged error.
    pub fn tag(&self) -> Option<&'static str> {
        self.as_tagged().map(|e| e.tag())
    }

    /// The wrapped tagged error, if any.
    pub fn as_tagged(&self) -> Option<&dyn TaggedError> {
        match self {
            Self::Tagged(e) => Some(&**e),
            _ => None,
        }
    }

    /// The wrapped error as a plain `dyn Error`, tagged or not.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Tagged(e) => Some((**e).as_dyn_error()),
            Self::Error(e) => Some(&**e),
            _ => None,
        }
    }

    /// Downcast a wrapped plain value.
    pub fn downcast_value<V: Any>(&self) -> Option<&V> {
        match self {
            Self::Value { value, .. } => (**value).downcast_ref::<V>(),
            _ => None,
        }
    }

    /// Downcast a wrapped error, tagged or not.
    pub fn downcast_error<E: Error + 'static>(&self) -> Option<&E> {
        self.as_error()?.downcast_ref::<E>()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged(e) => fmt::Display::fmt(e, f),
            Self::Error(e) => fmt::Display::fmt(e, f),
            Self::Panic(p) => fmt::Display::fmt(p, f),
            Self::Value { rendered, .. } => f.write_str(rendered),
            Self::Absent => f.write_str("null"),
        }
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged(e) => f.debug_tuple("Tagged").field(e).finish(),
            Self::Error(e) => f.debug_tuple("Error").field(e).finish(),
            Self::Panic(p) => f.debug_tuple("Panic").field(p).finish(),
            Self::Value { rendered, .. } => f
                .debug_struct("Value")
                .field("rendered", rendered)
                .finish_non_exhaustive(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

impl From<String> for Thrown {
    fn from(s: String) -> Self {
        Self::value(s)
    }
}

impl From<&'static str> for Thrown {
    fn from(s: &'static str) -> Self {
        Self::value(s)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Thrown {
    fn from(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Error(Arc::from(err))
    }
}

impl From<Arc<dyn TaggedError>> for Thrown {
    fn from(err: Arc<dyn TaggedError>) -> Self {
        Self::Tagged(err)
    }
}

// ─── Type guards ──────────────────────────────────────────────────────────────

/// `true` when `value` is a structured error (tagged or not).
pub fn is_error(value: &Thrown) -> bool {
    value.is_error()
}

/// `true` when `value` is a tagged error of this model.
pub fn is_tagged_error(value: &Thrown) -> bool {
    value.is_tagged_error()
}
