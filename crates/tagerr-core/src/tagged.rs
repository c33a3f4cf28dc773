//! The tagged-error abstraction: every variant carries a constant discriminator.
//!
//! A variant is any `std::error::Error` whose [`TaggedError::tag`] never
//! changes. Its `Display` rendering is the message and `Error::source()` is
//! the cause.

use std::error::Error;

use crate::chain::Trace;

// ─── Upcasting ────────────────────────────────────────────────────────────────

/// View any tagged error as a plain `dyn Error`.
///
/// Implemented for every sized error type; `dyn TaggedError` gets it through
/// the supertrait vtable.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + Send + Sync + 'static);
}

impl<E: Error + Send + Sync + 'static> AsDynError for E {
    fn as_dyn_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }
}

// ─── TaggedError ──────────────────────────────────────────────────────────────

/// An error carrying a variant-unique discriminator.
///
/// Object safe: `dyn TaggedError` is an open-ended union that can still be
/// matched with [`crate::match_partial`].
pub trait TaggedError: Error + AsDynError + Send + Sync + 'static {
    /// The discriminator of this value's variant (e.g. `"NotFoundError"`).
    fn tag(&self) -> &'static str;

    /// The message followed by every cause, outer error first.
    fn trace(&self) -> Trace<'_> {
        Trace::new(self.as_dyn_error())
    }

    /// The concrete variant value behind this error.
    ///
    /// A variant returns itself; a union returns the member it holds, so a
    /// union behind `dyn TaggedError` still narrows to the member's type.
    fn as_variant(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_dyn_error()
    }
}

/// A concrete variant whose tag is a compile-time constant.
pub trait Tagged: TaggedError + Sized {
    const TAG: &'static str;
}

/// A declared set of variants matched together.
pub trait TaggedUnion: TaggedError {
    /// Every tag a value of this union can report, in declaration order.
    const TAGS: &'static [&'static str];

    /// Tags that occur more than once in [`TaggedUnion::TAGS`].
    ///
    /// Must be empty for handler tables over this union to be unambiguous.
    fn duplicate_tags() -> Vec<&'static str>
    where
        Self: Sized,
    {
        let mut dups = Vec::new();
        for (i, tag) in Self::TAGS.iter().enumerate() {
            if Self::TAGS[..i].contains(tag) && !dups.contains(tag) {
                dups.push(*tag);
            }
        }
        dups
    }
}

/// Membership of the variant `Self` in the union `U`.
pub trait Variant<U: ?Sized>: Tagged {
    /// Returns the variant when `union` holds one, `None` otherwise.
    fn narrow(union: &U) -> Option<&Self>;
}

impl<V: Tagged> Variant<dyn TaggedError> for V {
    fn narrow(union: &dyn TaggedError) -> Option<&Self> {
        union.as_variant().downcast_ref::<V>()
    }
}

// ─── Declaration macros ───────────────────────────────────────────────────────

/// Declare a concrete tagged variant.
///
/// The type must already implement `std::error::Error` (usually through
/// `thiserror`). The tag defaults to the type name.
///
/// ```rust
/// use tagerr_core::{impl_tagged, Tagged, TaggedError};
///
/// #[derive(Debug)]
/// struct NotFoundError { id: String }
///
/// impl std::fmt::Display for NotFoundError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Not found: {}", self.id)
///     }
/// }
/// impl std::error::Error for NotFoundError {}
///
/// impl_tagged!(NotFoundError);
///
/// assert_eq!(NotFoundError::TAG, "NotFoundError");
/// assert_eq!(NotFoundError { id: "x1".into() }.tag(), "NotFoundError");
/// ```
#[macro_export]
macro_rules! impl_tagged {
    ($ty:ty => $tag:expr) => {
        impl $crate::TaggedError for $ty {
            fn tag(&self) -> &'static str {
                <Self as $crate::Tagged>::TAG
            }
        }

        impl $crate::Tagged for $ty {
            const TAG: &'static str = $tag;
        }

        impl $crate::TaggedUnion for $ty {
            const TAGS: &'static [&'static str] = &[<$ty as $crate::Tagged>::TAG];
        }

        impl $crate::Variant<$ty> for $ty {
            fn narrow(union: &$ty) -> ::std::option::Option<&Self> {
                ::std::option::Option::Some(union)
            }
        }
    };
    ($ty:ty) => {
        $crate::impl_tagged!($ty => stringify!($ty));
    };
}

/// Declare a closed union of tagged variants as an enum.
///
/// `Display` and `Error::source()` delegate to the wrapped variant, the tag
/// is the variant's tag, and every member converts into the union with
/// `From`. A native `match` on the enum is checked for exhaustiveness by the
/// compiler; [`crate::match_exhaustive`] is the table-driven equivalent.
///
/// The attributes must include `#[derive(Debug)]`.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($case:ident($member:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($case($member)),+
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$case(inner) => ::std::fmt::Display::fmt(inner, f)),+
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    $(Self::$case(inner) => ::std::error::Error::source(inner)),+
                }
            }
        }

        impl $crate::TaggedError for $name {
            fn tag(&self) -> &'static str {
                match self {
                    $(Self::$case(inner) => $crate::TaggedError::tag(inner)),+
                }
            }

            fn as_variant(&self) -> &(dyn ::std::error::Error + ::std::marker::Send + ::std::marker::Sync + 'static) {
                match self {
                    $(Self::$case(inner) => $crate::TaggedError::as_variant(inner)),+
                }
            }
        }

        impl $crate::TaggedUnion for $name {
            const TAGS: &'static [&'static str] = &[$(<$member as $crate::Tagged>::TAG),+];
        }

        $(
            impl $crate::Variant<$name> for $member {
                fn narrow(union: &$name) -> ::std::option::Option<&Self> {
                    match union {
                        $name::$case(inner) => ::std::option::Option::Some(inner),
                        #[allow(unreachable_patterns)]
                        _ => ::std::option::Option::None,
                    }
                }
            }

            impl ::std::convert::From<$member> for $name {
                fn from(inner: $member) -> Self {
                    Self::$case(inner)
                }
            }
        )+
    };
}

// ─── Tests ────────────────────────────────────────────────────────────────────
