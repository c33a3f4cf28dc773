//! tagerr-core: tagged error variants with exhaustive and partial dispatch.
//!
//! This crate defines:
//! - [`TaggedError`] / [`Tagged`]: errors carrying a constant discriminator
//! - [`impl_tagged!`] / [`tagged_union!`]: declare variants and closed unions
//! - [`Handlers`], [`match_exhaustive`], [`match_partial`]: tag-keyed dispatch
//! - [`Thrown`], [`is_error`], [`is_tagged_error`]: caught values of unknown shape
//! - [`UnhandledException`]: the catch-all variant wrapping a [`Thrown`]
//! - [`Chain`] / [`Trace`]: cause chains and their diagnostic rendering
//!
//! # Quick Start
//!
//! ```rust
//! use tagerr_core::{impl_tagged, match_exhaustive, tagged_union, Handlers};
//!
//! #[derive(Debug)]
//! struct NotFoundError { id: String }
//! impl std::fmt::Display for NotFoundError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "Not found: {}", self.id)
//!     }
//! }
//! impl std::error::Error for NotFoundError {}
//! impl_tagged!(NotFoundError);
//!
//! #[derive(Debug)]
//! struct ValidationError { field: String }
//! impl std::fmt::Display for ValidationError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "Invalid field: {}", self.field)
//!     }
//! }
//! impl std::error::Error for ValidationError {}
//! impl_tagged!(ValidationError);
//!
//! tagged_union! {
//!     #[derive(Debug)]
//!     enum AppError {
//!         NotFound(NotFoundError),
//!         Validation(ValidationError),
//!     }
//! }
//!
//! let err = AppError::from(NotFoundError { id: "x1".into() });
//! let out = match_exhaustive(
//!     &err,
//!     Handlers::new()
//!         .on(|e: &NotFoundError| format!("Missing:{}", e.id))
//!         .on(|e: &ValidationError| format!("Invalid:{}", e.field)),
//! );
//! assert_eq!(out, "Missing:x1");
//! ```

pub mod chain;
pub mod handlers;
pub mod tagged;
pub mod thrown;
pub mod unhandled;

pub use chain::{root_cause, trace, Chain, Trace};
pub use handlers::{match_exhaustive, match_partial, Handlers};
pub use tagged::{AsDynError, Tagged, TaggedError, TaggedUnion, Variant};
pub use thrown::{is_error, is_tagged_error, PanicPayload, Thrown};
pub use unhandled::UnhandledException;
