//! tagerr-boundary: fold panics and foreign errors into the tagged-error model.
//!
//! Code that fails by panicking, or by returning an error type that carries
//! no tag, is adapted here into [`UnhandledException`] so callers only ever
//! see tagged errors:
//!
//! - [`try_catch`] / [`try_catch_with`]: run a closure, catching panics
//! - [`ResultExt`]: map `Err` values into `UnhandledException`
//! - `try_future` / `try_future_with` (feature `async`): catch panics raised
//!   while polling a future
//!
//! # Quick Start
//!
//! ```rust
//! use tagerr_boundary::{try_catch, ResultExt};
//!
//! let caught = try_catch(|| -> u32 { panic!("sensor offline") }).unwrap_err();
//! assert_eq!(caught.message(), "Unhandled exception: sensor offline");
//!
//! let parsed = "12x".parse::<u32>().or_unhandled();
//! assert!(parsed.unwrap_err().cause().is_error());
//! ```

pub mod catch;
pub mod ext;

#[cfg(feature = "async")]
pub mod future;

pub use catch::{try_catch, try_catch_with};
pub use ext::ResultExt;

#[cfg(feature = "async")]
pub use future::{try_future, try_future_with};

pub use tagerr_core::{Thrown, UnhandledException};
