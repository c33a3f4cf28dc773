//! `Result` adapters for errors that carry no tag.

use std::error::Error;

use tagerr_core::{TaggedError, Thrown, UnhandledException};

/// Fold the error of a `Result` into [`UnhandledException`].
pub trait ResultExt<T, E> {
    /// Wrap any structured error, keeping it as the exception's cause.
    ///
    /// A tagged error wrapped this way loses its tag on the cause. Use
    /// [`ResultExt::or_unhandled_tagged`] to keep it.
    fn or_unhandled(self) -> Result<T, UnhandledException>
    where
        E: Error + Send + Sync + 'static;

    /// Wrap a tagged error, keeping its tag visible on the cause.
    fn or_unhandled_tagged(self) -> Result<T, UnhandledException>
    where
        E: TaggedError;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn or_unhandled(self) -> Result<T, UnhandledException>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|err| UnhandledException::new(Thrown::error(err)))
    }

    fn or_unhandled_tagged(self) -> Result<T, UnhandledException>
    where
        E: TaggedError,
    {
        self.map_err(|err| UnhandledException::new(Thrown::tagged(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("rate limited")]
    struct RateLimited;
    tagerr_core::impl_tagged!(RateLimited);

    fn read_config() -> Result<String, std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing"))
    }

    #[test]
    fn io_error_becomes_unhandled_with_source() {
        let err = read_config().or_unhandled().unwrap_err();
        assert_eq!(err.message(), "Unhandled exception: config.toml missing");
        let io = err.cause().downcast_error::<std::io::Error>().expect("io cause");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("config.toml missing"));
    }

    #[test]
    fn ok_is_untouched() {
        let value: Result<u8, std::num::ParseIntError> = "9".parse();
        assert_eq!(value.or_unhandled().unwrap(), 9);
    }

    #[test]
    fn tagged_cause_keeps_tag() {
        let result: Result<(), RateLimited> = Err(RateLimited);
        let err = result.or_unhandled_tagged().unwrap_err();
        assert!(err.cause().is_tagged_error());
        assert_eq!(err.cause().tag(), Some("RateLimited"));
    }

    #[test]
    fn plain_wrapping_of_tagged_error_loses_tag() {
        let result: Result<(), RateLimited> = Err(RateLimited);
        let err = result.or_unhandled().unwrap_err();
        assert!(err.cause().is_error());
        assert!(!err.cause().is_tagged_error());
    }
}
