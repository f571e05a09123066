//! Global error handling for dirscan
//!
//! This module provides a centralized error type shared by the walker,
//! diagnostics and artifact writer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for dirscan operations
#[derive(Error, Debug)]
pub enum DirScanError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation failure with a description of what was being done
    #[error("{0}")]
    Context(String),

    /// Path not found
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Specialized Result type for dirscan operations
pub type Result<T> = std::result::Result<T, DirScanError>;

/// Creates a DirScanError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirScanError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            DirScanError::Context(format!("{}: {}", context, e))
        })
    }
}

// Allow converting DirScanError to io::Error for io-returning tests and callers
impl From<DirScanError> for io::Error {
    fn from(err: DirScanError) -> Self {
        match err {
            DirScanError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, Config, "expected a positive number, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);
        let err = check_positive(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: expected a positive number, got -1"
        );
    }

    #[test]
    fn test_with_context_wraps_message() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = res.with_context(|| "creating /nope").unwrap_err();
        assert_eq!(err.to_string(), "creating /nope: denied");
    }

    #[test]
    fn test_path_not_found_display() {
        let err = DirScanError::PathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Path not found: /missing/dir");
    }
}
