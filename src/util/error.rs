// markscan - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all markscan operations.
///
/// Both variants are unrecoverable at the point of occurrence: they
/// propagate to `main`, which reports them and exits with failure.
#[derive(Debug)]
pub enum ScanError {
    /// I/O error with path context (missing file, permission denied, ...).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Target file content is not valid UTF-8.
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Encoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encoding { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for markscan results.
pub type Result<T> = std::result::Result<T, ScanError>;
