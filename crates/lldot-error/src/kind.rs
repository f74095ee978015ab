//! Error kinds for lldot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to tell a malformed graph apart from a bad
/// graph description file or a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Description file errors
    // =========================================================================
    /// Deserialization failed
    DeserializationFailed,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// Graph construction failed
    GraphBuildFailed,

    /// Node not found in graph
    NodeNotFound,

    /// Invariant violation in a caller-supplied graph
    InvariantViolation,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether this kind points at a bug in the graph producer rather than
    /// at bad user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::InvariantViolation)
    }
}
