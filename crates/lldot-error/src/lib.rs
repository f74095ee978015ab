//! # lldot-error
//!
//! Unified error handling for lldot.
//!
//! - **ErrorKind**: what went wrong (e.g. InvariantViolation, NodeNotFound)
//! - **Error Context**: key/value pairs that help locate the cause
//! - **Error Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use lldot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvariantViolation, "regular edge without key")
//!         .with_operation("render::classify")
//!         .with_context("node", "start"))
//! }
//! ```
//!
//! All lldot errors are deterministic: rendering the same graph again
//! fails the same way, so there is no retry status.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using lldot Error
pub type Result<T> = std::result::Result<T, Error>;
