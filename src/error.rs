//! Error types for container and cursor operations.
//!
//! Every failure here is a precondition violation reported synchronously to
//! the caller. Nothing is retried or silently recovered.

use thiserror::Error;

/// Errors reported by [`Trifold`](crate::container::Trifold) and its cursors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A remove was asked for a value the container does not hold.
    #[error("value {0} not found in container")]
    NotFound(i64),

    /// A cursor was dereferenced or advanced at or past the end of its view.
    ///
    /// `len` is the view length at the time of the access; a shrink can
    /// leave `position` well past it.
    #[error("cursor out of range: position {position}, view length {len}")]
    OutOfRange { position: usize, len: usize },

    /// Two cursors bound to different containers were compared.
    #[error("cursors are bound to different containers")]
    MismatchedContainers,
}
