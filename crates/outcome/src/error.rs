//! Error type for leaving the outcome vocabulary at a boundary.
//!
//! Code that speaks [`Outcome`](crate::Outcome) internally sometimes has to
//! hand a failure to an API expecting `std::error::Error`. [`OutcomeError`]
//! is that bridge, built with `thiserror` like the rest of the workspace's
//! error enums.

use thiserror::Error;

use crate::Fail;

/// A failed operation, converted for use with `?` and `Box<dyn Error>`.
///
/// There is a single kind of failure. The variants only record whether a
/// diagnostic message was attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The operation failed without a message.
    #[error("operation failed")]
    Failed,

    /// The operation failed with a diagnostic message.
    #[error("operation failed: {message}")]
    FailedWithMessage {
        /// Message copied from the originating failure.
        message: String,
    },
}

impl OutcomeError {
    /// The attached message, or the empty string for [`OutcomeError::Failed`].
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Failed => "",
            Self::FailedWithMessage { message } => message,
        }
    }
}

impl<T> From<Fail<T>> for OutcomeError {
    /// Keeps the message and drops the carried value.
    fn from(fail: Fail<T>) -> Self {
        let (_, message) = fail.into_parts();
        if message.is_empty() {
            Self::Failed
        } else {
            Self::FailedWithMessage { message }
        }
    }
}
