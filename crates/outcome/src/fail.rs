//! Failure payload.
//!
//! A [`Fail`] always carries an error message, which is the empty string when
//! none was supplied. `Fail<T>` also carries a value: a failure may still hand
//! back a fallback or partial result, and what that value means is left to the
//! call site.

use std::fmt;

/// The failure case of an [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use outcome::Fail;
///
/// let fail = Fail::new(0, "division by zero");
/// assert_eq!(fail.error_message(), "division by zero");
///
/// let (value, message) = fail.into_parts();
/// assert_eq!(value, 0);
/// assert_eq!(message, "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fail<T = ()> {
    value: T,
    error_message: String,
}

impl<T> Fail<T> {
    /// Builds a failure carrying `value` and `error_message`.
    ///
    /// The message is stored exactly as given.
    #[must_use]
    pub fn new(value: T, error_message: impl Into<String>) -> Self {
        Self {
            value,
            error_message: error_message.into(),
        }
    }

    /// Builds a failure carrying `value` and an empty message.
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self {
            value,
            error_message: String::new(),
        }
    }

    /// Borrows the carried value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Human-readable diagnostic; empty when none was supplied.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Unwraps the failure into its carried value, discarding the message.
    ///
    /// Failure does not erase the value; callers that want the fallback can
    /// take it here.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the failure into `(value, error_message)`.
    #[must_use]
    pub fn into_parts(self) -> (T, String) {
        (self.value, self.error_message)
    }
}

impl Fail {
    /// Plain failure with the given message.
    #[must_use]
    pub fn with_message(error_message: impl Into<String>) -> Self {
        Self::new((), error_message)
    }
}

impl Default for Fail {
    fn default() -> Self {
        Self::with_value(())
    }
}

impl<T> fmt::Display for Fail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message)
    }
}
