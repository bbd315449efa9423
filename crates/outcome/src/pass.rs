//! Success payload.
//!
//! A [`Pass`] with the default `()` parameter is the plain success marker; a
//! `Pass<T>` additionally owns the value the operation produced.

/// The success case of an [`Outcome`](crate::Outcome).
///
/// The wrapped value is captured once by [`Pass::new`] and can only be read
/// afterwards.
///
/// # Examples
///
/// ```
/// use outcome::Pass;
///
/// let pass = Pass::new(42);
/// assert_eq!(*pass.value(), 42);
/// assert_eq!(pass.into_value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pass<T = ()> {
    value: T,
}

impl<T> Pass<T> {
    /// Wraps `value` as a success.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the carried value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the success into its value.
    ///
    /// This is the explicit stand-in for using a success directly where a
    /// bare `T` is expected. It performs no check.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl Pass {
    /// Plain success with nothing attached.
    #[must_use]
    pub const fn unit() -> Self {
        Self { value: () }
    }
}

impl Default for Pass {
    fn default() -> Self {
        Self::unit()
    }
}
