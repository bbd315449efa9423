//! The closed pass/fail sum type and its factory surface.

use tracing::{debug, warn};

use crate::{Fail, Pass};

/// Outcome of an operation: exactly one of [`Pass`] or [`Fail`].
///
/// With the default `T = ()` neither case carries a value, so `Outcome` on
/// its own is the plain "succeeded" / "failed with a message" shape. With a
/// concrete `T` both cases carry one.
///
/// Instances are immutable once built. Matching on the enum is exhaustive, so
/// consumers are made to handle both cases.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// fn divide(a: i32, b: i32) -> Outcome<i32> {
///     if b == 0 {
///         return Outcome::fail_with_value_and_message(0, "division by zero");
///     }
///     Outcome::pass_with_value(a / b)
/// }
///
/// match divide(1, 0) {
///     Outcome::Pass(pass) => unreachable!("got {}", pass.value()),
///     Outcome::Fail(fail) => assert_eq!(fail.error_message(), "division by zero"),
/// }
/// assert_eq!(divide(8, 2).into_value(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T = ()> {
    /// The operation succeeded.
    Pass(Pass<T>),
    /// The operation failed.
    Fail(Fail<T>),
}

impl Outcome {
    /// Plain success.
    #[must_use]
    pub const fn pass() -> Self {
        Self::Pass(Pass::unit())
    }

    /// Plain failure with an empty message.
    #[must_use]
    pub fn fail() -> Self {
        Self::Fail(Fail::default())
    }

    /// Plain failure with `error_message`, stored verbatim.
    #[must_use]
    pub fn fail_with_message(error_message: impl Into<String>) -> Self {
        Self::Fail(Fail::with_message(error_message))
    }
}

impl<T> Outcome<T> {
    /// Success carrying `value`.
    #[must_use]
    pub const fn pass_with_value(value: T) -> Self {
        Self::Pass(Pass::new(value))
    }

    /// Failure carrying `value` and an empty message.
    #[must_use]
    pub const fn fail_with_value(value: T) -> Self {
        Self::Fail(Fail::with_value(value))
    }

    /// Failure carrying both `value` and `error_message`.
    #[must_use]
    pub fn fail_with_value_and_message(value: T, error_message: impl Into<String>) -> Self {
        Self::Fail(Fail::new(value, error_message))
    }

    /// Returns `true` for the success case.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    /// Returns `true` for the failure case.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Borrows the success payload, if this is one.
    #[must_use]
    pub const fn as_pass(&self) -> Option<&Pass<T>> {
        match self {
            Self::Pass(pass) => Some(pass),
            Self::Fail(_) => None,
        }
    }

    /// Borrows the failure payload, if this is one.
    #[must_use]
    pub const fn as_fail(&self) -> Option<&Fail<T>> {
        match self {
            Self::Pass(_) => None,
            Self::Fail(fail) => Some(fail),
        }
    }

    /// The failure's message; `None` for a success.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.as_fail().map(Fail::error_message)
    }

    /// Borrows the carried value regardless of classification.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Pass(pass) => pass.value(),
            Self::Fail(fail) => fail.value(),
        }
    }

    /// Unwraps into the carried value regardless of classification.
    ///
    /// Both cases hold a `T`, so this never panics. It does discard the
    /// pass/fail distinction; classify first when that matters.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Pass(pass) => pass.into_value(),
            Self::Fail(fail) => fail.into_value(),
        }
    }

    /// Converts into a std `Result`, keeping the whole failure as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`Fail`] payload unchanged when this outcome is a failure.
    pub fn into_result(self) -> Result<T, Fail<T>> {
        match self {
            Self::Pass(pass) => Ok(pass.into_value()),
            Self::Fail(fail) => Err(fail),
        }
    }

    /// Records this outcome as a `tracing` event for `operation`.
    ///
    /// Successes are logged at `DEBUG` and failures at `WARN` with the message
    /// as the `error_message` field. Nothing is logged unless this is called.
    pub fn trace(&self, operation: &str) {
        match self {
            Self::Pass(_) => debug!(operation, "operation passed"),
            Self::Fail(fail) => warn!(
                operation,
                error_message = fail.error_message(),
                "operation failed"
            ),
        }
    }
}

impl<T> From<Pass<T>> for Outcome<T> {
    fn from(pass: Pass<T>) -> Self {
        Self::Pass(pass)
    }
}

impl<T> From<Fail<T>> for Outcome<T> {
    fn from(fail: Fail<T>) -> Self {
        Self::Fail(fail)
    }
}

#[cfg(test)]
mod tests {
    //! Covers construction, classification, and unwrap of each case.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain_pass(Outcome::pass(), true)]
    #[case::plain_fail(Outcome::fail(), false)]
    #[case::fail_with_message(Outcome::fail_with_message("not found"), false)]
    fn plain_outcomes_classify_exclusively(#[case] outcome: Outcome, #[case] passed: bool) {
        assert_eq!(outcome.is_pass(), passed);
        assert_eq!(outcome.is_fail(), !passed);
    }

    #[rstest]
    #[case::pass_with_value(Outcome::pass_with_value(42), true)]
    #[case::fail_with_value(Outcome::fail_with_value(99), false)]
    #[case::fail_with_both(Outcome::fail_with_value_and_message(0, "division by zero"), false)]
    fn typed_outcomes_classify_exclusively(#[case] outcome: Outcome<i32>, #[case] passed: bool) {
        assert_eq!(outcome.is_pass(), passed);
        assert_eq!(outcome.is_fail(), !passed);
        assert_eq!(outcome.as_pass().is_some(), passed);
        assert_eq!(outcome.as_fail().is_some(), !passed);
    }

    #[test]
    fn pass_with_value_unwraps_to_value() {
        let outcome = Outcome::pass_with_value(42);
        assert_eq!(*outcome.value(), 42);
        assert_eq!(outcome.into_value(), 42);
    }

    #[test]
    fn fail_with_value_still_unwraps_to_value() {
        let outcome = Outcome::fail_with_value(99);
        assert_eq!(outcome.error_message(), Some(""));
        assert_eq!(outcome.into_value(), 99);
    }

    #[test]
    fn plain_fail_message_is_empty_not_absent() {
        assert_eq!(Outcome::fail().error_message(), Some(""));
    }

    #[test]
    fn pass_has_no_error_message() {
        assert_eq!(Outcome::pass().error_message(), None);
        assert_eq!(Outcome::pass_with_value("x").error_message(), None);
    }

    #[test]
    fn identical_inputs_are_equivalent() {
        assert_eq!(
            Outcome::fail_with_value_and_message(1, "m"),
            Outcome::fail_with_value_and_message(1, "m")
        );
        assert_ne!(Outcome::pass_with_value(1), Outcome::fail_with_value(1));
    }

    #[test]
    fn payloads_lift_into_outcome() {
        assert_eq!(Outcome::from(Pass::new(5)), Outcome::pass_with_value(5));
        assert_eq!(
            Outcome::from(Fail::new(5, "bad")),
            Outcome::fail_with_value_and_message(5, "bad")
        );
    }

    #[test]
    fn into_result_keeps_the_failure_intact() {
        assert_eq!(Outcome::pass_with_value(3).into_result(), Ok(3));
        assert_eq!(
            Outcome::fail_with_value_and_message(0, "division by zero").into_result(),
            Err(Fail::new(0, "division by zero"))
        );
    }

    #[test]
    fn trace_leaves_the_outcome_untouched() {
        let outcome = Outcome::fail_with_message("not found");
        outcome.trace("lookup");
        assert_eq!(outcome.error_message(), Some("not found"));
    }
}
