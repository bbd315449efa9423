//! A closed pass/fail outcome type for expected failure paths.
//!
//! Operations that can fail in ordinary ways return an [`Outcome`] instead of
//! panicking or signalling through a sentinel. An outcome is exactly one of:
//!
//! - [`Pass`]: the operation succeeded, optionally with a value
//! - [`Fail`]: the operation failed with an error message (possibly empty),
//!   optionally with a value
//!
//! The untyped forms use the default `()` parameter, so `Outcome`, `Pass` and
//! `Fail` name the plain markers while `Outcome<T>`, `Pass<T>` and `Fail<T>`
//! carry a `T`. A failing operation may still hand back a fallback value
//! through `Fail<T>`.
//!
//! # Example
//!
//! ```
//! use outcome::Outcome;
//!
//! let found = Outcome::pass_with_value(42);
//! assert!(found.is_pass());
//! assert_eq!(found.into_value(), 42);
//!
//! let missing = Outcome::fail_with_message("not found");
//! assert!(missing.is_fail());
//! assert_eq!(missing.error_message(), Some("not found"));
//!
//! let partial = Outcome::fail_with_value(99);
//! assert_eq!(partial.error_message(), Some(""));
//! assert_eq!(partial.into_value(), 99);
//! ```

mod error;
mod fail;
mod outcome;
mod pass;

pub use error::OutcomeError;
pub use fail::Fail;
pub use outcome::Outcome;
pub use pass::Pass;
