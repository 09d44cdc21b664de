//! Field checks.
//!
//! Every check shares one contract: `check(field, errors, value, ..params)`
//! evaluates a constraint and, only if it is violated, records exactly one
//! message under `field`. Checks never return an error and never stop later
//! checks from running, so one pass reports every violation.
//!
//! | Check                 | Violation                          |
//! |-----------------------|------------------------------------|
//! | [`is_string_length`]  | character count outside `min..=max` |
//! | [`is_number_between`] | integer outside `min..=max`        |
//! | [`is_size`]           | entry count outside `min..=max`    |
//! | [`is_min_size`]       | entry count below `min`            |
//! | `is_regex`            | pattern does not match             |
//! | `is_email`            | value is not `\S+@\S+`             |
//!
//! The pattern checks need the `regex` feature.
//!
//! # Examples
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let mut errors = ErrorSet::new();
//! is_string_length("username", &mut errors, "ab", 3, 16);
//! is_email("email", &mut errors, "not an email");
//! is_min_size("roles", &mut errors, &Vec::<String>::new(), 1);
//!
//! assert_eq!(errors.len(), 3);
//! ```
use crate::traits::ErrorSink;
use crate::types::alloc_type::String;

pub mod length;
pub mod numeric;
#[cfg(feature = "regex")]
pub mod pattern;
pub mod size;

pub use length::*;
pub use numeric::*;
#[cfg(feature = "regex")]
pub use pattern::*;
pub use size::*;

/// Records `message` under `field` unconditionally.
///
/// For callers writing their own checks; see also [`check!`](crate::check).
#[inline]
pub fn add_error<S>(field: &str, errors: &mut S, message: impl Into<String>)
where
    S: ErrorSink + ?Sized,
{
    errors.add_error(field, message.into());
}
