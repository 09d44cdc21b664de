//! Macros for writing ad-hoc checks.
//!
//! - [`macro@crate::check`] - Records a formatted message when a condition
//!   does not hold, deferring the formatting to the failure path.
//!
//! # Examples
//!
//! ```
//! use field_rail::{check, ErrorSet};
//!
//! let password = "hunter2";
//! let confirmation = "hunter3";
//!
//! let mut errors = ErrorSet::new();
//! check!(errors, "confirmation", password == confirmation, "Must match the password");
//! assert_eq!(errors["confirmation"], ["Must match the password"]);
//! ```

/// Runs an ad-hoc check against any [`ErrorSink`](crate::traits::ErrorSink).
///
/// If `condition` is `false`, formats the message with the remaining
/// arguments (same syntax as `format!`) and records it under `field`.
/// Nothing is formatted when the condition holds.
///
/// # Arguments
///
/// * `errors` - The sink, as a place expression (`errors`, `*sink`, ...)
/// * `field` - The field name
/// * `condition` - The constraint; `true` means the value is valid
/// * the rest - Message format string and arguments
///
/// # Examples
///
/// ```
/// use field_rail::{check, ErrorSet};
///
/// let start = 10;
/// let end = 4;
///
/// let mut errors = ErrorSet::new();
/// check!(errors, "end", end >= start, "Must not be before {start}, but was {end}");
/// check!(errors, "start", start >= 0, "Must not be negative");
///
/// assert_eq!(errors.messages("end"), ["Must not be before 10, but was 4"]);
/// assert!(!errors.contains("start"));
/// ```
#[macro_export]
macro_rules! check {
    ($errors:expr, $field:expr, $condition:expr, $($arg:tt)+) => {
        if !($condition) {
            $crate::traits::ErrorSink::add_error(
                &mut $errors,
                $field,
                $crate::__private::format!($($arg)+),
            );
        }
    };
}
