use crate::traits::ErrorSink;
use crate::types::alloc_type::String;
use alloc::format;

/// Checks that `value` is exactly `min` characters long when `min == max`,
/// otherwise between `min` and `max` characters (inclusive).
///
/// Length is the UTF-8 byte length of `value`, so `"héllo"` counts as six.
///
/// # Messages
///
/// - `min == max`: `Must be exactly {min} characters long`
/// - otherwise: `Must be between {min} and {max} characters long`
///
/// # Examples
///
/// ```
/// use field_rail::{is_string_length, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// is_string_length("pin", &mut errors, "1234", 4, 4);
/// assert!(errors.is_empty());
///
/// is_string_length("pin", &mut errors, "123", 4, 4);
/// assert_eq!(errors["pin"], ["Must be exactly 4 characters long"]);
/// ```
pub fn is_string_length<S>(field: &str, errors: &mut S, value: &str, min: usize, max: usize)
where
    S: ErrorSink + ?Sized,
{
    let len = value.len();
    if len >= min && len <= max {
        return;
    }

    errors.add_error(field, string_length_message(min, max));
}

/// Message recorded by [`is_string_length`] for the given bounds.
pub fn string_length_message(min: usize, max: usize) -> String {
    if min == max {
        format!("Must be exactly {min} characters long")
    } else {
        format!("Must be between {min} and {max} characters long")
    }
}
