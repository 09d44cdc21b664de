use crate::traits::{ErrorSink, Integer};
use crate::types::alloc_type::String;
use alloc::format;

/// Checks that an integer equals `min` when `min == max`, otherwise lies
/// between `min` and `max` (inclusive).
///
/// Works for every integer width, signed and unsigned; see [`Integer`].
///
/// # Messages
///
/// - `min == max`: `Must be exactly {min}, but was {value}`
/// - otherwise: `Must be between {min} and {max}, but was {value}`
///
/// # Examples
///
/// ```
/// use field_rail::{is_number_between, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// is_number_between("quantity", &mut errors, 0i64, 1, 10);
/// assert_eq!(errors["quantity"], ["Must be between 1 and 10, but was 0"]);
/// ```
pub fn is_number_between<S, T>(field: &str, errors: &mut S, value: T, min: T, max: T)
where
    S: ErrorSink + ?Sized,
    T: Integer,
{
    if value >= min && value <= max {
        return;
    }

    errors.add_error(field, number_between_message(value, min, max));
}

/// Message recorded by [`is_number_between`] for an out-of-range `value`.
pub fn number_between_message<T: Integer>(value: T, min: T, max: T) -> String {
    if min == max {
        format!("Must be exactly {min}, but was {value}")
    } else {
        format!("Must be between {min} and {max}, but was {value}")
    }
}
