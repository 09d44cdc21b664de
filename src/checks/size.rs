use crate::traits::{Entries, ErrorSink};
use crate::types::alloc_type::String;
use alloc::format;

/// Checks that a sequence or map holds exactly `min` entries when
/// `min == max`, otherwise between `min` and `max` entries (inclusive).
///
/// # Messages
///
/// - `min == max`: `Must have exactly {min} entries, but had {len}`
/// - otherwise: `Must have between {min} and {max} entries, but had {len}`
///
/// # Examples
///
/// ```
/// use field_rail::{is_size, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// is_size("tags", &mut errors, &["rust", "web", "api", "db"], 1, 3);
/// assert_eq!(errors["tags"], ["Must have between 1 and 3 entries, but had 4"]);
/// ```
pub fn is_size<S, C>(field: &str, errors: &mut S, value: &C, min: usize, max: usize)
where
    S: ErrorSink + ?Sized,
    C: Entries + ?Sized,
{
    let len = value.entries();
    if len >= min && len <= max {
        return;
    }

    errors.add_error(field, size_message(min, max, len));
}

/// Message recorded by [`is_size`] for a container holding `len` entries.
pub fn size_message(min: usize, max: usize, len: usize) -> String {
    if min == max {
        format!("Must have exactly {min} entries, but had {len}")
    } else {
        format!("Must have between {min} and {max} entries, but had {len}")
    }
}

/// Checks that a sequence or map holds at least `min` entries.
///
/// # Messages
///
/// `Must have a minimum of {min} entry, but had {len}`, with `entries` in
/// place of `entry` once `min` exceeds one. A minimum of zero or one keeps
/// the singular.
///
/// # Examples
///
/// ```
/// use field_rail::{is_min_size, ErrorSet};
/// use std::collections::HashMap;
///
/// let mut errors = ErrorSet::new();
/// let headers: HashMap<&str, &str> = HashMap::new();
/// is_min_size("headers", &mut errors, &headers, 1);
/// is_min_size("recipients", &mut errors, &vec!["a@b"], 2);
///
/// assert_eq!(errors["headers"], ["Must have a minimum of 1 entry, but had 0"]);
/// assert_eq!(errors["recipients"], ["Must have a minimum of 2 entries, but had 1"]);
/// ```
pub fn is_min_size<S, C>(field: &str, errors: &mut S, value: &C, min: usize)
where
    S: ErrorSink + ?Sized,
    C: Entries + ?Sized,
{
    let len = value.entries();
    if len >= min {
        return;
    }

    errors.add_error(field, min_size_message(min, len));
}

/// Message recorded by [`is_min_size`] for a container holding `len` entries.
///
/// ```
/// use field_rail::checks::min_size_message;
///
/// assert_eq!(min_size_message(0, 0), "Must have a minimum of 0 entry, but had 0");
/// assert_eq!(min_size_message(3, 1), "Must have a minimum of 3 entries, but had 1");
/// ```
pub fn min_size_message(min: usize, len: usize) -> String {
    let noun = if min > 1 { "entries" } else { "entry" };
    format!("Must have a minimum of {min} {noun}, but had {len}")
}
