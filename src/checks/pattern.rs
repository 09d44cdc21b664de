use crate::traits::ErrorSink;
use regex::Regex;
use std::sync::OnceLock;

/// Source of the pattern used by [`is_email`]: `^\S+@\S+$`, one or more
/// non-whitespace characters, an `@`, then one or more non-whitespace
/// characters.
///
/// Whitespace is the ASCII set `\t \n \f \r` and space. Every other
/// character, U+00A0 included, counts as non-whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\t\n\f\r ]+@[^\t\n\f\r ]+$";

/// Message recorded by [`is_email`].
pub const EMAIL_MESSAGE: &str = "Email address is invalid";

/// The compiled [`EMAIL_PATTERN`], built on first use.
pub fn email_regex() -> &'static Regex {
    static EMAIL_RX: OnceLock<Regex> = OnceLock::new();
    EMAIL_RX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Checks that `value` matches `pattern`, recording `message` verbatim if not.
///
/// # Examples
///
/// ```
/// use field_rail::{is_regex, ErrorSet};
/// use regex::Regex;
///
/// let slug = Regex::new(r"^[a-z0-9-]+$").unwrap();
/// let mut errors = ErrorSet::new();
/// is_regex("slug", &mut errors, "hello-world", &slug, "Only lowercase letters, digits and dashes");
/// is_regex("slug", &mut errors, "Hello World", &slug, "Only lowercase letters, digits and dashes");
///
/// assert_eq!(errors["slug"], ["Only lowercase letters, digits and dashes"]);
/// ```
pub fn is_regex<S>(field: &str, errors: &mut S, value: &str, pattern: &Regex, message: &str)
where
    S: ErrorSink + ?Sized,
{
    if !pattern.is_match(value) {
        errors.add_error(field, message.to_owned());
    }
}

/// Checks that `value` looks like an email address, per [`EMAIL_PATTERN`].
///
/// The shape is deliberately loose; use [`is_regex`] for a stricter pattern.
///
/// # Examples
///
/// ```
/// use field_rail::{is_email, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// is_email("email", &mut errors, "a@b");
/// is_email("backup_email", &mut errors, "a b@c");
///
/// assert!(!errors.contains("email"));
/// assert_eq!(errors["backup_email"], ["Email address is invalid"]);
/// ```
pub fn is_email<S>(field: &str, errors: &mut S, value: &str)
where
    S: ErrorSink + ?Sized,
{
    is_regex(field, errors, value, email_regex(), EMAIL_MESSAGE);
}
