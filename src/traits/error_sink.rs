use crate::types::alloc_type::String;
use crate::types::ErrorSet;

/// Destination for violation messages.
///
/// Every check reports through this trait, which keeps the contract in one
/// place: a failing check calls [`add_error`](ErrorSink::add_error) exactly
/// once, a passing check never calls it.
///
/// # Examples
///
/// ```
/// use field_rail::traits::ErrorSink;
/// use field_rail::is_string_length;
///
/// // Keeps only the first violation of each pass.
/// #[derive(Default)]
/// struct FirstOnly(Option<(String, String)>);
///
/// impl ErrorSink for FirstOnly {
///     fn add_error(&mut self, field: &str, message: String) {
///         self.0.get_or_insert_with(|| (field.to_string(), message));
///     }
/// }
///
/// let mut sink = FirstOnly::default();
/// is_string_length("code", &mut sink, "toolong", 4, 4);
/// is_string_length("name", &mut sink, "", 1, 8);
/// assert_eq!(sink.0.unwrap().0, "code");
/// ```
pub trait ErrorSink {
    /// Records `message` against `field`.
    fn add_error(&mut self, field: &str, message: String);
}

impl ErrorSink for ErrorSet {
    #[inline]
    fn add_error(&mut self, field: &str, message: String) {
        self.add(field, message);
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    #[inline]
    fn add_error(&mut self, field: &str, message: String) {
        (**self).add_error(field, message);
    }
}

#[cfg(feature = "std")]
impl ErrorSink for &crate::types::SharedErrorSet {
    #[inline]
    fn add_error(&mut self, field: &str, message: String) {
        self.add(field, message);
    }
}
