use crate::types::alloc_type::{BTreeMap, String};
use crate::types::Messages;
use alloc::collections::btree_map;
use core::fmt;
use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-field collection of violation messages produced by a validation pass.
///
/// The caller creates an empty `ErrorSet`, runs any number of checks against
/// it, and inspects it afterwards: an empty set means every check passed, and
/// a field with no entry passed all of its checks. Messages for one field keep
/// the order of the failing checks. Fields iterate in lexical order.
///
/// # Serde Support
///
/// With the `serde` feature the set serializes as a plain map of
/// `field -> [messages]`, ready to be returned from an API handler.
///
/// # Examples
///
/// ```
/// use field_rail::{is_number_between, is_string_length, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// is_string_length("name", &mut errors, "Al", 3, 20);
/// is_number_between("age", &mut errors, 42u8, 18, 99);
///
/// assert!(!errors.is_valid());
/// assert_eq!(errors["name"], ["Must be between 3 and 20 characters long"]);
/// assert!(!errors.contains("age"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorSet {
    fields: BTreeMap<String, Messages>,
}

impl ErrorSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Appends `message` to the messages recorded for `field`.
    ///
    /// This is the only mutation a check performs. The field's entry is
    /// created on its first message.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "field_rail", field, violation = %message, "field check failed");

        match self.fields.get_mut(field) {
            Some(messages) => messages.push(message),
            None => {
                let mut messages = Messages::new();
                messages.push(message);
                self.fields.insert(String::from(field), messages);
            }
        }
    }

    /// Returns `true` if no field has a message.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the validation pass found no violation.
    ///
    /// Same as [`is_empty`](Self::is_empty); reads better at call sites.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Number of fields with at least one message.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Messages::len).sum()
    }

    /// Returns `true` if `field` has at least one message.
    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field`, if it failed.
    #[inline]
    pub fn get(&self, field: &str) -> Option<&Messages> {
        self.fields.get(field)
    }

    /// Messages recorded for `field`, or an empty slice if it passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .map(Messages::as_slice)
            .unwrap_or_default()
    }

    /// Names of the fields that failed, in lexical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over failed fields and their messages, in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Messages)> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages))
    }

    /// Moves every message of `other` into this set.
    ///
    /// For a field present in both, `other`'s messages are placed after the
    /// ones already recorded here.
    pub fn merge(&mut self, other: ErrorSet) {
        for (field, messages) in other.fields {
            match self.fields.get_mut(&field) {
                Some(existing) => existing.extend(messages),
                None => {
                    self.fields.insert(field, messages);
                }
            }
        }
    }

    /// Ends a validation pass: `Ok(())` if empty, otherwise the set itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::{is_email, ErrorSet};
    ///
    /// fn validate_signup(email: &str) -> Result<(), ErrorSet> {
    ///     let mut errors = ErrorSet::new();
    ///     is_email("email", &mut errors, email);
    ///     errors.into_result()
    /// }
    ///
    /// assert!(validate_signup("a@b").is_ok());
    /// let err = validate_signup("noatsign").unwrap_err();
    /// assert_eq!(err.to_string(), "email: Email address is invalid");
    /// ```
    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consumes the set and returns the underlying map.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<String, Messages> {
        self.fields
    }
}

/// Renders `field: msg; msg` per field, fields separated by `", "`.
impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {messages}")?;
        }
        Ok(())
    }
}

impl core::error::Error for ErrorSet {}

/// Panics if `field` has no messages, like indexing a map.
impl Index<&str> for ErrorSet {
    type Output = Messages;

    fn index(&self, field: &str) -> &Messages {
        match self.fields.get(field) {
            Some(messages) => messages,
            None => panic!("no messages recorded for field `{field}`"),
        }
    }
}

impl From<BTreeMap<String, Messages>> for ErrorSet {
    fn from(mut fields: BTreeMap<String, Messages>) -> Self {
        fields.retain(|_, messages| !messages.is_empty());
        Self { fields }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ErrorSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, Messages>::deserialize(deserializer).map(ErrorSet::from)
    }
}

impl<'a, M: Into<String>> FromIterator<(&'a str, M)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, M)>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, M: Into<String>> Extend<(&'a str, M)> for ErrorSet {
    fn extend<I: IntoIterator<Item = (&'a str, M)>>(&mut self, iter: I) {
        for (field, message) in iter {
            self.add(field, message);
        }
    }
}

impl IntoIterator for ErrorSet {
    type Item = (String, Messages);
    type IntoIter = btree_map::IntoIter<String, Messages>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = (&'a String, &'a Messages);
    type IntoIter = btree_map::Iter<'a, String, Messages>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
