use crate::types::alloc_type::String;
use crate::types::MessageVec;
use core::fmt;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered violation messages recorded against a single field.
///
/// Messages keep the order in which the failing checks ran. Storage is a
/// [`MessageVec`], so the usual case of one message per field stays inline.
///
/// # Examples
///
/// ```
/// use field_rail::types::Messages;
///
/// let mut messages = Messages::new();
/// messages.push("Must be exactly 5 characters long");
/// messages.push("Email address is invalid");
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages.first(), Some("Must be exactly 5 characters long"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Messages {
    items: MessageVec,
}

impl Messages {
    /// Creates an empty message list.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: MessageVec::new(),
        }
    }

    /// Appends a message after every message already recorded.
    #[inline]
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(message.into());
    }

    /// Returns true if no message has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of recorded messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the first recorded message, if any.
    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Returns an iterator over the messages, oldest first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Returns the messages as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        self.items.as_slice()
    }

    /// Consumes the list and returns the underlying [`MessageVec`].
    #[inline]
    pub fn into_inner(self) -> MessageVec {
        self.items
    }
}

impl Deref for Messages {
    type Target = [String];

    fn deref(&self) -> &[String] {
        self.as_slice()
    }
}

/// Joins the messages with `"; "`.
impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl From<MessageVec> for Messages {
    fn from(items: MessageVec) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for Messages {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Messages {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Messages {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq<[&str]> for Messages {
    fn eq(&self, other: &[&str]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Messages {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
