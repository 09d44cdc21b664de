use crate::types::ErrorSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An [`ErrorSet`] that several threads can record into at once.
///
/// Each append happens under a lock. Checks take `&mut impl ErrorSink`, and
/// `&SharedErrorSet` is a sink, so every worker keeps its own shared
/// reference:
///
/// ```
/// use field_rail::{is_number_between, is_string_length, SharedErrorSet};
///
/// let shared = SharedErrorSet::new();
/// std::thread::scope(|s| {
///     s.spawn(|| is_string_length("name", &mut &shared, "", 1, 10));
///     s.spawn(|| is_number_between("age", &mut &shared, 7u8, 18, 99));
/// });
///
/// let errors = shared.into_inner();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SharedErrorSet {
    inner: Mutex<ErrorSet>,
}

impl SharedErrorSet {
    /// Creates an empty shared set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to `field` under the lock.
    pub fn add(&self, field: &str, message: impl Into<String>) {
        self.lock().add(field, message);
    }

    /// Returns `true` if no field has a message yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies the messages recorded so far.
    pub fn snapshot(&self) -> ErrorSet {
        self.lock().clone()
    }

    /// Consumes the lock and returns the collected set.
    pub fn into_inner(self) -> ErrorSet {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic elsewhere cannot leave an append half-done, so a poisoned
    // lock still guards a consistent set.
    fn lock(&self) -> MutexGuard<'_, ErrorSet> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ErrorSet> for SharedErrorSet {
    fn from(errors: ErrorSet) -> Self {
        Self {
            inner: Mutex::new(errors),
        }
    }
}
