//! Per-field validation that accumulates human-readable messages.
//!
//! A validation pass creates an [`ErrorSet`], runs checks against it, and
//! reads it back. A check that passes leaves the set untouched; a check that
//! fails appends exactly one message under its field. Checks never return
//! early or short-circuit each other, so a single pass surfaces every
//! violation, grouped per field and ordered as the checks ran.
//!
//! # Examples
//!
//! ## Validating a form
//!
//! ```
//! use field_rail::prelude::*;
//!
//! struct SignUp<'a> {
//!     username: &'a str,
//!     email: &'a str,
//!     age: u8,
//!     interests: Vec<&'a str>,
//! }
//!
//! fn validate(form: &SignUp<'_>) -> Result<(), ErrorSet> {
//!     let mut errors = ErrorSet::new();
//!     is_string_length("username", &mut errors, form.username, 3, 16);
//!     is_email("email", &mut errors, form.email);
//!     is_number_between("age", &mut errors, form.age, 13, 120);
//!     is_min_size("interests", &mut errors, &form.interests, 1);
//!     errors.into_result()
//! }
//!
//! let form = SignUp { username: "al", email: "al@example.com", age: 9, interests: vec![] };
//! let errors = validate(&form).unwrap_err();
//!
//! assert_eq!(errors["username"], ["Must be between 3 and 16 characters long"]);
//! assert_eq!(errors["age"], ["Must be between 13 and 120, but was 9"]);
//! assert_eq!(errors["interests"], ["Must have a minimum of 1 entry, but had 0"]);
//! assert!(!errors.contains("email"));
//! ```
//!
//! ## Accumulating on one field
//!
//! ```
//! use field_rail::{is_regex, is_string_length, ErrorSet};
//! use regex::Regex;
//!
//! let digits = Regex::new(r"^\d+$").unwrap();
//! let mut errors = ErrorSet::new();
//! is_string_length("zip", &mut errors, "12a", 5, 5);
//! is_regex("zip", &mut errors, "12a", &digits, "Must contain only digits");
//!
//! assert_eq!(
//!     errors.messages("zip"),
//!     ["Must be exactly 5 characters long", "Must contain only digits"]
//! );
//! ```
//!
//! # Features
//!
//! - `std` (default): `HashMap`/`HashSet` sizes and [`SharedErrorSet`]
//! - `regex` (default): [`is_regex`] and [`is_email`]; implies `std`
//! - `serde`: `Serialize`/`Deserialize` for [`ErrorSet`] and [`Messages`]
//! - `tracing`: a `debug` event for every recorded violation
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The check functions
pub mod checks;
/// Macros for ad-hoc checks
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Sink, container, and numeric traits used by the checks
pub mod traits;
/// ErrorSet and message storage
pub mod types;

pub use checks::*;
pub use traits::{Entries, ErrorSink, Integer};
pub use types::{ErrorSet, MessageVec, Messages};

#[cfg(feature = "std")]
pub use types::SharedErrorSet;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
