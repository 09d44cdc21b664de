//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let mut errors = ErrorSet::new();
//! is_number_between("port", &mut errors, 80u16, 1024, 65535);
//! check!(errors, "host", !"".is_empty(), "Must not be empty");
//!
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`check!`]
//! - **Checks**: every `is_*` function and [`add_error`]
//! - **Types**: [`ErrorSet`], [`Messages`]
//! - **Traits**: [`ErrorSink`], [`Entries`], [`Integer`]

pub use crate::check;

pub use crate::checks::{add_error, is_min_size, is_number_between, is_size, is_string_length};
#[cfg(feature = "regex")]
pub use crate::checks::{is_email, is_regex};

pub use crate::types::{ErrorSet, Messages};
#[cfg(feature = "std")]
pub use crate::types::SharedErrorSet;

pub use crate::traits::{Entries, ErrorSink, Integer};
