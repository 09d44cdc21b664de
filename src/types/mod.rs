//! Storage for the outcome of a validation pass.
//!
//! - [`ErrorSet`]: field name to ordered violation messages
//! - [`Messages`]: the messages of one field
//! - [`SharedErrorSet`]: a lock-guarded `ErrorSet` for concurrent checks
//!   (requires `std`)
//!
//! # Examples
//!
//! ```
//! use field_rail::types::ErrorSet;
//!
//! let mut errors = ErrorSet::new();
//! errors.add("email", "Email address is invalid");
//! errors.add("email", "Must be between 3 and 254 characters long");
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.message_count(), 2);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_set;
pub mod messages;
#[cfg(feature = "std")]
pub mod shared;

pub use error_set::*;
pub use messages::*;
#[cfg(feature = "std")]
pub use shared::*;

/// SmallVec-backed list holding the messages of one field.
///
/// Keeps one message inline since a field usually fails a single check.
pub type MessageVec = SmallVec<[alloc_type::String; 1]>;
