//! Seams shared by every check.
//!
//! - [`ErrorSink`]: where a failing check records its message
//! - [`Entries`]: containers measurable by the size checks
//! - [`Integer`]: numeric types accepted by the range check
//!
//! # Examples
//!
//! ```
//! use field_rail::traits::{Entries, ErrorSink};
//! use field_rail::ErrorSet;
//!
//! let mut errors = ErrorSet::new();
//! errors.add_error("tags", format!("had {}", [1, 2, 3].entries()));
//! assert_eq!(errors.messages("tags"), ["had 3"]);
//! ```

pub mod entries;
pub mod error_sink;
pub mod integer;

pub use entries::Entries;
pub use error_sink::ErrorSink;
pub use integer::Integer;
