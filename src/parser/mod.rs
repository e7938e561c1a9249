//! FLE shorthand log parser
//!
//! ## Architecture
//!
//! - [`classifier`] - Comment, blank and block-comment detection
//! - [`header`] - Header directive recognition and sticky state updates
//! - [`line_parser`] - QSO data line interpretation with carry-forward
//! - [`loader`] - Single-pass driver producing the [`LoadResult`]
//!
//! ## Usage
//!
//! ```rust
//! use fle_processor::parser::load_str;
//!
//! let result = load_str("mycall ON4KJM/P\ndate 2020-05-23\n40m cw 1200 dl1abc\n");
//! assert!(result.is_clean());
//! assert_eq!(result.records.len(), 1);
//! ```
//!
//! [`LoadResult`]: crate::models::LoadResult

pub mod classifier;
pub mod header;
pub mod line_parser;
pub mod loader;

#[cfg(test)]
pub mod tests;

pub use classifier::{CommentSpan, LineClass, LineClassifier, classify};
pub use header::{Directive, DirectiveLine, apply_directive, recognize};
pub use line_parser::parse_line;
pub use loader::{LoadContext, load_file, load_str};
