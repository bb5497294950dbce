//! String-resource file handling.
//!
//! - [`index`]: in-memory bidirectional key/value index parsed from
//!   `strings.xml`, used for duplicate detection.
//! - [`writer`]: sorted, line-oriented insertion of new entries into the
//!   resource file text.

pub mod index;
pub mod writer;

pub use index::ResourceIndex;
pub use writer::{InsertOutcome, insert_entry};
