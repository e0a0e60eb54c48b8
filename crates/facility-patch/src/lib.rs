//! Marker-delimited block replacement for facility documents
//!
//! The core of Facility Sync: a streaming scan over a decompressed
//! facility document that finds one element block by its literal marker
//! pair, swaps the enclosed content for a pre-built replacement fragment,
//! and reproduces every other byte unchanged. Structurally invalid input
//! (duplicate, out-of-order, unterminated, or missing markers) fails the
//! whole document before any output is surrendered.
//!
//! This is not an XML parser. It never builds a DOM and never validates
//! nesting beyond the two markers it is told to find — deliberate, because
//! real facility files are only loosely valid and a strict parser would
//! reject documents the downstream tools accept.

pub mod error;
pub mod patcher;
pub mod target;

pub use error::{Error, Result};
pub use patcher::{DocumentPatcher, patch_document};
pub use target::{COMMAND_ALIASES, PatchTarget, POSITIONS};
