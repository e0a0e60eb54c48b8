//! Replacement XML generation for Facility Sync
//!
//! Converts line-oriented VRC input files into the XML fragments spliced
//! into vSTARS/vERAM facility documents: command alias blocks, position
//! blocks, and the import timestamp element that trails the alias block.
//!
//! Nothing in this crate touches facility documents themselves; the output
//! is an opaque, fully formed fragment consumed by `facility-patch`.

pub mod alias;
pub mod classify;
pub mod error;
pub mod escape;
pub mod position;
pub mod timestamp;

pub use alias::{alias_line_to_xml, build_alias_block};
pub use classify::{ClassificationConfig, PositionType};
pub use error::{Error, Result};
pub use escape::escape_xml;
pub use position::{Position, build_positions_block, position_line_to_xml};
pub use timestamp::last_imported;
