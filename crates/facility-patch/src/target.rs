//! Patch targets
//!
//! A target names the single element kind a scan replaces and the literal
//! marker pair delimiting it. Markers are found by substring scan, never by
//! XML parsing; facility documents in the wild are too loosely structured
//! for a real parser to be safe.

/// The marker pair delimiting one replaceable element block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTarget {
    /// Element kind, used in error messages.
    pub name: &'static str,
    /// Literal substring opening the block.
    pub open_marker: &'static str,
    /// Literal substring closing the block.
    pub close_marker: &'static str,
}

/// Command alias block. The replaced span runs from the opening tag through
/// the `CommandAliasesLastImported` element that trails the block, so the
/// close marker is the last-imported tag rather than the element close tag.
pub const COMMAND_ALIASES: PatchTarget = PatchTarget {
    name: "CommandAliases",
    open_marker: "<CommandAliases>",
    close_marker: "<CommandAliasesLastImported>",
};

/// Positions block, delimited by its own open and close tags.
pub const POSITIONS: PatchTarget = PatchTarget {
    name: "Positions",
    open_marker: "<Positions>",
    close_marker: "</Positions>",
};
