//! Sector classification config
//!
//! A `.v2xcfg` file is two whitespace-separated identifier lists: line one
//! holds the "in facility" sector IDs, line two the "adjacent" sector IDs.
//! The sets may overlap in the source data; adjacency wins on lookup.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Position classification assigned from the sector ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionType {
    Adjacent,
    InFacility,
    Other,
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Adjacent => "Adjacent",
            Self::InFacility => "InFacility",
            Self::Other => "Other",
        };
        f.write_str(tag)
    }
}

/// Two sector-ID sets, loaded once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationConfig {
    in_facility: HashSet<String>,
    adjacent: HashSet<String>,
}

impl ClassificationConfig {
    /// Build a config from explicit identifier lists.
    pub fn new(
        in_facility: impl IntoIterator<Item = String>,
        adjacent: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            in_facility: in_facility.into_iter().collect(),
            adjacent: adjacent.into_iter().collect(),
        }
    }

    /// Parse config text. Missing lines are empty sets; any text parses.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();
        let in_facility = lines
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        let adjacent = lines
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self {
            in_facility,
            adjacent,
        }
    }

    /// Load a `.v2xcfg` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(Error::Io)?;
        tracing::debug!(path = %path.display(), "Loaded classification config");
        Ok(Self::parse(&text))
    }

    /// Render the config back to `.v2xcfg` text.
    ///
    /// Identifiers are emitted sorted so saved files are stable across runs.
    pub fn to_config_string(&self) -> String {
        let mut in_facility: Vec<&str> = self.in_facility.iter().map(String::as_str).collect();
        let mut adjacent: Vec<&str> = self.adjacent.iter().map(String::as_str).collect();
        in_facility.sort_unstable();
        adjacent.sort_unstable();
        format!("{}\n{}\n", in_facility.join(" "), adjacent.join(" "))
    }

    /// Classify a sector ID. Adjacency takes priority over in-facility
    /// membership; identifiers in neither set are `Other`.
    pub fn classify(&self, sector_id: &str) -> PositionType {
        if self.adjacent.contains(sector_id) {
            PositionType::Adjacent
        } else if self.in_facility.contains(sector_id) {
            PositionType::InFacility
        } else {
            PositionType::Other
        }
    }

    /// True when both sets are empty (every position classifies `Other`).
    pub fn is_empty(&self) -> bool {
        self.in_facility.is_empty() && self.adjacent.is_empty()
    }
}
