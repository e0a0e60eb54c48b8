//! VRC position file (POF) conversion
//!
//! POF lines are colon delimited: sector name, radio name, frequency,
//! sector ID, display symbol, prefix, suffix. Anything past the seventh
//! field is ignored. Comment lines start with `;`.

use std::io::BufRead;

use crate::classify::{ClassificationConfig, PositionType};
use crate::error::{Error, Result};
use crate::escape::escape_xml;

/// Marker beginning every POF comment line.
const COMMENT_MARKER: char = ';';

/// Field count required of a position line.
const POSITION_FIELDS: usize = 7;

/// One row of classified station data, ready for serialization.
///
/// Constructed from a single POF line, serialized once, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub sector_name: String,
    pub radio_name: String,
    pub prefix: String,
    pub suffix: String,
    pub sector_id: String,
    pub position_type: PositionType,
    pub symbol: char,
    /// Offset-and-scaled frequency: `(raw − 100) × 1000`, rounded.
    pub frequency: i64,
}

impl Position {
    /// Parse one POF line. Text fields come out XML-escaped; the sector ID
    /// is classified against `config` before escaping.
    pub fn parse(line: &str, config: &ClassificationConfig) -> Result<Self> {
        let mut fields = line.splitn(POSITION_FIELDS + 1, ':');
        let mut next = || fields.next().ok_or_else(|| Error::missing_fields(line));

        let sector_name = next()?;
        let radio_name = next()?;
        let raw_frequency = next()?;
        let sector_id = next()?;
        let symbol_field = next()?;
        let prefix = next()?;
        let suffix = next()?;

        let frequency = scale_frequency(raw_frequency, line)?;
        let symbol = symbol_field
            .trim()
            .chars()
            .next()
            .ok_or_else(|| Error::missing_fields(line))?;
        let position_type = config.classify(sector_id);

        Ok(Self {
            sector_name: escape_xml(sector_name),
            radio_name: escape_xml(radio_name),
            prefix: escape_xml(prefix),
            suffix: escape_xml(suffix),
            sector_id: escape_xml(sector_id),
            position_type,
            symbol,
            frequency,
        })
    }

    /// Render as a self-closing `PositionInfo` element.
    pub fn to_xml(&self) -> String {
        format!(
            r#"      <PositionInfo PositionType="{}" SectorName="{}" RadioName="{}" Prefix="{}" Suffix="{}" Frequency="{}" SectorID="{}" PositionSymbol="{}" />"#,
            self.position_type,
            self.sector_name,
            self.radio_name,
            self.prefix,
            self.suffix,
            self.frequency,
            self.sector_id,
            self.symbol,
        )
    }
}

/// `(raw − 100) × 1000`, rounded to the nearest integer. A frequency field
/// that does not parse as a decimal number is a hard error; the silent
/// sentinel the VRC tooling used poisons output invisibly.
fn scale_frequency(raw: &str, line: &str) -> Result<i64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid_frequency(raw, line))?;
    Ok(((value - 100.0) * 1000.0).round() as i64)
}

/// Convert one POF line into a `PositionInfo` element.
pub fn position_line_to_xml(line: &str, config: &ClassificationConfig) -> Result<String> {
    Ok(Position::parse(line, config)?.to_xml())
}

/// Assemble the full `Positions` replacement block from a POF file.
///
/// Comment and blank lines are skipped without being counted; element
/// order matches input order. Unlike the alias block there is no trailing
/// timestamp element.
pub fn build_positions_block(
    reader: impl BufRead,
    config: &ClassificationConfig,
) -> Result<String> {
    let mut block = String::from("    <Positions>");
    let mut accepted = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            continue;
        }
        block.push('\n');
        block.push_str(&position_line_to_xml(&line, config)?);
        accepted += 1;
    }
    block.push_str("\n    </Positions>");
    tracing::debug!(positions = accepted, "Built positions block");
    Ok(block)
}
