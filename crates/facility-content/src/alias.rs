//! VRC alias conversion
//!
//! Alias files are line oriented: `.NAME REPLACEMENT TEXT`. Lines not
//! starting with the command marker (comments, blanks, section headers)
//! are skipped without being counted.

use std::io::BufRead;

use crate::error::Result;
use crate::escape::escape_xml;

/// Marker beginning every alias command line.
const COMMAND_MARKER: char = '.';

/// Convert one alias line into a `CommandAlias` element.
///
/// The line splits at the first space: command name before it, replacement
/// body after it, verbatim (further spaces preserved). A command with no
/// body yields an empty `ReplaceWith`.
pub fn alias_line_to_xml(line: &str) -> String {
    let (command, replace_with) = line.split_once(' ').unwrap_or((line, ""));
    format!(
        r#"      <CommandAlias Command="{}" ReplaceWith="{}" />"#,
        escape_xml(command),
        escape_xml(replace_with)
    )
}

/// Assemble the full `CommandAliases` replacement block from an alias file.
///
/// Elements keep the input line order; nothing is reordered or
/// deduplicated. `last_imported` is the pre-formatted timestamp text for
/// the trailing `CommandAliasesLastImported` element (empty when the clock
/// could not be read).
pub fn build_alias_block(reader: impl BufRead, last_imported: &str) -> Result<String> {
    let mut block = String::from("    <CommandAliases>");
    let mut accepted = 0usize;
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(COMMAND_MARKER) {
            continue;
        }
        block.push('\n');
        block.push_str(&alias_line_to_xml(&line));
        accepted += 1;
    }
    block.push_str("\n    </CommandAliases>");
    block.push_str(&format!(
        "\n    <CommandAliasesLastImported>{last_imported}</CommandAliasesLastImported>"
    ));
    tracing::debug!(aliases = accepted, "Built command alias block");
    Ok(block)
}
