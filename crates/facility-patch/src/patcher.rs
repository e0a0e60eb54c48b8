//! Streaming block replacement over facility documents
//!
//! The scan is an explicit state machine fed one line at a time. Outside
//! the target block every line passes through verbatim; inside it every
//! line is suppressed until the close marker, where the replacement block
//! is emitted as a unit. Output is buffered and surrendered only by
//! [`DocumentPatcher::finish`], so a caller can never observe bytes from a
//! document later found malformed.

use crate::error::{Error, Result};
use crate::target::PatchTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside the target block; lines pass through verbatim.
    Copying,
    /// Inside the target block; lines are suppressed until the close marker.
    InBlock,
}

/// Line-streaming scanner that replaces one marker-delimited block.
#[derive(Debug)]
pub struct DocumentPatcher<'a> {
    target: &'a PatchTarget,
    replacement: &'a str,
    state: ScanState,
    replaced: bool,
    emitted_any: bool,
    output: String,
}

impl<'a> DocumentPatcher<'a> {
    pub fn new(target: &'a PatchTarget, replacement: &'a str) -> Self {
        Self {
            target,
            replacement,
            state: ScanState::Copying,
            replaced: false,
            emitted_any: false,
            output: String::new(),
        }
    }

    /// Feed the next input line (without its separator).
    ///
    /// Marker ordering violations surface here; the document invariant is
    /// exactly one open marker and one close marker, in that order, with no
    /// nesting.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        match self.state {
            ScanState::Copying => {
                if line.contains(self.target.open_marker) {
                    if self.replaced {
                        return Err(Error::DuplicateBlock {
                            element: self.target.name,
                        });
                    }
                    self.state = ScanState::InBlock;
                    // The open-marker line may itself carry the close marker.
                    if line.contains(self.target.close_marker) {
                        self.emit_replacement();
                    }
                    return Ok(());
                }
                if line.contains(self.target.close_marker) {
                    return Err(Error::MarkerOutOfOrder {
                        element: self.target.name,
                    });
                }
                self.emit(line);
                Ok(())
            }
            ScanState::InBlock => {
                if line.contains(self.target.open_marker) {
                    return Err(Error::DuplicateBlock {
                        element: self.target.name,
                    });
                }
                if line.contains(self.target.close_marker) {
                    self.emit_replacement();
                }
                Ok(())
            }
        }
    }

    /// Complete the scan and take the patched document.
    ///
    /// Fails if the block never closed or was never found at all; a
    /// document without the target block is a format error, never a silent
    /// pass-through — success must mean the replacement is present.
    pub fn finish(self) -> Result<String> {
        if self.state == ScanState::InBlock {
            return Err(Error::UnterminatedBlock {
                element: self.target.name,
            });
        }
        if !self.replaced {
            return Err(Error::BlockMissing {
                element: self.target.name,
            });
        }
        Ok(self.output)
    }

    fn emit(&mut self, text: &str) {
        if self.emitted_any {
            self.output.push('\n');
        }
        self.output.push_str(text);
        self.emitted_any = true;
    }

    fn emit_replacement(&mut self) {
        let replacement = self.replacement;
        if self.emitted_any {
            self.output.push('\n');
        }
        self.output.push_str(replacement);
        self.emitted_any = true;
        self.replaced = true;
        self.state = ScanState::Copying;
        tracing::debug!(element = self.target.name, "Replaced block");
    }
}

/// Patch a whole document in memory.
///
/// Lines split on `\n` only, so carriage returns ride along inside lines
/// and round-trip untouched; a trailing newline in the input is preserved.
pub fn patch_document(source: &str, target: &PatchTarget, replacement: &str) -> Result<String> {
    let mut patcher = DocumentPatcher::new(target, replacement);
    let (body, trailing_newline) = match source.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (source, false),
    };
    for line in body.split('\n') {
        patcher.push_line(line)?;
    }
    let mut output = patcher.finish()?;
    if trailing_newline {
        output.push('\n');
    }
    Ok(output)
}
