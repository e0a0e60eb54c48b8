//! Run status accumulation
//!
//! A run can fail in several independent ways before it terminates; each
//! failure category owns one exit-code bit so operators can read every
//! cause out of a single exit value. The bit assignments are the
//! operator-facing contract and never change.

use facility_fs::Error as FsError;

use crate::error::CliError;

/// Exit-code bit assigned to each failure category.
///
/// Eight categories, one bit each, so every combination fits the eight
/// bits POSIX actually reports to the parent process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Wrong argument shape (odd facility path count, etc.)
    Usage = 1,
    /// A file could not be opened, read, or written
    OpenFile = 2,
    /// The import timestamp could not be computed
    Timestamp = 4,
    /// A scratch file could not be removed after a failed write
    Cleanup = 8,
    /// Gzip compression or extraction failed
    Codec = 16,
    /// A pre-existing output file could not be deleted
    DeleteFile = 32,
    /// A facility document or input document violated its format
    DocumentFormat = 64,
    /// The classification config was unreadable
    ConfigFormat = 128,
}

impl FailureCategory {
    /// Categorize an error for exit-code accounting.
    pub fn of(error: &CliError) -> Self {
        match error {
            CliError::Patch(_) => Self::DocumentFormat,
            CliError::Content(err) => match err {
                facility_content::Error::Io(_) => Self::OpenFile,
                facility_content::Error::TimestampRange => Self::Timestamp,
                _ => Self::DocumentFormat,
            },
            CliError::Fs(err) => match err {
                FsError::GzipExtract { .. } | FsError::GzipCompress { .. } => Self::Codec,
                FsError::NotUtf8 { .. } => Self::DocumentFormat,
                FsError::Cleanup { .. } => Self::Cleanup,
                FsError::Delete { .. } => Self::DeleteFile,
                FsError::Io { .. } | FsError::LockFailed { .. } => Self::OpenFile,
            },
            CliError::Io(_) => Self::OpenFile,
            CliError::Dialoguer(_) | CliError::User { .. } => Self::Usage,
        }
    }
}

/// Per-run accumulator of independent failure flags.
///
/// Explicit value threaded through the run; flags only accumulate, and the
/// final exit code is their bitwise OR.
#[derive(Debug, Default)]
pub struct RunReport {
    flags: i32,
    failures: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure category.
    pub fn record(&mut self, category: FailureCategory) {
        self.flags |= category as i32;
        self.failures += 1;
    }

    /// Number of failures recorded so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn is_clean(&self) -> bool {
        self.flags == 0
    }

    /// Bitwise OR of every recorded category.
    pub fn exit_code(&self) -> i32 {
        self.flags
    }
}
