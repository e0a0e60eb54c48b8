//! Error types for facility-patch

/// Result type for facility-patch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structural violations detected while scanning a facility document.
///
/// Every variant is fatal for the document being patched: no output is
/// surrendered once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Duplicate {element} open marker in document")]
    DuplicateBlock { element: &'static str },

    #[error("{element} close marker found with no open block")]
    MarkerOutOfOrder { element: &'static str },

    #[error("{element} block is unterminated: document ended before its close marker")]
    UnterminatedBlock { element: &'static str },

    #[error("No {element} block found in document")]
    BlockMissing { element: &'static str },
}
