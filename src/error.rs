//! Error types for frequency analysis and coding operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for freqcode operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error taxonomy.
///
/// Stream and file faults abort the operation that hit them; nothing here is
/// allowed to take down the process, so every variant carries enough context
/// to be reported and recovered from at the call boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file absent.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other read/seek/write fault, including text-decoding failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbol has no code in the active code table.
    #[error("no code for symbol {symbol:?}")]
    MissingSymbol { symbol: String },

    /// Fewer than two distinct symbols; the tree has no internal root, so
    /// codes are empty and decoding non-empty input is ambiguous.
    #[error("alphabet has fewer than two symbols, no codes assigned")]
    DegenerateAlphabet,
}

impl Error {
    /// Maps an open/read fault on `path` into the taxonomy, splitting
    /// `NotFound` out from the generic I/O category.
    pub(crate) fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(err)
        }
    }
}
