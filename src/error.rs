//! Error taxonomy for text validation, index construction and index loading.
//!
//! Mirrors the categories spec'd for this system: `TextError` covers the
//! InputError class (malformed reference text), `IndexError` covers both
//! FormatError (malformed index file) and InternalError (invariant
//! violations in a loaded index). A pattern containing a symbol outside the
//! alphabet is not an error at all — `Index::count`/`Index::locate` just
//! return an empty result, per the LookupError semantics.

use thiserror::Error;

/// Errors raised while validating raw reference text before indexing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The text has zero length.
    #[error("text must not be empty")]
    Empty,

    /// The text does not end with the sentinel.
    #[error("text must end with the sentinel '$' (0x24)")]
    MissingSentinel,

    /// The sentinel appears somewhere other than the final position.
    #[error("sentinel '$' appears at position {position}, but must occur only at the end")]
    SentinelNotTerminal {
        /// Index of the offending occurrence.
        position: usize,
    },

    /// Some byte in the text sorts below the sentinel, violating the
    /// "sentinel is strictly smallest" invariant.
    #[error("byte {byte:#04x} at position {position} sorts before the sentinel '$'")]
    SentinelNotMinimal {
        /// The offending byte.
        byte: u8,
        /// Its position in the text.
        position: usize,
    },
}

/// Errors raised while building, serializing, deserializing or querying an
/// on-disk index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The reference text failed validation.
    #[error(transparent)]
    Text(#[from] TextError),

    /// Underlying I/O failure while reading or writing the index file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The index file has fewer lines than the format requires.
    #[error("expected at least {expected} lines in index file, found {found}")]
    WrongLineCount {
        /// Minimum number of lines required by the format.
        expected: usize,
        /// Number of lines actually present.
        found: usize,
    },

    /// A field that must parse as an integer did not.
    #[error("line {line}: expected an integer, found {value:?}")]
    NonInteger {
        /// 1-indexed line number.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// A comma-separated entry was malformed (e.g. a sampled SA pair
    /// missing its `;` separator).
    #[error("line {line}: malformed entry {value:?}: {reason}")]
    MalformedEntry {
        /// 1-indexed line number.
        line: usize,
        /// The offending text.
        value: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The number of rank-table rows does not match the alphabet size.
    #[error("rank table has {found} rows, expected {expected} (one per alphabet symbol)")]
    AlphabetRankMismatch {
        /// Expected row count (`|A|`).
        expected: usize,
        /// Rows actually present.
        found: usize,
    },

    /// A loaded index is internally inconsistent: walking last-to-first
    /// from a BWT index never reached a sampled suffix-array entry. This
    /// can only happen if the index file was corrupted or hand-edited.
    #[error("corrupted index: the lf-mapping walk from BWT index {start} never reached a sampled suffix-array entry")]
    BrokenSampledWalk {
        /// The BWT index the walk started from.
        start: usize,
    },
}

/// A specialized `Result` for text validation.
pub type TextResult<T> = std::result::Result<T, TextError>;

/// A specialized `Result` for index construction, serialization and load.
pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// Errors from the DNA-specific reverse-complement helper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DnaError {
    /// A byte outside `{A, C, G, T}` was encountered.
    #[error("byte {0:#04x} has no complement in {{A, C, G, T}}")]
    NoComplement(u8),
}
