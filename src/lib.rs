//! # genome-fm
//!
//! A sampled FM-index over a suffix-threaded Burrows-Wheeler Transform,
//! for exact pattern counting and locating in a reference text.
//!
//! > Searching implies counting. `Count(Pattern) -> O(|Pattern|)`,
//! > independent of reference length.
//!
//! ## Architecture
//!
//! - [`text`] validates a reference text and derives its alphabet.
//! - [`suffix_tree`] threads every suffix into an explicit tree.
//! - [`bwt`] extracts the BWT string and full suffix array from that tree
//!   with one lexicographic DFS.
//! - [`rank`] builds the checkpointed per-symbol rank table and the
//!   first-occurrence table, and owns the sampling policy.
//! - [`index`] ties these into the immutable, (de)serializable [`Index`]
//!   value.
//! - [`search`] implements backward search, `count`, `locate` and
//!   `contains` directly on `Index`.
//! - [`dna`] and [`fasta`] add the DNA-specific reverse-complement
//!   fallback and FASTA ingestion used by the CLI binaries.
//!
//! ## Example
//!
//! ```
//! use genome_fm::{Index, SampleGap};
//!
//! let text = b"abracadabra$";
//! let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();
//!
//! // Count is O(|pattern|), independent of text length.
//! assert_eq!(index.count(b"abra"), 2);
//! assert!(index.contains(b"cadabra"));
//!
//! let mut positions = index.locate(b"abra").unwrap();
//! positions.sort_unstable();
//! assert_eq!(positions, vec![0, 7]);
//! ```

pub mod bwt;
pub mod dna;
pub mod error;
pub mod fasta;
pub mod index;
pub mod rank;
pub mod search;
pub mod suffix_tree;
pub mod text;

pub use error::{DnaError, IndexError, IndexResult, TextError, TextResult};
pub use index::{Index, IndexSummary};
pub use rank::SampleGap;

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_contains_on_a_small_text() {
        let text = b"abracadabra$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();

        assert_eq!(index.count(b"abra"), 2);
        assert_eq!(index.count(b"bra"), 2);
        assert_eq!(index.count(b"a"), 5);
        assert_eq!(index.count(b"xyz"), 0);
        assert!(index.contains(b"cadabra"));
    }

    #[test]
    fn locate_on_a_small_text() {
        let text = b"abracadabra$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();

        let mut positions = index.locate(b"abra").unwrap();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 7]);
    }

    #[test]
    fn empty_pattern_matches_every_row_including_sentinel() {
        let text = b"hello$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();
        assert_eq!(index.count(b""), text.len());
    }

    #[test]
    fn full_text_matches_exactly_once() {
        let text = b"exactmatch$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();
        assert_eq!(index.count(text), 1);
    }

    #[test]
    fn build_rejects_text_without_sentinel() {
        let err = Index::build(b"nosigil", SampleGap::Dense, SampleGap::Dense).unwrap_err();
        assert!(matches!(err, IndexError::Text(TextError::MissingSentinel)));
    }
}
