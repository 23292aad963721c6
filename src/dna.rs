//! DNA-specific helpers layered on top of the alphabet-agnostic core:
//! reverse-complementing a read, and the batch matching strategy
//! (forward search, falling back to the reverse complement) used when
//! aligning FASTA reads against a reference index.

use crate::error::{DnaError, IndexError};
use crate::index::Index;
use crate::text::SENTINEL;

/// Reverse-complements a DNA read over `{A, C, G, T}`.
///
/// The sentinel is never expected in a read and is rejected like any
/// other unrecognized byte.
pub fn reverse_complement(read: &[u8]) -> Result<Vec<u8>, DnaError> {
    read.iter()
        .rev()
        .map(|&b| complement(b))
        .collect()
}

fn complement(base: u8) -> Result<u8, DnaError> {
    match base {
        b'A' => Ok(b'T'),
        b'T' => Ok(b'A'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        other => Err(DnaError::NoComplement(other)),
    }
}

/// Matches a single read against `index`, trying the forward orientation
/// first and falling back to the reverse complement if the forward
/// search found nothing. Returns `None` if the read contains a symbol
/// the reverse-complement table can't handle but a reverse-complement
/// attempt was still required (the read is simply unmatchable).
pub fn match_with_reverse_complement(
    index: &Index,
    read: &[u8],
) -> Result<Vec<usize>, IndexError> {
    let forward = index.locate(read)?;
    if !forward.is_empty() {
        return Ok(forward);
    }
    match reverse_complement(read) {
        Ok(rc) => index.locate(&rc),
        Err(_) => Ok(Vec::new()),
    }
}

/// Whether `read` is safe to search at all: contains no byte outside the
/// index's alphabet other than ambiguity codes such as `N`, which the
/// batch matcher skips entirely rather than searching for.
pub fn contains_ambiguous_base(read: &[u8]) -> bool {
    read.iter().any(|&b| b == b'N' || b == SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::SampleGap;

    #[test]
    fn complements_known_bases() {
        assert_eq!(reverse_complement(b"ACGT").unwrap(), b"ACGT");
        assert_eq!(reverse_complement(b"GATTACA").unwrap(), b"TGTAATC");
    }

    #[test]
    fn rejects_unknown_base() {
        let err = reverse_complement(b"ACGN").unwrap_err();
        assert_eq!(err, DnaError::NoComplement(b'N'));
    }

    #[test]
    fn detects_ambiguous_reads() {
        assert!(contains_ambiguous_base(b"ACGNT"));
        assert!(!contains_ambiguous_base(b"ACGT"));
    }

    #[test]
    fn falls_back_to_reverse_complement() {
        // Index over a text whose forward strand doesn't contain "AAAA",
        // but whose reverse complement does.
        let text = b"TTTTGGCC$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();
        assert!(index.locate(b"AAAA").unwrap().is_empty());

        let hits = match_with_reverse_complement(&index, b"AAAA").unwrap();
        assert_eq!(hits, vec![0]);
    }
}
