//! Alphabet & text model.
//!
//! Validates a raw reference text and derives its sorted alphabet. The only
//! invariant the rest of the crate relies on is enforced here, once: the
//! text ends with a unique sentinel that sorts strictly below every other
//! symbol.

use crate::error::{TextError, TextResult};

/// Sentinel byte, `$`. Chosen (rather than `0x00`) so that index files
/// written by [`crate::index::Index::save`] stay printable UTF-8 text, and
/// to match the convention used throughout the reference material this
/// crate is built from.
pub const SENTINEL: u8 = b'$';

/// Validates `text` against the invariants required of a reference text:
/// non-empty, terminated by exactly one [`SENTINEL`] at the final position,
/// and no byte sorting below the sentinel.
///
/// Returns the sorted, deduplicated alphabet (sentinel first) on success.
pub fn validate_and_alphabet(text: &[u8]) -> TextResult<Vec<u8>> {
    if text.is_empty() {
        return Err(TextError::Empty);
    }
    if *text.last().unwrap() != SENTINEL {
        return Err(TextError::MissingSentinel);
    }
    for (position, &byte) in text.iter().enumerate() {
        if byte == SENTINEL && position != text.len() - 1 {
            return Err(TextError::SentinelNotTerminal { position });
        }
        if byte < SENTINEL && byte != SENTINEL {
            return Err(TextError::SentinelNotMinimal { byte, position });
        }
    }
    Ok(alphabet_of(text))
}

/// Computes the sorted, deduplicated set of bytes occurring in `text`.
/// Does not itself validate any invariant; callers needing a validated
/// alphabet should use [`validate_and_alphabet`].
pub fn alphabet_of(text: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    for &b in text {
        seen[b as usize] = true;
    }
    (0u8..=255).filter(|&b| seen[b as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        assert_eq!(validate_and_alphabet(b""), Err(TextError::Empty));
    }

    #[test]
    fn rejects_missing_sentinel() {
        assert_eq!(
            validate_and_alphabet(b"banana"),
            Err(TextError::MissingSentinel)
        );
    }

    #[test]
    fn rejects_interior_sentinel() {
        let err = validate_and_alphabet(b"ban$ana$").unwrap_err();
        assert_eq!(err, TextError::SentinelNotTerminal { position: 3 });
    }

    #[test]
    fn rejects_byte_below_sentinel() {
        // '!' (0x21) sorts below '$' (0x24).
        let err = validate_and_alphabet(b"ba!nana$").unwrap_err();
        assert_eq!(
            err,
            TextError::SentinelNotMinimal {
                byte: b'!',
                position: 2
            }
        );
    }

    #[test]
    fn alphabet_is_sorted_with_sentinel_first() {
        let alphabet = validate_and_alphabet(b"banana$").unwrap();
        assert_eq!(alphabet, vec![b'$', b'a', b'b', b'n']);
    }

    #[test]
    fn dna_alphabet() {
        let alphabet = validate_and_alphabet(b"GGCGCCGCTAGTCACACACGCCGTA$").unwrap();
        assert_eq!(alphabet, vec![b'$', b'A', b'C', b'G', b'T']);
    }
}
