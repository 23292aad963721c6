//! The immutable [`Index`] value: construction, the §6 wire format, and
//! introspection. Query operations (`count`, `locate`, backward search,
//! LF-mapping) live in [`crate::search`], which implements them directly
//! on this type.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::bwt;
use crate::error::{IndexError, IndexResult};
use crate::rank::{RankTable, SampleGap};
use crate::suffix_tree::SuffixTree;
use crate::text;

/// A built FM-index: BWT string, sampled suffix array, checkpointed
/// per-symbol rank table and first-occurrence table. Once constructed
/// (whether via [`Index::build`] or [`Index::load`]), an `Index` is
/// immutable and safe to share across any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct Index {
    pub(crate) bwt: Vec<u8>,
    pub(crate) alphabet: Vec<u8>,
    pub(crate) first_occurrence: Vec<usize>,
    pub(crate) c_sampled: Vec<Vec<usize>>,
    pub(crate) c_gap: SampleGap,
    pub(crate) sa_sampled: BTreeMap<usize, usize>,
    pub(crate) sa_gap: SampleGap,
}

/// A small diagnostic snapshot of a built index, analogous to the
/// `report()` dump the original builder exposed, but summarizing rather
/// than printing the raw tables.
#[derive(Debug, Clone)]
pub struct IndexSummary {
    pub text_len: usize,
    pub alphabet: Vec<u8>,
    pub sa_gap: SampleGap,
    pub c_gap: SampleGap,
    pub sa_samples_retained: usize,
}

impl Index {
    /// Builds an index over `text`, which must already satisfy the
    /// sentinel invariants (see [`text::validate_and_alphabet`]).
    ///
    /// `sa_gap`/`c_gap` control the suffix-array and rank-table sampling
    /// density; `SampleGap::Dense` stores every entry.
    pub fn build(text: &[u8], sa_gap: SampleGap, c_gap: SampleGap) -> IndexResult<Self> {
        let alphabet = text::validate_and_alphabet(text)?;
        tracing::debug!(
            text_len = text.len(),
            alphabet_size = alphabet.len(),
            "threading suffix tree"
        );

        let tree = SuffixTree::build(text);
        let (bwt, sa) = bwt::extract(&tree, text);
        drop(tree);

        let (rank_table, first_occurrence) = RankTable::build(&bwt, &alphabet);
        let c_sampled = rank_table.sample(c_gap);

        let mut sa_sampled = BTreeMap::new();
        for (i, &pos) in sa.iter().enumerate() {
            if sa_gap.retains(pos) {
                sa_sampled.insert(i, pos);
            }
        }

        tracing::debug!(
            sa_samples_retained = sa_sampled.len(),
            "index built"
        );

        Ok(Index {
            bwt,
            alphabet,
            first_occurrence,
            c_sampled,
            c_gap,
            sa_sampled,
            sa_gap,
        })
    }

    /// Length of the indexed text, sentinel included.
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    /// The sorted alphabet (sentinel first) this index was built over.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            text_len: self.bwt.len(),
            alphabet: self.alphabet.clone(),
            sa_gap: self.sa_gap,
            c_gap: self.c_gap,
            sa_samples_retained: self.sa_sampled.len(),
        }
    }

    /// Serializes this index to the line-oriented text format (§6).
    pub fn save_to_string(&self) -> IndexResult<String> {
        let mut out = String::new();

        let l_line = String::from_utf8(self.bwt.clone())
            .map_err(|_| IndexError::MalformedEntry {
                line: 1,
                value: "<bwt>".to_string(),
                reason: "BWT contains non-UTF-8 bytes".to_string(),
            })?;
        writeln!(out, "{l_line}").unwrap();

        let sa_line = self
            .sa_sampled
            .iter()
            .map(|(i, v)| format!("{i};{v}"))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{sa_line}").unwrap();

        let alphabet_line = self
            .alphabet
            .iter()
            .map(|&c| (c as char).to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{alphabet_line}").unwrap();

        for row in &self.c_sampled {
            let line = row
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{line}").unwrap();
        }

        let fo_line = self
            .first_occurrence
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{fo_line}").unwrap();

        writeln!(out, "{}", self.sa_gap).unwrap();
        writeln!(out, "{}", self.c_gap).unwrap();

        Ok(out)
    }

    /// Writes the serialized index to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> IndexResult<()> {
        let content = self.save_to_string()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Parses the line-oriented text format (§6) back into an `Index`.
    pub fn load_from_str(s: &str) -> IndexResult<Self> {
        let lines: Vec<&str> = s.lines().collect();
        const MIN_LINES: usize = 6;
        if lines.len() < MIN_LINES {
            return Err(IndexError::WrongLineCount {
                expected: MIN_LINES,
                found: lines.len(),
            });
        }

        let bwt = lines[0].as_bytes().to_vec();

        let alphabet: Vec<u8> = if lines[2].is_empty() {
            Vec::new()
        } else {
            lines[2]
                .split(',')
                .map(|entry| {
                    entry.chars().next().ok_or_else(|| IndexError::MalformedEntry {
                        line: 3,
                        value: entry.to_string(),
                        reason: "empty alphabet symbol".to_string(),
                    })
                })
                .collect::<IndexResult<Vec<char>>>()?
                .into_iter()
                .map(|c| c as u8)
                .collect()
        };

        let expected_lines = MIN_LINES + alphabet.len();
        if lines.len() < expected_lines {
            return Err(IndexError::WrongLineCount {
                expected: expected_lines,
                found: lines.len(),
            });
        }

        let mut sa_sampled = BTreeMap::new();
        if !lines[1].is_empty() {
            for entry in lines[1].split(',') {
                let (i_str, v_str) = entry.split_once(';').ok_or_else(|| IndexError::MalformedEntry {
                    line: 2,
                    value: entry.to_string(),
                    reason: "missing ';' separator".to_string(),
                })?;
                let i: usize = i_str.parse().map_err(|_| IndexError::NonInteger {
                    line: 2,
                    value: i_str.to_string(),
                })?;
                let v: usize = v_str.parse().map_err(|_| IndexError::NonInteger {
                    line: 2,
                    value: v_str.to_string(),
                })?;
                sa_sampled.insert(i, v);
            }
        }

        let mut c_sampled = Vec::with_capacity(alphabet.len());
        for line_idx in 3..3 + alphabet.len() {
            let row: Vec<usize> = if lines[line_idx].is_empty() {
                Vec::new()
            } else {
                lines[line_idx]
                    .split(',')
                    .map(|v| {
                        v.parse().map_err(|_| IndexError::NonInteger {
                            line: line_idx + 1,
                            value: v.to_string(),
                        })
                    })
                    .collect::<IndexResult<Vec<usize>>>()?
            };
            c_sampled.push(row);
        }
        if c_sampled.len() != alphabet.len() {
            return Err(IndexError::AlphabetRankMismatch {
                expected: alphabet.len(),
                found: c_sampled.len(),
            });
        }

        let fo_line_idx = 3 + alphabet.len();
        let first_occurrence: Vec<usize> = lines[fo_line_idx]
            .split(',')
            .map(|v| {
                v.parse().map_err(|_| IndexError::NonInteger {
                    line: fo_line_idx + 1,
                    value: v.to_string(),
                })
            })
            .collect::<IndexResult<Vec<usize>>>()?;
        if first_occurrence.len() != alphabet.len() {
            return Err(IndexError::AlphabetRankMismatch {
                expected: alphabet.len(),
                found: first_occurrence.len(),
            });
        }

        let sa_gap_idx = fo_line_idx + 1;
        let c_gap_idx = fo_line_idx + 2;
        let sa_gap: SampleGap = lines[sa_gap_idx].parse().map_err(|_| IndexError::NonInteger {
            line: sa_gap_idx + 1,
            value: lines[sa_gap_idx].to_string(),
        })?;
        let c_gap: SampleGap = lines[c_gap_idx].parse().map_err(|_| IndexError::NonInteger {
            line: c_gap_idx + 1,
            value: lines[c_gap_idx].to_string(),
        })?;

        Ok(Index {
            bwt,
            alphabet,
            first_occurrence,
            c_sampled,
            c_gap,
            sa_sampled,
            sa_gap,
        })
    }

    /// Loads a serialized index from `path`.
    pub fn load(path: impl AsRef<Path>) -> IndexResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::SampleGap;

    #[test]
    fn round_trip_dense() {
        let text = b"GGCGCCGCTAGTCACACACGCCGTA$";
        let index = Index::build(text, SampleGap::Dense, SampleGap::Dense).unwrap();
        let s = index.save_to_string().unwrap();
        let loaded = Index::load_from_str(&s).unwrap();

        assert_eq!(index.bwt, loaded.bwt);
        assert_eq!(index.alphabet, loaded.alphabet);
        assert_eq!(index.first_occurrence, loaded.first_occurrence);
        assert_eq!(index.c_sampled, loaded.c_sampled);
        assert_eq!(index.sa_sampled, loaded.sa_sampled);
        assert_eq!(index.sa_gap, loaded.sa_gap);
        assert_eq!(index.c_gap, loaded.c_gap);
    }

    #[test]
    fn round_trip_sampled() {
        let text = b"GGCGCCGCTAGTCACACACGCCGTA$";
        let index = Index::build(text, SampleGap::Every(5), SampleGap::Every(5)).unwrap();
        let s = index.save_to_string().unwrap();
        let loaded = Index::load_from_str(&s).unwrap();

        assert_eq!(index.sa_sampled, loaded.sa_sampled);
        assert_eq!(index.sa_gap, SampleGap::Every(5));
        assert_eq!(loaded.sa_gap, SampleGap::Every(5));
    }

    #[test]
    fn build_rejects_missing_sentinel() {
        let err = Index::build(b"banana", SampleGap::Dense, SampleGap::Dense).unwrap_err();
        assert!(matches!(err, IndexError::Text(_)));
    }

    #[test]
    fn load_rejects_short_file() {
        let err = Index::load_from_str("a\nb\n").unwrap_err();
        assert!(matches!(err, IndexError::WrongLineCount { .. }));
    }

    #[test]
    fn load_rejects_non_integer_first_occurrence() {
        // 1 symbol alphabet: needs 7 lines (6 + 1).
        let bad = "a\n\nA\n0\nxyz\nNone\nNone\n";
        let err = Index::load_from_str(bad).unwrap_err();
        assert!(matches!(err, IndexError::NonInteger { .. }));
    }
}
