//! Rank / first-occurrence builder, and the sampling policy shared by the
//! suffix array and the rank table.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A sample gap: either "dense" (every value retained) or a positive
/// integer stride. Kept as a distinct enum — rather than collapsing dense
/// into `gap = 1` — because the wire format must round-trip the
/// distinction between "no gap was configured" and "a gap of 1 was
/// configured", and the two are assigned different literal lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleGap {
    /// Every value is retained.
    Dense,
    /// Only values at multiples of this stride are retained.
    Every(usize),
}

impl SampleGap {
    /// Builds a `SampleGap` from an optional CLI-style integer: `None`
    /// means dense, `Some(0)` is also treated as dense (per spec §3's "a
    /// value of 0 means dense" rule for `g_SA`/`g_C`), anything else
    /// becomes `Every(n)`.
    pub fn from_option(gap: Option<usize>) -> Self {
        match gap {
            None | Some(0) => SampleGap::Dense,
            Some(n) => SampleGap::Every(n),
        }
    }

    /// Whether `value` should be retained under this sampling policy. Used
    /// for suffix-array sampling, where the predicate is on the *value*
    /// `SA[i]`, not the index `i`.
    pub fn retains(self, value: usize) -> bool {
        match self {
            SampleGap::Dense => true,
            SampleGap::Every(g) => value % g == 0,
        }
    }

    /// The stride to use when indexing into a sampled array: `1` when
    /// dense, the configured gap otherwise.
    pub fn stride(self) -> usize {
        match self {
            SampleGap::Dense => 1,
            SampleGap::Every(g) => g,
        }
    }
}

impl fmt::Display for SampleGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleGap::Dense => write!(f, "None"),
            SampleGap::Every(g) => write!(f, "{g}"),
        }
    }
}

impl FromStr for SampleGap {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "None" {
            Ok(SampleGap::Dense)
        } else {
            Ok(SampleGap::Every(s.parse()?))
        }
    }
}

/// Dense per-symbol cumulative count table: `counts[c][k]` is the number of
/// occurrences of symbol `c` in `bwt[0..k)`, for `k` in `0..=bwt.len()`.
/// `alphabet` gives the symbol-to-row mapping (ascending, sentinel first).
pub struct RankTable {
    pub alphabet: Vec<u8>,
    pub counts: Vec<Vec<usize>>,
}

impl RankTable {
    /// Builds the dense table and the first-occurrence table from a BWT
    /// string and its (already sorted, sentinel-first) alphabet.
    pub fn build(bwt: &[u8], alphabet: &[u8]) -> (Self, Vec<usize>) {
        let ordinal: BTreeMap<u8, usize> = alphabet
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        let mut counts = alloc::vec![alloc::vec![0usize; bwt.len() + 1]; alphabet.len()];
        for k in 0..bwt.len() {
            for row in counts.iter_mut() {
                row[k + 1] = row[k];
            }
            let row = ordinal[&bwt[k]];
            counts[row][k + 1] += 1;
        }

        let total_len = bwt.len();
        let mut first_occurrence = alloc::vec![0usize; alphabet.len()];
        let mut running = 0;
        for (i, _c) in alphabet.iter().enumerate() {
            first_occurrence[i] = running;
            running += counts[i][total_len];
        }

        (
            RankTable {
                alphabet: alphabet.to_vec(),
                counts,
            },
            first_occurrence,
        )
    }

    /// Retains only the checkpoints required by `gap`, one row per symbol,
    /// in alphabet order.
    pub fn sample(&self, gap: SampleGap) -> Vec<Vec<usize>> {
        self.counts
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(k, _)| gap.retains(k))
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect()
    }
}

/// Renders a sample gap as the literal string used on the wire (`"None"`
/// or the decimal gap), matching [`SampleGap`]'s `Display`.
pub fn gap_to_string(gap: SampleGap) -> String {
    gap.to_string()
}
