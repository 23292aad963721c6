//! genome-fm demo
//!
//! Demonstrates building an index and searching in O(pattern_length).
//!
//! ```bash
//! cargo run --example full_text_search
//! ```

use genome_fm::{Index, SampleGap};

fn main() {
    println!("=== genome-fm Demo ===\n");

    let genome = b"GGCGCCGCTAGTCACACACGCCGTAGGCGCCTAGTCACACACG$";

    println!("Reference ({} bytes):", genome.len());
    println!("  \"{}\"", std::str::from_utf8(genome).unwrap());

    let index = Index::build(genome, SampleGap::Every(4), SampleGap::Every(4))
        .expect("demo genome satisfies the sentinel invariants");

    println!("\n--- Search Results ---\n");

    let queries = ["GCC", "TAGT", "CACAC", "TTTT"];

    for query in &queries {
        let count = index.count(query.as_bytes());
        let positions = index.locate(query.as_bytes()).expect("well-formed index");

        if count > 0 {
            println!("  \"{query}\" -> {count} occurrences at positions {positions:?}");
        } else {
            println!("  \"{query}\" -> not found");
        }
    }

    println!("\n--- Complexity Demo ---\n");
    println!(
        "  count(\"GCC\")   = {} (O(3) operations)",
        index.count(b"GCC")
    );
    println!(
        "  count(\"CACAC\") = {} (O(5) operations)",
        index.count(b"CACAC")
    );
    println!(
        "  contains(\"TTTT\") = {} (O(4) operations)",
        index.contains(b"TTTT")
    );
    println!("\n  Query time is O(pattern_length), independent of reference size.");

    let summary = index.summary();
    println!("\n--- Index Summary ---\n");
    println!("  text_len:    {}", summary.text_len);
    println!(
        "  alphabet:    {:?}",
        summary.alphabet.iter().map(|&b| b as char).collect::<Vec<_>>()
    );
    println!("  sa_gap:      {}", summary.sa_gap);
    println!("  c_gap:       {}", summary.c_gap);
    println!("  sa_samples:  {}", summary.sa_samples_retained);
}
