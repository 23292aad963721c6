use genome_fm::fasta::{ingest_reference, parse_fasta};
use genome_fm::{dna, Index, SampleGap};

#[test]
fn ingest_reference_concatenates_fasta_lines_and_appends_sentinel() {
    let fasta = ">chromosome1\nGGCGCC\nGCTAGT\nCACACACGCCGTA\n";
    let text = ingest_reference(fasta);
    assert_eq!(text, b"GGCGCCGCTAGTCACACACGCCGTA$");

    let index = Index::build(&text, SampleGap::Dense, SampleGap::Dense).unwrap();
    assert_eq!(index.count(b"GCC"), 2);
}

#[test]
fn batch_matching_skips_ambiguous_reads_and_falls_back_to_reverse_complement() {
    // "AAAA" does not occur forward in this reference, but its reverse
    // complement ("TTTT") does.
    let reference = ingest_reference("TTTTGGCC\n");
    let index = Index::build(&reference, SampleGap::Dense, SampleGap::Dense).unwrap();

    let reads = parse_fasta(">clean_forward\nGGCC\n>ambiguous\nGGNN\n>needs_rc\nAAAA\n");
    assert_eq!(reads.len(), 3);

    let mut report = Vec::new();
    for read in &reads {
        if dna::contains_ambiguous_base(&read.sequence) {
            continue;
        }
        let hits = dna::match_with_reverse_complement(&index, &read.sequence).unwrap();
        if !hits.is_empty() {
            report.push((read.name.clone(), hits));
        }
    }

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].0, "clean_forward");
    assert_eq!(report[1].0, "needs_rc");
}
