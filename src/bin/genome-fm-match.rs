//! Matches a pattern (or a FASTA file of reads) against a `genome-fm`
//! index, mirroring the original matcher's CLI contract: a single
//! pattern string prints its match positions to stdout, a pattern file
//! runs batch matching (skipping ambiguous reads, falling back to the
//! reverse complement) and writes a TSV report.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use genome_fm::dna;
use genome_fm::fasta::parse_fasta;
use genome_fm::{Index, IndexResult};

/// Match patterns against a prebuilt FM-index.
#[derive(Parser, Debug)]
#[command(
    name = "genome-fm-match",
    about = "Match patterns against a prebuilt FM-index",
    group(
        ArgGroup::new("pattern_source")
            .args(["patternstring", "patternfile"])
            .required(true)
    )
)]
struct Cli {
    /// The index file to search against.
    indexfile: PathBuf,

    /// A single pattern to match.
    #[arg(long)]
    patternstring: Option<String>,

    /// A FASTA file of reads to match in batch.
    #[arg(long)]
    patternfile: Option<PathBuf>,

    /// Where to write batch match results. Defaults to stdout.
    #[arg(long)]
    outputfile: Option<PathBuf>,
}

fn run(cli: Cli) -> IndexResult<()> {
    let index = Index::load(&cli.indexfile)?;

    if let Some(pattern) = cli.patternstring {
        let positions = index.locate(pattern.as_bytes())?;
        println!("{positions:?}");
        return Ok(());
    }

    let patternfile = cli.patternfile.expect("clap enforces pattern_source group");

    let contents = fs::read_to_string(&patternfile)?;
    let records = parse_fasta(&contents);

    // `--outputfile` is optional (spec §6): fall back to stdout when absent
    // rather than requiring it alongside `--patternfile`.
    let mut out: Box<dyn Write> = match &cli.outputfile {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    for record in &records {
        if dna::contains_ambiguous_base(&record.sequence) {
            tracing::debug!(read = %record.name, "skipping read with ambiguous base");
            continue;
        }
        let matches = dna::match_with_reverse_complement(&index, &record.sequence)?;
        if matches.is_empty() {
            continue;
        }
        let positions = matches
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, ">{}\t{positions}", record.name)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "failed to match pattern(s)");
            ExitCode::FAILURE
        }
    }
}
