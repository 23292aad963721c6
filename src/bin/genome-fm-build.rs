//! Builds a `genome-fm` index from a reference genome and writes it to
//! disk, mirroring the original builder's CLI contract: supply the
//! reference either inline or from a FASTA file, optionally thinning the
//! suffix-array and rank-table samples.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use genome_fm::{Index, SampleGap};

/// Build a sampled FM-index over a reference genome.
#[derive(Parser, Debug)]
#[command(
    name = "genome-fm-build",
    about = "Build a sampled FM-index over a reference genome",
    group(
        ArgGroup::new("genome_source")
            .args(["genomefile", "genome"])
            .required(true)
    )
)]
struct Cli {
    /// File to write the index to.
    indexfile: PathBuf,

    /// File containing the reference genome (FASTA, or one line of text).
    #[arg(long)]
    genomefile: Option<PathBuf>,

    /// The reference genome given directly as a string.
    #[arg(long)]
    genome: Option<String>,

    /// Gap between retained elements of the rank table; omit for dense.
    #[arg(long)]
    countgap: Option<usize>,

    /// Gap between retained elements of the suffix array; omit for dense.
    #[arg(long)]
    suffixgap: Option<usize>,
}

fn run(cli: Cli) -> genome_fm::IndexResult<()> {
    let text = if let Some(genome) = cli.genome {
        let mut text = genome.into_bytes();
        if text.last().copied() != Some(genome_fm::text::SENTINEL) {
            text.push(genome_fm::text::SENTINEL);
        }
        text
    } else {
        let path = cli.genomefile.expect("clap enforces genome_source group");
        let contents = fs::read_to_string(&path)?;
        genome_fm::fasta::ingest_reference(&contents)
    };

    let suffix_gap = SampleGap::from_option(cli.suffixgap);
    let count_gap = SampleGap::from_option(cli.countgap);

    tracing::info!(
        indexfile = %cli.indexfile.display(),
        text_len = text.len(),
        "building index"
    );
    let index = Index::build(&text, suffix_gap, count_gap)?;

    let summary = index.summary();
    tracing::info!(
        alphabet_size = summary.alphabet.len(),
        sa_samples_retained = summary.sa_samples_retained,
        "index built"
    );

    index.save(&cli.indexfile)?;
    tracing::info!(indexfile = %cli.indexfile.display(), "index written");
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
            tracing::error!(error = %err, "failed to build index");
            ExitCode::FAILURE
        }
    }
}
