// Command-line interface definition

use clap::Parser;
use seqstats::SeqFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqstats",
    version,
    about = "Per-sequence length, GC% and quality summaries for FASTA/FASTQ files",
    long_about = None
)]
pub struct Cli {
    /// Input sequence file (.fasta/.fa/.fna or .fastq/.fq)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format; inferred from the file extension when omitted
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<SeqFormat>,

    /// Write the summary to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report truncated or malformed records instead of dropping them
    #[arg(long)]
    pub strict: bool,

    /// With --strict, log malformed records and keep going
    #[arg(long, requires = "strict")]
    pub skip_malformed: bool,

    /// Count lowercase (soft-masked) bases too
    #[arg(long)]
    pub ignore_case: bool,

    /// Keep only the last record for each repeated identifier
    #[arg(long)]
    pub dedup: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
