mod cli;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use seqstats::report::{gc_values, write_rows};
use seqstats::{
    CaseSensitivity, ParseMode, ReaderOptions, SeqFormat, SequenceReader, StatsOptions,
    last_write_wins_by,
};

use crate::cli::Cli;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.input.is_file() {
        bail!("Input file not found: {}", cli.input.display());
    }

    let format = match cli.format.or_else(|| SeqFormat::from_path(&cli.input)) {
        Some(format) => format,
        None => bail!(
            "Cannot infer format of {}; use a .fasta or .fastq extension or pass --format",
            cli.input.display()
        ),
    };

    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let case = if cli.ignore_case {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    };

    let reader = SequenceReader::from_path(format, &cli.input, ReaderOptions::default().with_mode(mode))
        .with_context(|| format!("Failed to open {} file: {}", format, cli.input.display()))?;
    log::debug!(
        "Reading {} as {} ({mode:?}, {case:?})",
        cli.input.display(),
        reader.format()
    );

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for row in reader.stats(StatsOptions::default().with_case(case)) {
        match row {
            Ok(row) => rows.push(row),
            Err(e) if cli.skip_malformed && !e.is_io() => {
                log::warn!("Skipping malformed record: {e}");
                skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to parse {} file: {}", format, cli.input.display())
                });
            }
        }
    }

    if cli.dedup {
        rows = last_write_wins_by(rows, |row| row.id.as_str());
    }

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_rows(BufWriter::new(file), &rows)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => write_rows(io::stdout().lock(), &rows).context("Failed to write to stdout")?,
    }

    if cli.verbose {
        let gc = gc_values(&rows);
        let mean_gc = if gc.is_empty() {
            0.0
        } else {
            gc.iter().sum::<f64>() / gc.len() as f64
        };
        eprintln!("{} {} records", style("Summarized").green().bold(), rows.len());
        eprintln!("{}: {:.2}", style("Mean GC%").cyan(), mean_gc);
        if skipped > 0 {
            eprintln!("{} {} malformed records", style("Skipped").yellow(), skipped);
        }
        if let Some(path) = &cli.output {
            eprintln!("{} {}", style("Output written to").green(), path.display());
        }
    }

    Ok(())
}
