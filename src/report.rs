use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::ReaderError;
use crate::fasta::FastaReader;
use crate::fastq::FastqReader;
use crate::format::SeqFormat;
use crate::options::{ReaderOptions, StatsOptions};
use crate::record::{FastaRecord, FastqRecord, SequenceRecord};
use crate::stats;

/// One report line per record.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub id: String,
    pub length: usize,
    pub gc_percent: f64,
    pub ambiguous: Option<usize>,
    pub avg_quality: Option<f64>,
}

impl StatsRow {
    pub fn from_fasta(record: &FastaRecord, options: &StatsOptions) -> Self {
        Self {
            ambiguous: Some(stats::ambiguous_count_with(&record.sequence, options.case)),
            ..Self::base(record, options)
        }
    }

    pub fn from_fastq(record: &FastqRecord, options: &StatsOptions) -> Self {
        Self {
            avg_quality: record
                .quality()
                .map(|qual| stats::avg_quality_with_offset(qual, options.quality_offset)),
            ..Self::base(record, options)
        }
    }

    fn base<R: SequenceRecord>(record: &R, options: &StatsOptions) -> Self {
        Self {
            id: record.id().to_string(),
            length: record.len(),
            gc_percent: stats::gc_content_with(record.sequence(), options.case),
            ambiguous: None,
            avg_quality: None,
        }
    }
}

impl fmt::Display for StatsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Length={}, GC%={:.2}", self.id, self.length, self.gc_percent)?;
        if let Some(n) = self.ambiguous {
            write!(f, ", Ambiguous={n}")?;
        }
        if let Some(q) = self.avg_quality {
            write!(f, ", Avg Quality={q:.2}")?;
        }
        Ok(())
    }
}

/// Either reader, selected explicitly by format.
pub enum SequenceReader<R> {
    Fasta(FastaReader<R>),
    Fastq(FastqReader<R>),
}

impl SequenceReader<File> {
    pub fn from_path<P: AsRef<Path>>(
        format: SeqFormat,
        path: P,
        options: ReaderOptions,
    ) -> io::Result<Self> {
        Ok(Self::new(format, File::open(path)?, options))
    }
}

impl<R: Read> SequenceReader<R> {
    pub fn new(format: SeqFormat, reader: R, options: ReaderOptions) -> Self {
        match format {
            SeqFormat::Fasta => Self::Fasta(FastaReader::with_options(reader, options)),
            SeqFormat::Fastq => Self::Fastq(FastqReader::with_options(reader, options)),
        }
    }

    pub fn format(&self) -> SeqFormat {
        match self {
            Self::Fasta(_) => SeqFormat::Fasta,
            Self::Fastq(_) => SeqFormat::Fastq,
        }
    }

    /// Maps every parsed record to its stats row, passing errors through.
    pub fn stats(self, options: StatsOptions) -> StatsRows<R> {
        StatsRows {
            reader: self,
            options,
        }
    }
}

pub struct StatsRows<R> {
    reader: SequenceReader<R>,
    options: StatsOptions,
}

impl<R: Read> Iterator for StatsRows<R> {
    type Item = Result<StatsRow, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let options = &self.options;
        match &mut self.reader {
            SequenceReader::Fasta(reader) => {
                Some(reader.next()?.map(|r| StatsRow::from_fasta(&r, options)))
            }
            SequenceReader::Fastq(reader) => {
                Some(reader.next()?.map(|r| StatsRow::from_fastq(&r, options)))
            }
        }
    }
}

/// GC percentages in row order, for histogram plotting.
pub fn gc_values(rows: &[StatsRow]) -> Vec<f64> {
    rows.iter().map(|row| row.gc_percent).collect()
}

/// Writes one formatted line per row.
pub fn write_rows<W: Write>(mut sink: W, rows: &[StatsRow]) -> io::Result<()> {
    for row in rows {
        writeln!(sink, "{row}")?;
    }
    sink.flush()
}
