use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::UnknownFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl SeqFormat {
    /// Picks a format from the file extension, if it names one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "fasta" | "fa" | "fna" => Some(Self::Fasta),
            "fastq" | "fq" => Some(Self::Fastq),
            _ => None,
        }
    }
}

impl FromStr for SeqFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" | "fa" => Ok(Self::Fasta),
            "fastq" | "fq" => Ok(Self::Fastq),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SeqFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fasta => f.write_str("FASTA"),
            Self::Fastq => f.write_str("FASTQ"),
        }
    }
}
