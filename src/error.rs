use std::io;
use thiserror::Error;

/// Errors from sequence parsing.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    #[error(
        "Quality length mismatch for '{id}': sequence has {sequence_len} bases, quality has {quality_len} scores"
    )]
    QualityLengthMismatch {
        id: String,
        sequence_len: usize,
        quality_len: usize,
    },
}

impl ReaderError {
    pub(crate) fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// True for faults raised by the underlying stream rather than its contents.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// A format name or file extension that is neither FASTA nor FASTQ.
#[derive(Debug, Error)]
#[error("Unrecognized sequence format '{0}', expected fasta or fastq")]
pub struct UnknownFormat(pub String);
