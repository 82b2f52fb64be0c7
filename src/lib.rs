mod error;
mod fasta;
mod fastq;
mod format;
mod line;
mod options;
mod record;
pub mod report;
pub mod stats;

pub use error::{ReaderError, UnknownFormat};
pub use fasta::FastaReader;
pub use fastq::FastqReader;
pub use format::SeqFormat;
pub use options::{CaseSensitivity, ParseMode, ReaderOptions, StatsOptions};
pub use record::{FastaRecord, FastqRecord, SequenceRecord, last_write_wins, last_write_wins_by};
pub use report::{SequenceReader, StatsRow};
