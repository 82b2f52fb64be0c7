use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ReaderError;
use crate::line::LineReader;
use crate::options::ReaderOptions;
use crate::record::FastqRecord;

/// Streaming FASTQ parser consuming exactly four lines per record.
///
/// Multi-line sequences are not supported. The separator line is read and
/// discarded; in strict mode it must start with `+`.
pub struct FastqReader<R> {
    lines: LineReader<R>,
    options: ReaderOptions,
    done: bool,
}

impl FastqReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> FastqReader<R> {
    /// Creates a lenient reader with default 128 KiB buffer.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReaderOptions::default())
    }

    /// Creates a lenient reader with specified buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self::with_options(reader, ReaderOptions::default().with_buffer_capacity(capacity))
    }

    pub fn with_options(reader: R, options: ReaderOptions) -> Self {
        Self {
            lines: LineReader::with_capacity(options.buffer_capacity, reader),
            options,
            done: false,
        }
    }

    fn strict(&self) -> bool {
        self.options.mode.is_strict()
    }

    /// Reads one four-line group. `Ok(None)` marks the end of the stream.
    fn read_record(&mut self) -> Result<Option<FastqRecord>, ReaderError> {
        let (id, has_marker) = match self.lines.next_line()? {
            None => return Ok(None),
            Some([]) => return self.end_at_blank_line(),
            Some(line) => (
                String::from_utf8_lossy(&line[1..]).into_owned(),
                line[0] == b'@',
            ),
        };
        let header_line = self.lines.line_number();

        let Some(sequence) = self.lines.next_line()?.map(<[u8]>::to_vec) else {
            return self.truncated(header_line, "sequence");
        };
        let separator = self.lines.next_line()?;
        let Some(has_separator) = separator.map(|l| l.first() == Some(&b'+')) else {
            return self.truncated(header_line, "separator");
        };
        let Some(quality) = self.lines.next_line()?.map(<[u8]>::to_vec) else {
            return self.truncated(header_line, "quality");
        };

        if self.strict() {
            if !has_marker {
                return Err(ReaderError::malformed(
                    header_line,
                    "FASTQ header does not start with '@'",
                ));
            }
            if !has_separator {
                return Err(ReaderError::malformed(
                    header_line + 2,
                    "FASTQ separator does not start with '+'",
                ));
            }
            if sequence.len() != quality.len() {
                return Err(ReaderError::QualityLengthMismatch {
                    id,
                    sequence_len: sequence.len(),
                    quality_len: quality.len(),
                });
            }
        }

        Ok(Some(FastqRecord {
            id,
            sequence,
            quality,
        }))
    }

    fn end_at_blank_line(&mut self) -> Result<Option<FastqRecord>, ReaderError> {
        self.done = true;
        if !self.strict() {
            log::debug!(
                "Blank line at {} ends FASTQ stream",
                self.lines.line_number()
            );
            return Ok(None);
        }

        let blank_line = self.lines.line_number();
        while let Some(line) = self.lines.next_line()? {
            if !line.is_empty() {
                return Err(ReaderError::malformed(
                    blank_line,
                    "blank line where a FASTQ header was expected",
                ));
            }
        }
        Ok(None)
    }

    fn truncated(
        &mut self,
        header_line: u64,
        missing: &str,
    ) -> Result<Option<FastqRecord>, ReaderError> {
        self.done = true;
        if self.strict() {
            return Err(ReaderError::malformed(
                header_line,
                format!("truncated FASTQ record, missing {missing} line"),
            ));
        }
        log::debug!("Discarding truncated FASTQ record starting at line {header_line}");
        Ok(None)
    }
}

impl<R: Read> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                if e.is_io() {
                    self.done = true;
                }
                Some(Err(e))
            }
        }
    }
}
