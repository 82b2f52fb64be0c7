use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ReaderError;
use crate::line::LineReader;
use crate::options::ReaderOptions;
use crate::record::FastaRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No header seen yet.
    Start,
    /// Accumulating sequence lines under a header.
    Record,
    Done,
}

/// Streaming FASTA parser yielding one record per header line.
///
/// Sequence lines are trimmed and concatenated until the next header or end
/// of input. Lines preceding the first header belong to no record.
pub struct FastaReader<R> {
    lines: LineReader<R>,
    options: ReaderOptions,
    state: State,
    id: String,
    sequence: Vec<u8>,
    header_line: u64,
    orphan_line: Option<u64>,
}

impl FastaReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> FastaReader<R> {
    /// Creates a lenient reader with default 128 KiB buffer.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReaderOptions::default())
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self::with_options(reader, ReaderOptions::default().with_buffer_capacity(capacity))
    }

    pub fn with_options(reader: R, options: ReaderOptions) -> Self {
        Self {
            lines: LineReader::with_capacity(options.buffer_capacity, reader),
            options,
            state: State::Start,
            id: String::new(),
            sequence: Vec::new(),
            header_line: 0,
            orphan_line: None,
        }
    }

    fn take_record(&mut self) -> Option<Result<FastaRecord, ReaderError>> {
        let id = std::mem::take(&mut self.id);
        let sequence = std::mem::take(&mut self.sequence);

        if id.is_empty() {
            if self.options.mode.is_strict() {
                return Some(Err(ReaderError::malformed(
                    self.header_line,
                    "FASTA header has an empty identifier",
                )));
            }
            log::debug!("Dropping FASTA record with empty identifier at line {}", self.header_line);
            return None;
        }

        Some(Ok(FastaRecord { id, sequence }))
    }

    fn take_orphan_error(&mut self) -> Option<Result<FastaRecord, ReaderError>> {
        let line = self.orphan_line.take()?;
        if self.options.mode.is_strict() {
            return Some(Err(ReaderError::malformed(
                line,
                "sequence data before the first FASTA header",
            )));
        }
        log::debug!("Discarded sequence lines before the first FASTA header (from line {line})");
        None
    }
}

impl<R: Read> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == State::Done {
                return None;
            }

            let line = match self.lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    let state = std::mem::replace(&mut self.state, State::Done);
                    return match state {
                        State::Record => self.take_record(),
                        _ => self.take_orphan_error(),
                    };
                }
                Err(e) => {
                    self.state = State::Done;
                    return Some(Err(e.into()));
                }
            };

            if let Some(header) = line.strip_prefix(b">") {
                let id = String::from_utf8_lossy(header).into_owned();
                let previous = std::mem::replace(&mut self.state, State::Record);

                let finished = match previous {
                    State::Record => self.take_record(),
                    _ => self.take_orphan_error(),
                };

                self.id = id;
                self.sequence.clear();
                self.header_line = self.lines.line_number();

                if finished.is_some() {
                    return finished;
                }
                continue;
            }

            match self.state {
                State::Record => self.sequence.extend_from_slice(line),
                _ => {
                    if !line.is_empty() && self.orphan_line.is_none() {
                        self.orphan_line = Some(self.lines.line_number());
                    }
                }
            }
        }
    }
}
