use std::io::{self, BufRead, BufReader, Read};

use memchr::memchr;

/// Buffered source of whitespace-trimmed physical lines.
///
/// The reader owns the underlying stream, so dropping it releases the handle
/// whichever way parsing ends.
pub(crate) struct LineReader<R> {
    reader: BufReader<R>,
    line: Vec<u8>,
    line_number: u64,
}

impl<R: Read> LineReader<R> {
    /// A zero capacity is raised to one byte; an empty buffer would read as EOF.
    pub(crate) fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// 1-based number of the line most recently returned by `next_line`.
    pub(crate) fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Returns the next line without its terminator or surrounding ASCII
    /// whitespace, or `None` once the stream is exhausted.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        let mut read_any = false;

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if buf.is_empty() {
                if !read_any {
                    return Ok(None);
                }
                break;
            }
            read_any = true;

            match memchr(b'\n', buf) {
                Some(newline_pos) => {
                    self.line.extend_from_slice(&buf[..newline_pos]);
                    self.reader.consume(newline_pos + 1);
                    break;
                }
                None => {
                    let buf_len = buf.len();
                    self.line.extend_from_slice(buf);
                    self.reader.consume(buf_len);
                }
            }
        }

        self.line_number += 1;
        Ok(Some(self.line.trim_ascii()))
    }
}
