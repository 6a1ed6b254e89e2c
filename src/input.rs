//! Line-oriented input reading

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Open a file for line reading; `-` selects standard input
pub fn open_path(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Reads raw byte lines, reusing one buffer.
///
/// A line ends at `\n`, `\r` or `\r\n`. A final line without a terminator is
/// still returned, and a trailing terminator does not produce an extra empty
/// line. Bytes are not decoded, so invalid UTF-8 reaches the validators instead
/// of failing the read.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    // previous line ended at `\r`; a `\n` right after it belongs to that terminator
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            skip_lf: false,
        }
    }

    /// Next line with its 1-based line number, or `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &[u8])>> {
        self.buf.clear();

        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut terminated = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    self.skip_lf = available[pos] == b'\r';
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    terminated = true;
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !terminated && self.buf.is_empty() {
            return Ok(None);
        }
        self.line_number += 1;

        Ok(Some((self.line_number, self.buf.as_slice())))
    }
}
