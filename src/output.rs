//! TSV line writer

use std::io::{self, Write};

use crate::model::{COLON, TAB};

/// Writes tab-joined lines without quoting or escaping
pub struct TsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one row, values joined by tab
    pub fn write_row(&mut self, values: &[&str]) -> io::Result<()> {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(&[TAB])?;
            }
            self.inner.write_all(value.as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    /// Write `key<TAB>v1:v2:...`
    pub fn write_group(&mut self, key: &str, values: &[String]) -> io::Result<()> {
        self.inner.write_all(key.as_bytes())?;
        self.inner.write_all(&[TAB])?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(&[COLON])?;
            }
            self.inner.write_all(value.as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
