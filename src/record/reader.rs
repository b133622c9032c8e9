//! Streaming reader for delimited numeric records

use super::config::RecordConfig;
use crate::common::{Error, Result};
use crate::value::{SentinelFloat, ValueParser};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One data line converted to floats
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    /// 1-based line number in the input
    pub line: usize,
    /// Converted fields in column order
    pub values: Vec<T>,
}

/// Convert the fields of a single line.
///
/// Errors are reported as [`Error::Record`] on line 1.
pub fn parse_fields<T: SentinelFloat>(line: &str, config: &RecordConfig<T>, parser: &ValueParser<T>) -> Result<Vec<T>> {
    convert_line(1, line.as_bytes(), config, parser)
}

fn convert_line<T: SentinelFloat>(
    line_no: usize,
    line: &[u8],
    config: &RecordConfig<T>,
    parser: &ValueParser<T>,
) -> Result<Vec<T>> {
    config
        .fields(line)
        .enumerate()
        .map(|(idx, field)| {
            parser
                .parse_bytes(field)
                .map_err(|e| e.in_record(line_no, idx + 1))
        })
        .collect()
}

/// Streaming reader yielding one [`Record`] per data line.
///
/// Blank lines, comment lines and the configured number of header lines
/// are skipped. Line numbers count every physical line.
pub struct RecordReader<R, T> {
    reader: R,
    config: RecordConfig<T>,
    parser: ValueParser<T>,
    buffer: Vec<u8>,
    line: usize,
    failed: bool,
}

impl<T: SentinelFloat> RecordReader<BufReader<File>, T> {
    /// Open a record file from a path
    pub fn open<P: AsRef<Path>>(path: P, config: RecordConfig<T>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(8192, file), config))
    }
}

impl<R: BufRead, T: SentinelFloat> RecordReader<R, T> {
    /// Create a reader over any buffered input
    pub fn new(reader: R, config: RecordConfig<T>) -> Self {
        let parser = ValueParser::with_config(config.value.clone());
        RecordReader {
            reader,
            config,
            parser,
            buffer: Vec::with_capacity(256),
            line: 0,
            failed: false,
        }
    }

    pub fn config(&self) -> &RecordConfig<T> {
        &self.config
    }

    /// Number of physical lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next data record, or `None` at end of input
    pub fn next_record(&mut self) -> Result<Option<Record<T>>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            if self.line <= self.config.skip_lines {
                continue;
            }

            let mut bytes = self.buffer.as_slice();
            if let Some(stripped) = bytes.strip_suffix(b"\n") {
                bytes = stripped;
            }
            if let Some(stripped) = bytes.strip_suffix(b"\r") {
                bytes = stripped;
            }

            if self.config.is_ignorable(bytes) {
                continue;
            }

            let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { line: self.line })?;
            let values = convert_line(self.line, text.as_bytes(), &self.config, &self.parser)?;
            return Ok(Some(Record {
                line: self.line,
                values,
            }));
        }
    }
}

impl<R: BufRead, T: SentinelFloat> Iterator for RecordReader<R, T> {
    type Item = Result<Record<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(Error::Io(e)) => {
                // The underlying reader is not resumable after an IO failure
                self.failed = true;
                Some(Err(Error::Io(e)))
            },
            Err(e) => {
                log::debug!("rejected record: {}", e);
                Some(Err(e))
            },
        }
    }
}

/// Read every record from `reader`, stopping at the first error
pub fn read_all<R: BufRead, T: SentinelFloat>(reader: R, config: RecordConfig<T>) -> Result<Vec<Record<T>>> {
    RecordReader::new(reader, config).collect()
}
