//! Record layout configuration

use crate::value::{SentinelFloat, ValueConfig};

/// Configuration for reading delimited numeric records
#[derive(Debug, Clone, PartialEq)]
pub struct RecordConfig<T> {
    /// Field delimiter (`None` splits on runs of ASCII whitespace)
    pub delimiter: Option<u8>,
    /// Comment character (lines starting with this are ignored)
    pub comment: Option<u8>,
    /// Number of leading lines to skip verbatim (headers)
    pub skip_lines: usize,
    /// Whether to trim ASCII whitespace around delimited fields
    pub trim_fields: bool,
    /// Conversion of each field
    pub value: ValueConfig<T>,
}

impl<T: SentinelFloat> Default for RecordConfig<T> {
    fn default() -> Self {
        Self {
            delimiter: None,     // Whitespace-separated columns
            comment: Some(b'#'), // Common comment character
            skip_lines: 0,
            trim_fields: true,
            value: ValueConfig::default(),
        }
    }
}

impl<T: SentinelFloat> RecordConfig<T> {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter (`None` for whitespace)
    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the comment character (None to disable comments)
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    /// Set the number of header lines to skip
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Enable/disable trimming of delimited fields
    pub fn with_trim_fields(mut self, trim: bool) -> Self {
        self.trim_fields = trim;
        self
    }

    /// Set the per-field value configuration
    pub fn with_value(mut self, value: ValueConfig<T>) -> Self {
        self.value = value;
        self
    }

    /// Whitespace-separated columns
    pub fn whitespace() -> Self {
        Self::new()
    }

    /// Comma-separated configuration
    pub fn csv() -> Self {
        Self::new().with_delimiter(Some(b','))
    }

    /// Tab-separated configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter(Some(b'\t'))
    }

    /// Split one line into raw fields
    pub fn fields<'a>(&self, line: &'a [u8]) -> Fields<'a> {
        Fields {
            rest: Some(line),
            delimiter: self.delimiter,
            trim: self.trim_fields,
        }
    }

    /// Whether a line carries no data (blank or comment)
    pub(crate) fn is_ignorable(&self, line: &[u8]) -> bool {
        match line.iter().find(|b| !b.is_ascii_whitespace()) {
            None => true,
            Some(&first) => self.comment == Some(first),
        }
    }
}

/// Iterator over the raw fields of a line
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: Option<&'a [u8]>,
    delimiter: Option<u8>,
    trim: bool,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest?;

        match self.delimiter {
            None => {
                let Some(start) = rest.iter().position(|b| !b.is_ascii_whitespace()) else {
                    self.rest = None;
                    return None;
                };
                let rest = &rest[start..];
                let end = rest
                    .iter()
                    .position(|b| b.is_ascii_whitespace())
                    .unwrap_or(rest.len());
                self.rest = Some(&rest[end..]);
                Some(&rest[..end])
            },
            Some(delimiter) => {
                let (field, tail) = match memchr::memchr(delimiter, rest) {
                    Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
                    None => (rest, None),
                };
                self.rest = tail;
                Some(if self.trim { field.trim_ascii() } else { field })
            },
        }
    }
}
