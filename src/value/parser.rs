//! Sentinel-aware token conversion.

use super::config::{MalformedPolicy, NOT_AVAILABLE_MARKER, ValueConfig};
use super::float::{DEFAULT_SENTINEL, SentinelFloat};
use crate::common::{Error, Result};

/// Outcome of reading one token, before any sentinel is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T> {
    /// Marker token, or a malformed token under [`MalformedPolicy::Sentinel`]
    Missing,
    /// Parsed number
    Value(T),
}

impl<T: Copy> Reading<T> {
    /// The parsed number, if any
    pub fn value(self) -> Option<T> {
        match self {
            Reading::Missing => None,
            Reading::Value(v) => Some(v),
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Reading::Missing)
    }

    /// Substitute `sentinel` for a missing reading
    pub fn unwrap_or(self, sentinel: T) -> T {
        self.value().unwrap_or(sentinel)
    }
}

impl<T: Copy> From<Reading<T>> for Option<T> {
    fn from(reading: Reading<T>) -> Self {
        reading.value()
    }
}

/// Reusable token parser holding a [`ValueConfig`].
///
/// ```
/// use nanval::{MalformedPolicy, ValueConfig, ValueParser};
///
/// let parser = ValueParser::<f64>::new();
/// assert_eq!(parser.parse("3.25")?, 3.25);
/// assert_eq!(parser.parse("NAN")?, -9999.9);
/// assert!(parser.parse("3.25 kg").is_err());
///
/// let lenient = ValueParser::with_config(ValueConfig::<f64>::new().with_malformed(MalformedPolicy::Zero));
/// assert_eq!(lenient.parse("3.25 kg")?, 3.25);
/// # Ok::<(), nanval::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueParser<T> {
    config: ValueConfig<T>,
}

impl<T: SentinelFloat> Default for ValueParser<T> {
    fn default() -> Self {
        Self::with_config(ValueConfig::default())
    }
}

impl<T: SentinelFloat> From<ValueConfig<T>> for ValueParser<T> {
    fn from(config: ValueConfig<T>) -> Self {
        Self::with_config(config)
    }
}

impl<T: SentinelFloat> ValueParser<T> {
    /// Create a parser with the default marker, sentinel and policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValueConfig<T>) -> Self {
        ValueParser { config }
    }

    pub fn config(&self) -> &ValueConfig<T> {
        &self.config
    }

    /// Whether `token` is exactly the configured marker
    pub fn is_marker(&self, token: &str) -> bool {
        token == self.config.marker
    }

    /// Convert a token, returning the sentinel for the marker
    pub fn parse(&self, token: &str) -> Result<T> {
        self.parse_bytes(token.as_bytes())
    }

    /// Byte-slice variant of [`parse`](Self::parse)
    pub fn parse_bytes(&self, token: &[u8]) -> Result<T> {
        Ok(self.read_bytes(token)?.unwrap_or(self.config.sentinel))
    }

    /// Convert a token without applying the sentinel
    pub fn read(&self, token: &str) -> Result<Reading<T>> {
        self.read_bytes(token.as_bytes())
    }

    pub fn read_bytes(&self, token: &[u8]) -> Result<Reading<T>> {
        resolve(token, self.config.marker.as_bytes(), self.config.malformed)
    }
}

/// Convert `token` to an `f64`, returning `sentinel` (or
/// [`DEFAULT_SENTINEL`] when `None`) for the `"NAN"` marker.
///
/// Tokens that are not valid float literals are rejected with
/// [`Error::MalformedNumber`]. Use [`parse_val_lenient`] for the
/// forgiving `atof` behavior.
pub fn parse_val(token: &str, sentinel: Option<f64>) -> Result<f64> {
    let reading = resolve(token.as_bytes(), NOT_AVAILABLE_MARKER.as_bytes(), MalformedPolicy::Reject)?;
    Ok(reading.unwrap_or(sentinel.unwrap_or(DEFAULT_SENTINEL)))
}

/// [`parse_val`] with the default sentinel
pub fn parse_val_or_default(token: &str) -> Result<f64> {
    parse_val(token, None)
}

/// Total variant of [`parse_val`]: malformed tokens are read like C `atof`,
/// so `" 12abc"` is `12.0` and `"abc"` is `0.0`.
pub fn parse_val_lenient(token: &str, sentinel: Option<f64>) -> f64 {
    let sentinel = sentinel.unwrap_or(DEFAULT_SENTINEL);
    if token == NOT_AVAILABLE_MARKER {
        return sentinel;
    }
    match fast_float2::parse::<f64, _>(token) {
        Ok(v) => v,
        Err(_) => parse_prefix(token.as_bytes()),
    }
}

fn resolve<T: SentinelFloat>(token: &[u8], marker: &[u8], policy: MalformedPolicy) -> Result<Reading<T>> {
    if token == marker {
        log::trace!("substituting sentinel for marker token");
        return Ok(Reading::Missing);
    }

    if let Ok(v) = fast_float2::parse::<T, _>(token) {
        return Ok(Reading::Value(v));
    }

    match policy {
        MalformedPolicy::Reject => Err(Error::malformed(token)),
        MalformedPolicy::Zero => {
            log::debug!("falling back to prefix parse for {:?}", String::from_utf8_lossy(token));
            Ok(Reading::Value(parse_prefix(token)))
        },
        MalformedPolicy::Sentinel => {
            log::debug!("treating malformed token {:?} as missing", String::from_utf8_lossy(token));
            Ok(Reading::Missing)
        },
    }
}

/// Longest-prefix parse after leading whitespace, zero when nothing parses
fn parse_prefix<T: SentinelFloat>(token: &[u8]) -> T {
    let start = token
        .iter()
        .position(|b| !is_c_space(*b))
        .unwrap_or(token.len());
    match fast_float2::parse_partial::<T, _>(&token[start..]) {
        Ok((v, _)) => v,
        Err(_) => T::ZERO,
    }
}

/// C `isspace` in the default locale, which also counts vertical tab
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
