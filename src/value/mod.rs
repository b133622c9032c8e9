//! Sentinel-aware conversion of text tokens to floats
//!
//! Measurement files commonly write a missing reading as the literal `NAN`.
//! This module turns such tokens into a caller-chosen out-of-band sentinel
//! (`-9999.9` by default) and every other token into a float.
//!
//! # Malformed tokens
//!
//! A token that is neither the marker nor a float literal is handled by
//! [`MalformedPolicy`]: rejected with a typed error (default), read like C
//! `atof`, or mapped to the sentinel.
//!
//! # Example
//!
//! ```rust
//! use nanval::value::{parse_val, parse_val_lenient};
//!
//! assert_eq!(parse_val("42", None)?, 42.0);
//! assert_eq!(parse_val("NAN", Some(-1.0))?, -1.0);
//! assert_eq!(parse_val("NAN", None)?, -9999.9);
//! assert_eq!(parse_val_lenient("oops", None), 0.0);
//! # Ok::<(), nanval::Error>(())
//! ```

pub mod config;
pub mod float;
pub mod parser;

pub use config::{MalformedPolicy, NOT_AVAILABLE_MARKER, ValueConfig};
pub use float::{DEFAULT_SENTINEL, SentinelFloat};
pub use parser::{Reading, ValueParser, parse_val, parse_val_lenient, parse_val_or_default};

#[cfg(test)]
mod tests;
