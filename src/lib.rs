//! nanval - sentinel-aware float parsing for data ingestion
//!
//! Measurement and instrument files often write a missing reading as the
//! literal `NAN`. This library converts text tokens to floats, replacing
//! that marker with an out-of-band sentinel (`-9999.9` unless configured
//! otherwise), and reads whole delimited files of such values.
//!
//! # Features
//!
//! - **Value parsing**: [`parse_val`] and the configurable [`ValueParser`]
//! - **Explicit malformed-token policy**: reject, `atof`-style zero, or sentinel
//! - **`f32` and `f64`**: each with its own default sentinel
//! - **Record reading**: whitespace, CSV and TSV numeric files via [`record::RecordReader`]
//!
//! # Example - Single tokens
//!
//! ```
//! use nanval::{parse_val, ValueConfig, ValueParser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(parse_val("3.5", None)?, 3.5);
//! assert_eq!(parse_val("NAN", None)?, -9999.9);
//! assert!(parse_val("3.5abc", None).is_err());
//!
//! let parser = ValueParser::with_config(ValueConfig::<f32>::new().with_sentinel(-1.0));
//! assert_eq!(parser.parse("NAN")?, -1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Record files
//!
//! ```no_run
//! use nanval::record::{RecordConfig, RecordReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = RecordReader::<_, f64>::open("readings.csv", RecordConfig::csv().with_skip_lines(1))?;
//! for record in reader {
//!     let record = record?;
//!     println!("{}: {:?}", record.line, record.values);
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod record;
pub mod value;

pub use common::{Error, Result};
pub use value::{
    DEFAULT_SENTINEL, MalformedPolicy, NOT_AVAILABLE_MARKER, Reading, SentinelFloat, ValueConfig, ValueParser,
    parse_val, parse_val_lenient, parse_val_or_default,
};
