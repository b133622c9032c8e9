//! Delimited numeric record reading
//!
//! Reads line-oriented measurement files (whitespace, comma or tab
//! separated) and converts every field through a
//! [`ValueParser`](crate::value::ValueParser), so `NAN` readings become the
//! configured sentinel.
//!
//! # Example
//!
//! ```rust
//! use nanval::record::{RecordConfig, RecordReader};
//!
//! let data = "# station temperature\n1 12.5\n2 NAN\n";
//! let reader = RecordReader::<_, f64>::new(data.as_bytes(), RecordConfig::whitespace());
//!
//! for record in reader {
//!     let record = record?;
//!     println!("line {}: {:?}", record.line, record.values);
//! }
//! # Ok::<(), nanval::Error>(())
//! ```

pub mod config;
pub mod reader;

pub use config::{Fields, RecordConfig};
pub use reader::{Record, RecordReader, parse_fields, read_all};
