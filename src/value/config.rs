//! Configuration for [`ValueParser`](super::ValueParser).

use super::float::SentinelFloat;
use serde::{Deserialize, Serialize};

/// Literal token meaning "value not available"
pub const NOT_AVAILABLE_MARKER: &str = "NAN";

/// What to do with a token that is neither the marker nor a valid number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Return [`Error::MalformedNumber`](crate::Error::MalformedNumber)
    #[default]
    Reject,
    /// C `atof` behavior: skip leading whitespace, parse the longest
    /// numeric prefix, and fall back to zero when nothing parses
    Zero,
    /// Treat the token like the marker and return the sentinel
    Sentinel,
}

/// Value parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: SentinelFloat + Deserialize<'de>"))]
pub struct ValueConfig<T> {
    /// Exact, case-sensitive token replaced by the sentinel
    pub marker: String,
    /// Value returned for the marker
    pub sentinel: T,
    /// Handling of tokens that fail to parse
    pub malformed: MalformedPolicy,
}

impl<T: SentinelFloat> Default for ValueConfig<T> {
    fn default() -> Self {
        Self {
            marker: NOT_AVAILABLE_MARKER.to_string(),
            sentinel: T::DEFAULT_SENTINEL,
            malformed: MalformedPolicy::Reject,
        }
    }
}

impl<T: SentinelFloat> ValueConfig<T> {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker token
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the sentinel returned for the marker
    pub fn with_sentinel(mut self, sentinel: T) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Set the malformed-token policy
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Reject malformed tokens (the default)
    pub fn strict() -> Self {
        Self::new()
    }

    /// `atof`-compatible configuration
    pub fn lenient() -> Self {
        Self::new().with_malformed(MalformedPolicy::Zero)
    }
}
