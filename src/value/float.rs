//! Float widths the value parser can produce.

use fast_float2::FastFloat;
use std::fmt::Debug;

/// Default placeholder for "no valid reading", as an `f64`.
pub const DEFAULT_SENTINEL: f64 = -9999.9;

/// A float width with a default out-of-band sentinel.
///
/// Implemented for `f32` and `f64`. The sentinel is the same decimal
/// literal in both widths, rounded to the nearest representable value.
pub trait SentinelFloat: FastFloat + Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Value returned for the marker token when no sentinel is configured
    const DEFAULT_SENTINEL: Self;
    /// Fallback for tokens with no parseable prefix under the zero policy
    const ZERO: Self;
}

impl SentinelFloat for f32 {
    const DEFAULT_SENTINEL: Self = -9999.9;
    const ZERO: Self = 0.0;
}

impl SentinelFloat for f64 {
    const DEFAULT_SENTINEL: Self = DEFAULT_SENTINEL;
    const ZERO: Self = 0.0;
}
