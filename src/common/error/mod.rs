//! Unified error types for nanval.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
