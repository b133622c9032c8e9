//! Common types shared across modules.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
