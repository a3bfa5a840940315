//! Wire-level request and response types for UI frontends.

pub mod types;

pub use types::*;
