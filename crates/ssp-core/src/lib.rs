//! SSP-Core: Foundation types for seismic station signal processing
//!
//! Minimal shared types for the processing and simulation crates:
//! channel identity, interleaved sample blocks and the common error type.

pub mod sample_block;
pub mod channel;
pub mod error;

pub use sample_block::*;
pub use channel::*;
pub use error::{SspError, SspResult};
