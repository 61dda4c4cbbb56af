//! Input generation and text-dump persistence.
//!
//! This module provides the batch I/O around the buffer:
//!
//! - `generator`: fills the buffer with uniform pseudo-random domain
//!   values while streaming them to the input dump.
//! - `txt`: whitespace-separated text dumps of the buffer (save and
//!   load with domain validation).

pub mod generator;
pub mod txt;

pub use generator::*;
pub use txt::*;
