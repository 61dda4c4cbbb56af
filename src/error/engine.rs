use std::io;

use thiserror::Error;

use crate::error::BufferError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    // ==== System / External ====
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // ==== Dump format ====
    #[error("Invalid integer token {token:?} at position {position}")]
    Parse { token: String, position: usize },

    #[error("Value {value} outside domain [0, {bound})")]
    ValueOutOfDomain { value: i64, bound: i64 },

    // ==== Store ====
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}
