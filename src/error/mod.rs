pub mod buffer;
pub mod engine;

pub use buffer::{BufferError, BufferResult};
pub use engine::{EngineError, EngineResult};
