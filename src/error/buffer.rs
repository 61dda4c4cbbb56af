use thiserror::Error;

pub type BufferResult<T> = Result<T, BufferError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    // ==== Indexing ====
    #[error("Index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },

    // ==== Growth ====
    #[error("Capacity overflow while doubling past {capacity}")]
    CapacityOverflow { capacity: usize },

    // ==== Domain contract ====
    #[error("Value {value} outside domain [0, {bound})")]
    ValueOutOfDomain { value: i64, bound: i64 },
}
