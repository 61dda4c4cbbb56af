/// Runtime configuration loading.
pub mod config;
/// Duplicate handling: counting and nearest-free-slot resolution.
pub mod dedup;
/// Batch I/O: input generation and text-dump persistence.
pub mod engine;
/// Common error types: buffer access, parsing, I/O.
pub mod error;
/// Flexible logging (filters, sinks).
pub mod logging;
/// Built-in data structures (IntBuffer, DomainBitmap).
pub mod store;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use config::{Settings, DEFAULT_DOMAIN_BOUND};
/// Duplicate counter and resolver.
pub use dedup::{CountReport, DuplicateCounter, DuplicateResolver, ResolveOutcome};
/// Persistence and input generation.
pub use engine::{load_from_txt, parse_dump, save_to_txt, ValueGenerator};
/// Operation errors and result types.
pub use error::{BufferError, BufferResult, EngineError, EngineResult};
/// Logging API.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Data types: IntBuffer, DomainBitmap.
pub use store::{DomainBitmap, IntBuffer, MIN_CAPACITY};
