pub mod counter;
pub mod resolver;

pub use counter::{CountReport, DuplicateCounter};
pub use resolver::{DuplicateResolver, ResolveOutcome};
