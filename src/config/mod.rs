pub mod settings;

pub use settings::{Settings, DEFAULT_DOMAIN_BOUND};
