//! Configuration file handling.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, TableConfig, DEFAULT_PAGE_SIZE};
