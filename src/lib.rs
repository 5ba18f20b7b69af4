// src/lib.rs

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod parse;
pub mod record;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{LoaderConfig, ParseOptions, Source, DEFAULT_RESOURCE_PATH};
pub use error::{ConfigError, ErrorKind, LoadError};
pub use loader::TabularDataLoader;
pub use record::{Dataset, Record};
