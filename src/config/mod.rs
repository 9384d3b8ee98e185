//! Configuration loading and validation
//!
//! Torii-Robots is configured through a small TOML file covering the
//! crawler's identification and the fetch behavior. Every field has a
//! sensible default so the library and CLI work without any file at all.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, FetchConfig, UserAgentConfig};
pub use validation::validate;
