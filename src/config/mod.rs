//! Application configuration loading
//!
//! Reads the application's YAML configuration and exposes the database and
//! redis sections the compose stack depends on.

pub mod document;
pub mod parser;

pub use document::{AppConfig, DatabaseSection, RedisSection, Scalar};
pub use parser::{ConfigParser, DEFAULT_CONFIG_FILE};
