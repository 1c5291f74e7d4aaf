//! Error types for Stackup

use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed for a missing or unrecognized action token
pub const USAGE: &str = "Usage: setup.py [start|stop] [config_file]";

/// Result type for Stackup operations
pub type Result<T> = std::result::Result<T, StackError>;

/// Stackup error types
#[derive(Error, Debug)]
pub enum StackError {
    #[error("Config file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Error parsing YAML file: {0}")]
    ConfigParse(String),

    #[error("Usage: setup.py [start|stop] [config_file]")]
    Usage,

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
