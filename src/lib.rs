//! Stackup - bootstrap the database compose stack from application config
//!
//! Stackup reads the application's YAML configuration, derives the
//! environment the compose stack expects and runs `docker-compose`:
//!
//! - `start` builds and starts the stack detached, using the configured
//!   database type as the compose profile
//! - `stop` tears the stack down

pub mod bootstrap;
pub mod compose;
pub mod config;
pub mod env;
pub mod error;

pub use bootstrap::{Bootstrap, BootstrapOptions, BootstrapOutcome};
pub use error::{Result, StackError};
