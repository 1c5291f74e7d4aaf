//! Docker Compose invocation
//!
//! Builds the `docker-compose` command line for starting or tearing down the
//! database stack and runs it with the derived environment.

pub mod command;
pub mod runner;

pub use command::{ComposeAction, ComposeRequest, DEFAULT_COMPOSE_BIN, DEFAULT_COMPOSE_FILE};
pub use runner::{ComposeCli, ComposeRunner, DryRun};
