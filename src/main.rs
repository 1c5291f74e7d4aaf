//! Stackup - bootstrap the database compose stack
//!
//! This is the main CLI entry point for Stackup.

use clap::error::ErrorKind;
use clap::Parser;
use stackup::compose::{ComposeCli, ComposeRunner, DryRun, DEFAULT_COMPOSE_BIN, DEFAULT_COMPOSE_FILE};
use stackup::config::DEFAULT_CONFIG_FILE;
use stackup::error::{Result, StackError};
use stackup::{Bootstrap, BootstrapOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Stackup - start or stop the database compose stack
#[derive(Parser)]
#[command(name = "stackup")]
#[command(version)]
#[command(about = "Start or stop the database compose stack described by the app config", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Compose file
    #[arg(short = 'f', long, default_value = DEFAULT_COMPOSE_FILE)]
    compose_file: PathBuf,

    /// Compose executable
    #[arg(long, default_value = DEFAULT_COMPOSE_BIN)]
    compose_bin: String,

    /// Print the compose command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Action: start or stop
    action: Option<String>,

    /// Application config file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Ignored extra arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", StackError::Usage);
                return ExitCode::FAILURE;
            }
        },
    };

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                StackError::Usage | StackError::ConfigParse(_) => println!("{}", err),
                _ => println!("Error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let bootstrap = Bootstrap::new(BootstrapOptions {
        action: cli.action,
        config_path: cli.config,
        compose_file: cli.compose_file,
    });

    let runner: Box<dyn ComposeRunner> = if cli.dry_run {
        Box::new(DryRun::new(cli.compose_bin, std::io::stdout()))
    } else {
        Box::new(ComposeCli::new(cli.compose_bin))
    };

    let mut stdout = std::io::stdout();
    bootstrap.run(runner.as_ref(), &mut stdout).await?;

    Ok(())
}
