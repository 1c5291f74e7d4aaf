//! End-to-end bootstrap flow
//!
//! action token -> config file -> environment snapshot -> report -> compose

use crate::compose::{ComposeAction, ComposeRequest, ComposeRunner, DEFAULT_COMPOSE_FILE};
use crate::config::{ConfigParser, DEFAULT_CONFIG_FILE};
use crate::env::StackEnv;
use crate::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Bootstrap options
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Raw action token, validated by [`Bootstrap::run`]
    pub action: Option<String>,
    /// Application configuration file
    pub config_path: PathBuf,
    /// Compose definition file
    pub compose_file: PathBuf,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            action: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            compose_file: PathBuf::from(DEFAULT_COMPOSE_FILE),
        }
    }
}

/// Result of a successful bootstrap
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    /// Environment handed to compose
    pub env: StackEnv,
    /// Request that was invoked
    pub request: ComposeRequest,
    /// Exit code reported by the runner
    pub exit_code: Option<i32>,
}

/// Configuration bootstrapper
pub struct Bootstrap {
    options: BootstrapOptions,
}

impl Bootstrap {
    /// Create a bootstrapper
    pub fn new(options: BootstrapOptions) -> Self {
        Self { options }
    }

    /// Load the config, report the environment to `out` and invoke compose
    pub async fn run<W: Write>(
        &self,
        runner: &dyn ComposeRunner,
        out: &mut W,
    ) -> Result<BootstrapOutcome> {
        let action: ComposeAction = self
            .options
            .action
            .as_deref()
            .unwrap_or_default()
            .parse()?;

        tracing::debug!(
            "Loading configuration from {}",
            self.options.config_path.display()
        );
        let config = ConfigParser::parse_file(&self.options.config_path)?;

        let env = StackEnv::from_config(&config);
        env.write_report(out)?;
        out.flush()?;

        let request = ComposeRequest::new(action, &env, &self.options.compose_file);
        tracing::info!(
            "Compose {} with profile {:?}",
            action,
            request.profile.as_deref().unwrap_or("")
        );

        let exit_code = runner.invoke(&request, &env).await?;

        Ok(BootstrapOutcome {
            env,
            request,
            exit_code,
        })
    }
}
