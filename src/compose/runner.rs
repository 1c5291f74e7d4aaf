//! Compose invocation backends

use super::command::ComposeRequest;
use crate::env::StackEnv;
use crate::error::{Result, StackError};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;
use tokio::process::Command;

/// Runs a compose request
#[async_trait]
pub trait ComposeRunner: Send + Sync {
    /// Invoke compose and wait for it, returning the child's exit code
    async fn invoke(&self, request: &ComposeRequest, env: &StackEnv) -> Result<Option<i32>>;
}

/// Spawns the compose executable as a child process
#[derive(Debug, Clone)]
pub struct ComposeCli {
    program: String,
}

impl ComposeCli {
    /// Create a runner for the given executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ComposeRunner for ComposeCli {
    async fn invoke(&self, request: &ComposeRequest, env: &StackEnv) -> Result<Option<i32>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(request.args());
        cmd.envs(env.iter());

        tracing::info!("Running {}", request.command_line(&self.program));

        let spawn_err = |source: std::io::Error| StackError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = cmd.spawn().map_err(spawn_err)?;
        let status = child.wait().await.map_err(spawn_err)?;

        match status.code() {
            Some(0) => tracing::debug!("{} {} finished", self.program, request.action),
            Some(code) => tracing::warn!("{} exited with status {}", self.program, code),
            None => tracing::warn!("{} was terminated by a signal", self.program),
        }

        Ok(status.code())
    }
}

/// Prints the command line instead of running it
pub struct DryRun<W> {
    program: String,
    out: Mutex<W>,
}

impl<W: Write + Send> DryRun<W> {
    /// Create a dry runner writing to `out`
    pub fn new(program: impl Into<String>, out: W) -> Self {
        Self {
            program: program.into(),
            out: Mutex::new(out),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> ComposeRunner for DryRun<W> {
    async fn invoke(&self, request: &ComposeRequest, _env: &StackEnv) -> Result<Option<i32>> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", request.command_line(&self.program))?;
        Ok(None)
    }
}
