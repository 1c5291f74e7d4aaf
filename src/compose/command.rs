//! Compose command construction

use crate::env::StackEnv;
use crate::error::StackError;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default compose definition, relative to the working directory
pub const DEFAULT_COMPOSE_FILE: &str = "../deployments/docker-compose.yml";

/// Default orchestration executable
pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";

/// Lifecycle action requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// Build and start the stack detached
    Start,
    /// Tear the stack down
    Stop,
}

impl FromStr for ComposeAction {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ComposeAction::Start),
            "stop" => Ok(ComposeAction::Stop),
            _ => Err(StackError::Usage),
        }
    }
}

impl fmt::Display for ComposeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeAction::Start => write!(f, "start"),
            ComposeAction::Stop => write!(f, "stop"),
        }
    }
}

/// A single compose invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    /// Requested action
    pub action: ComposeAction,
    /// Profile passed with `--profile`, only set for start
    pub profile: Option<String>,
    /// Compose definition file
    pub compose_file: PathBuf,
}

impl ComposeRequest {
    /// Build the request for an action against the derived environment
    pub fn new(action: ComposeAction, env: &StackEnv, compose_file: impl AsRef<Path>) -> Self {
        let profile = match action {
            ComposeAction::Start => Some(env.profile().to_string()),
            ComposeAction::Stop => None,
        };

        Self {
            action,
            profile,
            compose_file: compose_file.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to the compose executable
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        if let Some(profile) = &self.profile {
            args.push("--profile".into());
            args.push(profile.into());
        }

        args.push("-f".into());
        args.push(self.compose_file.clone().into_os_string());

        match self.action {
            ComposeAction::Start => {
                args.extend(["up", "--build", "-d"].map(OsString::from));
            }
            ComposeAction::Stop => args.push("down".into()),
        }

        args
    }

    /// Shell-style rendering of the full command line
    pub fn command_line(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args().into_iter().map(|arg| arg.to_string_lossy().into_owned()))
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@".contains(c));

    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
