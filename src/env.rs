//! Environment snapshot derived from the application configuration
//!
//! The snapshot is never written into this process's environment. It is
//! handed to the compose invocation and applied to the child process only.

use crate::config::document::{scalar_or_empty, AppConfig};
use std::collections::BTreeMap;
use std::io::Write;

/// Compose profile and database kind
pub const DATABASE_SERVICE: &str = "DATABASE_SERVICE";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PATH: &str = "DB_PATH";
pub const REDIS_PORT: &str = "REDIS_PORT";

/// Variable name prefixes included in the report
pub const REPORT_PREFIXES: &[&str] = &["DATABASE_", "DB_", "REDIS_"];

/// Header printed before the variable listing
pub const REPORT_HEADER: &str = "Environment variables have been set:";

/// Fixed set of environment variables for the compose stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEnv {
    vars: Vec<(&'static str, String)>,
}

impl StackEnv {
    /// Derive the snapshot from a parsed configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let database = config.database.clone().unwrap_or_default();
        let redis = config.redis.clone().unwrap_or_default();

        let vars = vec![
            (DATABASE_SERVICE, scalar_or_empty(database.kind.as_ref())),
            (DB_USER, scalar_or_empty(database.user.as_ref())),
            (DB_PASSWORD, scalar_or_empty(database.password.as_ref())),
            (DB_PORT, scalar_or_empty(database.port.as_ref())),
            (DB_NAME, scalar_or_empty(database.name.as_ref())),
            (DB_PATH, scalar_or_empty(database.path.as_ref())),
            (REDIS_PORT, scalar_or_empty(redis.port.as_ref())),
        ];

        Self { vars }
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate variables in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Compose profile, empty when the database type is absent
    pub fn profile(&self) -> &str {
        self.get(DATABASE_SERVICE).unwrap_or_default()
    }

    /// Reportable variables the child sees: inherited `DATABASE_`/`DB_`/`REDIS_`
    /// variables overlaid with the snapshot
    pub fn report_vars<I, K, V>(&self, inherited: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: BTreeMap<String, String> = inherited
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| is_reported(key))
            .collect();

        for (key, value) in self.iter() {
            if is_reported(key) {
                vars.insert(key.to_string(), value.to_string());
            }
        }

        vars
    }

    /// Write the header and every reportable variable as `NAME=VALUE`
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let inherited = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        self.write_report_with(out, inherited)
    }

    /// Write the report against an explicit inherited environment
    pub fn write_report_with<W, I, K, V>(&self, out: &mut W, inherited: I) -> std::io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        writeln!(out, "{}", REPORT_HEADER)?;
        for (key, value) in self.report_vars(inherited) {
            writeln!(out, "{}={}", key, value)?;
        }
        Ok(())
    }
}

fn is_reported(key: &str) -> bool {
    REPORT_PREFIXES.iter().any(|prefix| key.starts_with(prefix))
}
