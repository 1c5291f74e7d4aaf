//! Application configuration file parser

use super::document::AppConfig;
use crate::error::{Result, StackError};
use std::io::ErrorKind;
use std::path::Path;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "../configs/config.yml";

/// Configuration file parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse configuration file from path
    pub fn parse_file(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StackError::ConfigNotFound(path.to_path_buf()),
            _ => StackError::Io(e),
        })?;

        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        Self::parse_str(&content)
    }

    /// Parse configuration from string
    pub fn parse_str(content: &str) -> Result<AppConfig> {
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| StackError::ConfigParse(e.to_string()))?;

        // A document holding only comments or `~` is an empty config
        if value.is_null() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_value(value).map_err(|e| StackError::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document::Scalar;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
app:
  name: library
  port: 8080
database:
  type: postgres
  user: admin
  password: secret
  port: 5432
  name: books
  path: ./data/app.db
redis:
  host: localhost
  port: 6379
"#;

        let config = ConfigParser::parse_str(yaml).unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.kind, Some(Scalar::from("postgres")));
        assert_eq!(database.user, Some(Scalar::from("admin")));
        assert_eq!(database.port, Some(Scalar::Int(5432)));
        assert_eq!(database.path, Some(Scalar::from("./data/app.db")));
        assert_eq!(config.redis.unwrap().port, Some(Scalar::Int(6379)));
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(ConfigParser::parse_str("").unwrap(), AppConfig::default());
        assert_eq!(ConfigParser::parse_str("~\n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_null_section_is_absent() {
        let config = ConfigParser::parse_str("database:\nredis:\n  port:\n").unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.redis.unwrap().port, None);
    }

    #[test]
    fn test_malformed_yaml() {
        let result = ConfigParser::parse_str("database: {type: postgres\n");
        assert!(matches!(result, Err(StackError::ConfigParse(_))));
    }

    #[test]
    fn test_wrong_shape() {
        let result = ConfigParser::parse_str("- a\n- b\n");
        assert!(matches!(result, Err(StackError::ConfigParse(_))));

        let result = ConfigParser::parse_str("database:\n  port: [1, 2]\n");
        assert!(matches!(result, Err(StackError::ConfigParse(_))));
    }

    #[test]
    fn test_parse_file_not_found() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.yml");

        match ConfigParser::parse_file(&path) {
            Err(StackError::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "database:\n  type: mysql\n").unwrap();

        let config = ConfigParser::parse_file(&path).unwrap();
        assert_eq!(config.database.unwrap().kind, Some(Scalar::from("mysql")));
    }
}
