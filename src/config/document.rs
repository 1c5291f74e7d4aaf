//! Application configuration document types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application configuration file
///
/// Only the sections the bootstrapper projects into the environment are
/// modelled; every other top-level key (`app`, `jwt`, `log`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database section
    #[serde(default)]
    pub database: Option<DatabaseSection>,
    /// Redis section
    #[serde(default)]
    pub redis: Option<RedisSection>,
}

/// Database section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// Database kind, doubles as the compose profile
    #[serde(default, rename = "type")]
    pub kind: Option<Scalar>,
    /// User name
    #[serde(default)]
    pub user: Option<Scalar>,
    /// Password
    #[serde(default)]
    pub password: Option<Scalar>,
    /// Port
    #[serde(default)]
    pub port: Option<Scalar>,
    /// Database name
    #[serde(default)]
    pub name: Option<Scalar>,
    /// Database file path (SQLite)
    #[serde(default)]
    pub path: Option<Scalar>,
}

/// Redis section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedisSection {
    /// Port
    #[serde(default)]
    pub port: Option<Scalar>,
}

/// A YAML scalar value
///
/// Displays the way the deployment scripts stringify config values:
/// `True`/`False`, `5432.0`, `1e+20`, `inf`, `nan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Float(x) => f.write_str(&format_float(*x)),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// Debug already switches to exponent form below 1e-4 and from 1e16 up;
/// only the exponent needs a sign and two digits.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", x);
    match repr.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => repr,
        },
        None => repr,
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

/// Render an optional scalar, absent values become the empty string
pub fn scalar_or_empty(value: Option<&Scalar>) -> String {
    value.map(Scalar::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from("postgres").to_string(), "postgres");
        assert_eq!(Scalar::from(5432).to_string(), "5432");
        assert_eq!(Scalar::Float(5432.0).to_string(), "5432.0");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Bool(true).to_string(), "True");
        assert_eq!(Scalar::Bool(false).to_string(), "False");
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(Scalar::Float(1e20).to_string(), "1e+20");
        assert_eq!(Scalar::Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Scalar::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Scalar::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Scalar::Float(0.00001).to_string(), "1e-05");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn test_large_unsigned_keeps_digits() {
        let big: Scalar = serde_yaml::from_str("18446744073709551615").unwrap();
        assert_eq!(big, Scalar::UInt(u64::MAX));
        assert_eq!(big.to_string(), "18446744073709551615");

        let float: Scalar = serde_yaml::from_str("1.0e+20").unwrap();
        assert_eq!(float.to_string(), "1e+20");
    }

    #[test]
    fn test_scalar_or_empty() {
        assert_eq!(scalar_or_empty(None), "");
        assert_eq!(scalar_or_empty(Some(&Scalar::from(6379))), "6379");
    }

    #[test]
    fn test_scalar_kinds_from_yaml() {
        let port: Scalar = serde_yaml::from_str("5432").unwrap();
        assert_eq!(port, Scalar::Int(5432));

        let quoted: Scalar = serde_yaml::from_str("\"5432\"").unwrap();
        assert_eq!(quoted, Scalar::String("5432".to_string()));

        let flag: Scalar = serde_yaml::from_str("false").unwrap();
        assert_eq!(flag, Scalar::Bool(false));
    }
}
