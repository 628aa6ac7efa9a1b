//! Command-line tool configuration.
//!
//! This module loads the configuration of the `resdb` binary from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `RESDB_STATEMENTS_FILE`: Statement file to import (required)
//! - `RESDB_SELECT_PREDICATE`: Only print statements with this predicate (optional)
//! - `RESDB_DUMP`: Whether to dump the database after loading (default: `true`)
//!
//! Log filtering uses the standard `RUST_LOG` variable.

use std::path::PathBuf;

/// Environment variable naming the statement file.
pub const STATEMENTS_FILE_VAR: &str = "RESDB_STATEMENTS_FILE";
/// Environment variable holding an optional predicate filter.
pub const SELECT_PREDICATE_VAR: &str = "RESDB_SELECT_PREDICATE";
/// Environment variable toggling the dump.
pub const DUMP_VAR: &str = "RESDB_DUMP";

/// Tool configuration.
///
/// # Post-conditions
///
/// - `statements_file` is non-empty
/// - `select_predicate`, if present, is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// File to import statements from.
    pub statements_file: PathBuf,
    /// Print only statements with this predicate.
    pub select_predicate: Option<String>,
    /// Dump all statements after loading.
    pub dump: bool,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is missing.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(name) => {
                write!(f, "missing required environment variable: {name}")
            }
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ToolConfig {
    /// Dump setting when `RESDB_DUMP` is unset.
    pub const DEFAULT_DUMP: bool = true;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `RESDB_STATEMENTS_FILE` is not set or is empty
    /// - `RESDB_DUMP` is set but not `true` or `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` uses the process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let statements_file = lookup(STATEMENTS_FILE_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(STATEMENTS_FILE_VAR.to_string()))?;
        if statements_file.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: STATEMENTS_FILE_VAR.to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let select_predicate = lookup(SELECT_PREDICATE_VAR).filter(|p| !p.is_empty());

        let dump = match lookup(DUMP_VAR) {
            None => Self::DEFAULT_DUMP,
            Some(value) => match value.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: DUMP_VAR.to_string(),
                        message: format!("'{value}' is not a boolean (expected true or false)"),
                    });
                }
            },
        };

        Ok(Self {
            statements_file: PathBuf::from(statements_file),
            select_predicate,
            dump,
        })
    }
}
