//! Structured error types for articlectl-db.
//!
//! Library operations return [`Error`]; the binary wraps it with `anyhow`
//! and decides whether to abort.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Main error type for articlectl-db operations
#[derive(Error, Debug)]
pub enum Error {
    /// Connection, statement, commit or row-decode failure
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Single-row fetch matched nothing
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Insert hit a primary-key or unique constraint
    #[error("conflict: {resource} violates {constraint}")]
    Conflict {
        resource: &'static str,
        constraint: String,
    },

    /// Configuration could not be resolved
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Config file could not be parsed
    #[error("invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for articlectl-db operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error for the given file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Map a unique violation from an insert or update onto [`Error::Conflict`].
    pub fn from_write(resource: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return Self::Conflict {
                    resource,
                    constraint: db_err.constraint().unwrap_or("unique key").to_owned(),
                };
            }
        }
        Self::Sqlx(err)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
