//! Error types for the schedule store and CLI
//!
//! The resolver never fails; only storage and configuration do.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration {name} failed on statement: {statement}: {source}")]
    Migration {
        name: &'static str,
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("collection date must not be empty")]
    EmptyDate,

    #[error("schedule store is not available; pass --db or drop --no-db")]
    StoreDisabled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
