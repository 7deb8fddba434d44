//! Runtime configuration
//!
//! Resolved once at startup from CLI flags and the environment.

use std::path::PathBuf;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "postroute=info";
pub const VERBOSE_LOG_FILTER: &str = "postroute=debug";

const APP_DIR: &str = "postroute";
const DB_FILE: &str = "postroute.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Schedule store location; None when the store is disabled
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from an explicit path (flag or POSTROUTE_DB)
    /// and the --no-db switch
    ///
    /// Without an explicit path and without a platform data directory the
    /// store is disabled and lookups use bundled dates.
    pub fn resolve(db_path: Option<PathBuf>, no_db: bool) -> Self {
        if no_db {
            return Self { db_path: None };
        }
        let db_path = db_path.or_else(|| {
            let path = default_db_path();
            if path.is_none() {
                log::warn!("No data directory available; pass --db or set POSTROUTE_DB");
            }
            path
        });
        Self { db_path }
    }

    pub fn store_enabled(&self) -> bool {
        self.db_path.is_some()
    }
}

/// `<platform data dir>/postroute/postroute.db`
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DB_FILE))
}
