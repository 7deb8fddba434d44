//! Application State
//!
//! Shared state handed to every command handler.

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::error::{Error, Result};
use crate::schedule::ScheduleBook;

/// Schedule store connection (if any) and the effective schedule
pub struct AppState {
    pub db: Option<SqlitePool>,
    pub schedule: ScheduleBook,
}

impl AppState {
    /// Open the schedule store read-only and load its overrides
    ///
    /// Used by lookups, which never write: a missing store is not created.
    /// A store that cannot be opened or read is logged and skipped; lookups
    /// then use the bundled default dates.
    pub async fn open(config: &Config) -> Self {
        let Some(path) = config.db_path.as_deref() else {
            return Self::offline();
        };

        let pool = match db::open_read_only(path).await {
            Ok(Some(pool)) => pool,
            Ok(None) => return Self::offline(),
            Err(e) => {
                log::warn!("Failed to open schedule store: {}; using bundled dates", e);
                return Self::offline();
            }
        };

        match Self::from_pool(pool.clone()).await {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to load collection schedules: {}; using bundled dates", e);
                Self {
                    db: Some(pool),
                    schedule: ScheduleBook::defaults(),
                }
            }
        }
    }

    /// Open the schedule store, failing if it cannot be used
    ///
    /// For commands that write to or report on the store itself.
    pub async fn open_required(config: &Config) -> Result<Self> {
        let path = config.db_path.as_deref().ok_or(Error::StoreDisabled)?;
        let pool = db::init_db(path).await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let schedule = db::schedule::load_schedule_book(&pool).await?;
        Ok(Self {
            db: Some(pool),
            schedule,
        })
    }

    pub fn offline() -> Self {
        Self {
            db: None,
            schedule: ScheduleBook::defaults(),
        }
    }

    pub fn pool(&self) -> Result<&SqlitePool> {
        self.db.as_ref().ok_or(Error::StoreDisabled)
    }

    /// Re-read overrides after the store has been changed
    pub async fn reload_schedule(&mut self) -> Result<()> {
        let schedule = db::schedule::load_schedule_book(self.pool()?).await?;
        self.schedule = schedule;
        Ok(())
    }
}
