// Collection schedule store
//
// Rows override the bundled default collection dates. A route without a
// row uses its default.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::error::{Error, Result};
use crate::reference;
use crate::schedule::ScheduleBook;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Overrides older than this are reported as possibly out of date
pub const STALE_AFTER_DAYS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ScheduleEntry {
    pub route: String,
    pub collection_date: String,
    pub updated_at: String,
}

impl ScheduleEntry {
    /// Age in whole days, None if the timestamp cannot be parsed
    pub fn age_days(&self, now: NaiveDateTime) -> Option<i64> {
        NaiveDateTime::parse_from_str(&self.updated_at, TIMESTAMP_FORMAT)
            .ok()
            .map(|updated| (now - updated).num_days())
    }

    pub fn is_stale(&self, now: NaiveDateTime) -> bool {
        self.age_days(now).map_or(true, |age| age > STALE_AFTER_DAYS)
    }
}

pub async fn list_schedules(pool: &SqlitePool) -> Result<Vec<ScheduleEntry>> {
    let rows = sqlx::query_as::<_, ScheduleEntry>(
        "SELECT route, collection_date, updated_at FROM collection_schedules ORDER BY route",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_schedule(pool: &SqlitePool, route: &str) -> Result<Option<ScheduleEntry>> {
    let row = sqlx::query_as::<_, ScheduleEntry>(
        "SELECT route, collection_date, updated_at FROM collection_schedules WHERE route = ?",
    )
    .bind(route)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Store a collection date for a route, replacing any previous one
///
/// Route names are matched after uppercasing ("london route" is accepted).
pub async fn set_schedule(pool: &SqlitePool, route: &str, date: &str) -> Result<ScheduleEntry> {
    let route = route.trim().to_uppercase();
    if !reference::is_known_route(&route) {
        return Err(Error::UnknownRoute(route));
    }
    let date = date.trim();
    if date.is_empty() {
        return Err(Error::EmptyDate);
    }

    let updated_at = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    log::info!("Setting collection date for {} = {}", route, date);

    sqlx::query(
        r#"INSERT INTO collection_schedules (route, collection_date, updated_at)
           VALUES (?, ?, ?)
           ON CONFLICT(route) DO UPDATE SET
             collection_date = excluded.collection_date,
             updated_at = excluded.updated_at"#,
    )
    .bind(&route)
    .bind(date)
    .bind(&updated_at)
    .execute(pool)
    .await?;

    Ok(ScheduleEntry {
        route,
        collection_date: date.to_string(),
        updated_at,
    })
}

/// Remove a stored date so the route falls back to its default
///
/// Returns whether a row was removed.
pub async fn clear_schedule(pool: &SqlitePool, route: &str) -> Result<bool> {
    let route = route.trim().to_uppercase();
    let result = sqlx::query("DELETE FROM collection_schedules WHERE route = ?")
        .bind(&route)
        .execute(pool)
        .await?;

    let removed = result.rows_affected() > 0;
    if removed {
        log::info!("Cleared stored collection date for {}", route);
    }
    Ok(removed)
}

/// Build a ScheduleBook from every stored override
pub async fn load_schedule_book(pool: &SqlitePool) -> Result<ScheduleBook> {
    let entries = list_schedules(pool).await?;
    let now = Utc::now().naive_utc();

    for entry in &entries {
        if !reference::is_known_route(&entry.route) {
            log::warn!("Stored schedule for unknown route {} is ignored", entry.route);
        } else if entry.is_stale(now) {
            log::warn!(
                "Collection date for {} was last updated {} and may be out of date",
                entry.route,
                entry.updated_at
            );
        }
    }

    let book = ScheduleBook::with_overrides(
        entries
            .into_iter()
            .filter(|e| reference::is_known_route(&e.route))
            .map(|e| (e.route, e.collection_date)),
    );
    log::debug!("Loaded {} stored collection dates", book.override_count());
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_db;
    use crate::reference::routes::{LONDON_ROUTE, YORKSHIRE_ROUTE};

    #[tokio::test]
    async fn test_set_and_get_schedule() {
        let pool = init_memory_db().await.unwrap();

        let entry = set_schedule(&pool, "london route", " 20th of September ").await.unwrap();
        assert_eq!(entry.route, LONDON_ROUTE);
        assert_eq!(entry.collection_date, "20th of September");

        let stored = get_schedule(&pool, LONDON_ROUTE).await.unwrap();
        assert_eq!(stored, Some(entry));
        assert_eq!(get_schedule(&pool, YORKSHIRE_ROUTE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_schedule_upserts() {
        let pool = init_memory_db().await.unwrap();
        set_schedule(&pool, LONDON_ROUTE, "20th of September").await.unwrap();
        set_schedule(&pool, LONDON_ROUTE, "27th of September").await.unwrap();

        let all = list_schedules(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].collection_date, "27th of September");
    }

    #[tokio::test]
    async fn test_set_schedule_rejects_bad_input() {
        let pool = init_memory_db().await.unwrap();
        assert!(matches!(
            set_schedule(&pool, "NOWHERE ROUTE", "1st of May").await,
            Err(Error::UnknownRoute(_))
        ));
        assert!(matches!(
            set_schedule(&pool, LONDON_ROUTE, "   ").await,
            Err(Error::EmptyDate)
        ));
        assert!(list_schedules(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_schedule() {
        let pool = init_memory_db().await.unwrap();
        set_schedule(&pool, LONDON_ROUTE, "20th of September").await.unwrap();

        assert!(clear_schedule(&pool, LONDON_ROUTE).await.unwrap());
        assert!(!clear_schedule(&pool, LONDON_ROUTE).await.unwrap());
        assert!(list_schedules(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_schedule_book_falls_back_to_defaults() {
        let pool = init_memory_db().await.unwrap();
        set_schedule(&pool, LONDON_ROUTE, "20th of September").await.unwrap();

        // Rows for routes that no longer exist are skipped
        sqlx::query(
            "INSERT INTO collection_schedules (route, collection_date, updated_at)
             VALUES ('OLD ROUTE', 'never', '2020-01-01 00:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let book = load_schedule_book(&pool).await.unwrap();
        assert_eq!(book.override_count(), 1);
        assert_eq!(book.date_for(LONDON_ROUTE).as_deref(), Some("20th of September"));
        assert_eq!(book.date_for(YORKSHIRE_ROUTE).as_deref(), Some("10th of September"));
        assert_eq!(book.date_for("OLD ROUTE"), None);
    }

    #[test]
    fn test_staleness() {
        let now = NaiveDateTime::parse_from_str("2026-10-14 12:00:00", TIMESTAMP_FORMAT).unwrap();
        let entry = |updated_at: &str| ScheduleEntry {
            route: LONDON_ROUTE.to_string(),
            collection_date: "6th of September".to_string(),
            updated_at: updated_at.to_string(),
        };

        assert_eq!(entry("2026-10-04 12:00:00").age_days(now), Some(10));
        assert!(!entry("2026-10-04 12:00:00").is_stale(now));
        assert!(entry("2026-07-01 12:00:00").is_stale(now));
        assert!(entry("not a timestamp").is_stale(now));
    }
}
