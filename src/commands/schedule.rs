//! Route listing and schedule store commands
//!
//! This module handles:
//! - list_routes: every route with prefixes, effective date, areas
//! - list/set/clear_schedule: stored collection date overrides
//! - db_stats: store statistics

use std::io::Write;

use serde::Serialize;

use super::state::AppState;
use crate::db::{self, schedule::ScheduleEntry, DbStats};
use crate::error::Result;
use crate::reference;

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub route: &'static str,
    /// Postcode prefixes for UK routes, city names for Ireland routes
    pub keys: Vec<&'static str>,
    pub date: Option<String>,
    pub date_is_stored: bool,
    pub areas: Vec<&'static str>,
}

// ============================================================================
// Routes
// ============================================================================

pub fn list_routes(state: &AppState) -> Vec<RouteSummary> {
    reference::all_routes()
        .into_iter()
        .map(|route| RouteSummary {
            route,
            keys: reference::prefixes_for_route(route),
            date: state.schedule.date_for(route),
            date_is_stored: state.schedule.is_overridden(route),
            areas: reference::areas_for_route(route),
        })
        .collect()
}

pub fn print_routes<W: Write>(out: &mut W, routes: &[RouteSummary]) -> Result<()> {
    for summary in routes {
        writeln!(out, "{}", summary.route)?;
        writeln!(out, "  Keys:       {}", summary.keys.join(" "))?;
        writeln!(
            out,
            "  Collection: {}{}",
            summary.date.as_deref().unwrap_or("-"),
            if summary.date_is_stored { " (stored)" } else { "" }
        )?;
        writeln!(out, "  Areas:      {}", summary.areas.join(", "))?;
    }
    Ok(())
}

// ============================================================================
// Schedule Store
// ============================================================================

pub async fn list_schedule(state: &AppState) -> Result<Vec<ScheduleEntry>> {
    db::schedule::list_schedules(state.pool()?).await
}

pub async fn set_schedule(state: &mut AppState, route: &str, date: &str) -> Result<ScheduleEntry> {
    let entry = db::schedule::set_schedule(state.pool()?, route, date).await?;
    state.reload_schedule().await?;
    Ok(entry)
}

/// Remove a stored date, returning the entry that was removed
pub async fn clear_schedule(state: &mut AppState, route: &str) -> Result<Option<ScheduleEntry>> {
    let pool = state.pool()?;
    let route = route.trim().to_uppercase();
    let Some(previous) = db::schedule::get_schedule(pool, &route).await? else {
        return Ok(None);
    };
    db::schedule::clear_schedule(pool, &route).await?;
    state.reload_schedule().await?;
    Ok(Some(previous))
}

pub fn print_schedule<W: Write>(out: &mut W, entries: &[ScheduleEntry]) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "No stored collection dates; all routes use bundled defaults.")?;
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "{:<24} {:<20} (updated {})",
            entry.route, entry.collection_date, entry.updated_at
        )?;
    }
    Ok(())
}

pub async fn db_stats(state: &AppState) -> Result<DbStats> {
    db::get_db_stats(state.pool()?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_db;
    use crate::error::Error;
    use crate::reference::routes::LONDON_ROUTE;

    async fn memory_state() -> AppState {
        let pool = init_memory_db().await.unwrap();
        AppState::from_pool(pool).await.unwrap()
    }

    #[test]
    fn test_list_routes_offline() {
        let routes = list_routes(&AppState::offline());
        assert_eq!(routes.len(), reference::all_routes().len());

        let london = routes.iter().find(|r| r.route == LONDON_ROUTE).unwrap();
        assert!(london.keys.contains(&"SW"));
        assert_eq!(london.date.as_deref(), Some("6th of September"));
        assert!(!london.date_is_stored);

        let mut out = Vec::new();
        print_routes(&mut out, &routes).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("LONDON ROUTE\n  Keys:"));
    }

    #[tokio::test]
    async fn test_set_schedule_updates_lookups() {
        let mut state = memory_state().await;
        set_schedule(&mut state, LONDON_ROUTE, "20th of September").await.unwrap();

        let response = crate::commands::lookup::lookup_postcode(&state, "SW1A 1AA");
        assert_eq!(response.result.date.as_deref(), Some("20th of September"));

        let london = list_routes(&state).into_iter().find(|r| r.route == LONDON_ROUTE).unwrap();
        assert!(london.date_is_stored);

        let removed = clear_schedule(&mut state, "london route").await.unwrap();
        assert_eq!(
            removed.map(|e| e.collection_date).as_deref(),
            Some("20th of September")
        );
        assert_eq!(clear_schedule(&mut state, LONDON_ROUTE).await.unwrap(), None);
        let response = crate::commands::lookup::lookup_postcode(&state, "SW1A 1AA");
        assert_eq!(response.result.date.as_deref(), Some("6th of September"));
    }

    #[tokio::test]
    async fn test_store_commands_need_a_store() {
        let mut state = AppState::offline();
        assert!(matches!(list_schedule(&state).await, Err(Error::StoreDisabled)));
        assert!(matches!(
            set_schedule(&mut state, LONDON_ROUTE, "1st of May").await,
            Err(Error::StoreDisabled)
        ));
        assert!(matches!(
            clear_schedule(&mut state, LONDON_ROUTE).await,
            Err(Error::StoreDisabled)
        ));
        assert!(matches!(db_stats(&state).await, Err(Error::StoreDisabled)));
    }

    #[tokio::test]
    async fn test_stats_and_print_schedule() {
        let mut state = memory_state().await;
        let mut out = Vec::new();
        print_schedule(&mut out, &list_schedule(&state).await.unwrap()).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("bundled defaults"));

        set_schedule(&mut state, LONDON_ROUTE, "20th of September").await.unwrap();
        let stats = db_stats(&state).await.unwrap();
        assert_eq!(stats.schedule_count, 1);
        assert!(stats.last_updated.is_some());
    }
}
