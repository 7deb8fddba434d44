//! Collection schedule resolution
//!
//! A `ScheduleBook` merges collection dates read from the schedule store
//! with the bundled defaults. Lookup order for a route:
//! stored override, UK default, Ireland default.

use std::collections::HashMap;

use crate::reference::{ireland_route_date, schedule::DEFAULT_COLLECTIONS};

#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    overrides: HashMap<String, String>,
}

impl ScheduleBook {
    /// A book backed only by the bundled defaults
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Effective collection date for a route
    pub fn date_for(&self, route: &str) -> Option<String> {
        if let Some(date) = self.overrides.get(route) {
            return Some(date.clone());
        }
        default_date_for(route).map(str::to_string)
    }

    /// Whether the route's date comes from the schedule store
    pub fn is_overridden(&self, route: &str) -> bool {
        self.overrides.contains_key(route)
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

/// Bundled date for a UK or Ireland route
pub fn default_date_for(route: &str) -> Option<&'static str> {
    DEFAULT_COLLECTIONS
        .iter()
        .find(|d| d.route == route)
        .map(|d| d.date)
        .or_else(|| ireland_route_date(route))
}
