// Reference data module - collection routes, service areas, restrictions
// Source: operations route planning sheet
//
// Resolution strategy:
// - UK: leading letters of the postcode -> route (exact key, no fallback)
// - Ireland: title-cased city name -> route
// - Restriction is a separate check; the display layer gives it priority
// - Collection dates come from the ScheduleBook (stored override or default)

pub mod areas;
pub mod ireland;
pub mod postcode;
pub mod restricted;
pub mod routes;
pub mod schedule;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Serialize;

use crate::schedule::ScheduleBook;
use areas::{AREA_NOT_SPECIFIED, ROUTE_AREAS};
use ireland::{IRELAND_CITIES, IRELAND_ROUTES, IRELAND_ROUTE_DATES};
use restricted::RESTRICTED_PREFIXES;
use routes::{PREFIX_ROUTES, UK_ROUTES};

pub use postcode::{
    can_identify_partial_postcode, extract_prefix, is_long_enough_to_judge, is_valid_uk_postcode,
};

static ROUTE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static AREA_MAP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
static RESTRICTED_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static IRELAND_CITY_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static IRELAND_DATE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn route_map() -> &'static HashMap<&'static str, &'static str> {
    ROUTE_MAP.get_or_init(|| PREFIX_ROUTES.iter().map(|r| (r.prefix, r.route)).collect())
}

fn area_map() -> &'static HashMap<&'static str, &'static [&'static str]> {
    AREA_MAP.get_or_init(|| ROUTE_AREAS.iter().map(|a| (a.route, a.areas)).collect())
}

fn restricted_set() -> &'static HashSet<&'static str> {
    RESTRICTED_SET.get_or_init(|| RESTRICTED_PREFIXES.iter().copied().collect())
}

fn ireland_city_map() -> &'static HashMap<&'static str, &'static str> {
    IRELAND_CITY_MAP.get_or_init(|| IRELAND_CITIES.iter().map(|c| (c.city, c.route)).collect())
}

fn ireland_date_map() -> &'static HashMap<&'static str, &'static str> {
    IRELAND_DATE_MAP.get_or_init(|| IRELAND_ROUTE_DATES.iter().map(|d| (d.route, d.date)).collect())
}

/// Result of resolving one postcode or city
///
/// Built fresh for every query. A failed lookup is all None/empty/false,
/// never an error.
///
/// `can_identify` and `is_valid` describe the input itself and are not what
/// the display decides on. The display only asks `is_long_enough_to_judge`,
/// so "12" (no leading letter) is still
/// shown as not recognised while `can_identify` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub route: Option<String>,
    pub date: Option<String>,
    pub areas: Vec<String>,
    pub is_restricted: bool,
    pub is_valid: bool,
    pub can_identify: bool,
}

/// Look up the collection route for a UK postcode
///
/// Exact match on the full leading letter run: "SN" never falls back to "S".
pub fn route_for_postal_code(postcode: &str) -> Option<&'static str> {
    let prefix = extract_prefix(postcode)?;
    route_map().get(prefix.as_str()).copied()
}

/// Service areas for a route
///
/// A known route without its own area list gets the placeholder entry.
pub fn areas_for_route(route: &str) -> Vec<&'static str> {
    if let Some(areas) = area_map().get(route) {
        return areas.to_vec();
    }
    if is_known_route(route) {
        return vec![AREA_NOT_SPECIFIED];
    }
    Vec::new()
}

/// Service areas for a UK postcode, empty when no route matches
pub fn areas_for_postal_code(postcode: &str) -> Vec<&'static str> {
    match route_for_postal_code(postcode) {
        Some(route) => areas_for_route(route),
        None => Vec::new(),
    }
}

/// Whether the postcode's area is excluded from collection
pub fn is_restricted_postal_code(postcode: &str) -> bool {
    match extract_prefix(postcode) {
        Some(prefix) => restricted_set().contains(prefix.as_str()),
        None => false,
    }
}

/// Look up the collection route for an Ireland city
///
/// Case handling is title-casing only ("BELFAST" -> "Belfast"), then an
/// exact match. No partial or fuzzy matching.
pub fn route_for_ireland_city(city: &str) -> Option<&'static str> {
    let normalized = postcode::normalize_city_name(city);
    if normalized.is_empty() {
        return None;
    }
    ireland_city_map().get(normalized.as_str()).copied()
}

/// Bundled collection date for an Ireland route
pub fn ireland_route_date(route: &str) -> Option<&'static str> {
    ireland_date_map().get(route).copied()
}

/// Resolve a UK postcode into a full lookup result
pub fn lookup_postcode(postcode: &str, schedule: &ScheduleBook) -> LookupResult {
    let route = route_for_postal_code(postcode);

    LookupResult {
        route: route.map(str::to_string),
        date: route.and_then(|r| schedule.date_for(r)),
        areas: route
            .map(areas_for_route)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect(),
        is_restricted: is_restricted_postal_code(postcode),
        is_valid: is_valid_uk_postcode(postcode),
        can_identify: can_identify_partial_postcode(postcode),
    }
}

/// Resolve an Ireland city into a full lookup result
///
/// Ireland has no restricted areas and no postcode format check, so a
/// matched city counts as both valid and identifiable.
pub fn lookup_ireland_city(city: &str, schedule: &ScheduleBook) -> LookupResult {
    let route = route_for_ireland_city(city);

    LookupResult {
        route: route.map(str::to_string),
        date: route.and_then(|r| schedule.date_for(r)),
        areas: route
            .map(areas_for_route)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect(),
        is_restricted: false,
        is_valid: route.is_some(),
        can_identify: route.is_some(),
    }
}

/// Every route name, UK first, then Ireland
pub fn all_routes() -> Vec<&'static str> {
    UK_ROUTES.iter().chain(IRELAND_ROUTES.iter()).copied().collect()
}

/// Whether a name is one of the known UK or Ireland routes
pub fn is_known_route(route: &str) -> bool {
    UK_ROUTES.contains(&route) || IRELAND_ROUTES.contains(&route)
}

/// Prefixes (UK) or cities (Ireland) that resolve to a route
pub fn prefixes_for_route(route: &str) -> Vec<&'static str> {
    if IRELAND_ROUTES.contains(&route) {
        return IRELAND_CITIES
            .iter()
            .filter(|c| c.route == route)
            .map(|c| c.city)
            .collect();
    }
    routes::get_prefixes_for_route(route)
}
