//! Lookup display state
//!
//! Decides what a customer sees for the current input:
//! - `Empty`: nothing typed yet, or too little to judge
//! - `Restricted`: the area is excluded from collection
//! - `Unrecognized`: no route for plausible-length input
//! - `Resolved`: route, collection date and areas
//!
//! Re-derived from scratch on every input change; holds no history.

use std::fmt;

use serde::Serialize;

use crate::reference::{self, areas::AREA_NOT_SPECIFIED, LookupResult};
use crate::schedule::ScheduleBook;

pub const RESTRICTED_MESSAGE: &str =
    "Sorry, we do not currently collect from this area. Please contact us to arrange an alternative.";
pub const UNRECOGNIZED_MESSAGE: &str =
    "Postcode area not recognised. Please check the postcode and try again.";
pub const UNRECOGNIZED_CITY_MESSAGE: &str =
    "City not recognised. Please check the spelling or choose the nearest listed city.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupDisplay {
    Empty,
    Restricted,
    Unrecognized { message: &'static str },
    Resolved {
        route: String,
        date: Option<String>,
        areas: Vec<String>,
    },
}

impl LookupDisplay {
    /// Display state for a UK postcode lookup
    pub fn from_result(input: &str, result: &LookupResult) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LookupDisplay::Empty;
        }
        if result.is_restricted {
            return LookupDisplay::Restricted;
        }
        Self::route_or_unrecognized(trimmed, result, UNRECOGNIZED_MESSAGE)
    }

    /// Display state for an Ireland city lookup (no restricted areas)
    pub fn from_city_result(input: &str, result: &LookupResult) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LookupDisplay::Empty;
        }
        Self::route_or_unrecognized(trimmed, result, UNRECOGNIZED_CITY_MESSAGE)
    }

    fn route_or_unrecognized(trimmed: &str, result: &LookupResult, message: &'static str) -> Self {
        match &result.route {
            Some(route) => LookupDisplay::Resolved {
                route: route.clone(),
                date: result.date.clone(),
                areas: displayable_areas(&result.areas),
            },
            None if reference::is_long_enough_to_judge(trimmed) => {
                LookupDisplay::Unrecognized { message }
            }
            None => LookupDisplay::Empty,
        }
    }

    /// Resolve and classify a UK postcode in one step
    pub fn for_postcode(input: &str, schedule: &ScheduleBook) -> Self {
        Self::from_result(input, &reference::lookup_postcode(input, schedule))
    }

    /// Resolve and classify an Ireland city in one step
    pub fn for_ireland_city(input: &str, schedule: &ScheduleBook) -> Self {
        Self::from_city_result(input, &reference::lookup_ireland_city(input, schedule))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LookupDisplay::Empty)
    }
}

/// The placeholder entry alone means there is nothing to list
fn displayable_areas(areas: &[String]) -> Vec<String> {
    if areas.len() == 1 && areas[0] == AREA_NOT_SPECIFIED {
        return Vec::new();
    }
    areas.to_vec()
}

impl fmt::Display for LookupDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupDisplay::Empty => Ok(()),
            LookupDisplay::Restricted => write!(f, "{}", RESTRICTED_MESSAGE),
            LookupDisplay::Unrecognized { message } => write!(f, "{}", message),
            LookupDisplay::Resolved { route, date, areas } => {
                write!(f, "Route: {}", route)?;
                if let Some(date) = date {
                    write!(f, "\nNext collection: {}", date)?;
                }
                if !areas.is_empty() {
                    write!(f, "\nAreas covered: {}", areas.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ireland::NORTHERN_IRELAND_ROUTE;
    use crate::reference::routes::LONDON_ROUTE;

    fn book() -> ScheduleBook {
        ScheduleBook::defaults()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(LookupDisplay::for_postcode("", &book()), LookupDisplay::Empty);
        assert_eq!(LookupDisplay::for_postcode("   ", &book()), LookupDisplay::Empty);
        assert_eq!(LookupDisplay::for_postcode("", &book()).to_string(), "");
    }

    #[test]
    fn test_restricted() {
        let display = LookupDisplay::for_postcode("EX4 5AB", &book());
        assert_eq!(display, LookupDisplay::Restricted);
        assert_eq!(display.to_string(), RESTRICTED_MESSAGE);
    }

    #[test]
    fn test_restricted_takes_priority_over_route() {
        let result = LookupResult {
            route: Some(LONDON_ROUTE.to_string()),
            date: Some("6th of September".to_string()),
            areas: vec!["North London".to_string()],
            is_restricted: true,
            is_valid: true,
            can_identify: true,
        };
        assert_eq!(LookupDisplay::from_result("SW1A 1AA", &result), LookupDisplay::Restricted);
    }

    #[test]
    fn test_unrecognized_needs_two_characters() {
        assert_eq!(
            LookupDisplay::for_postcode("ZZ", &book()),
            LookupDisplay::Unrecognized { message: UNRECOGNIZED_MESSAGE }
        );
        assert_eq!(
            LookupDisplay::for_postcode("12", &book()),
            LookupDisplay::Unrecognized { message: UNRECOGNIZED_MESSAGE }
        );
        // Single unknown letter is suppressed
        assert_eq!(LookupDisplay::for_postcode("Z", &book()), LookupDisplay::Empty);
    }

    #[test]
    fn test_unrecognized_uses_length_not_can_identify() {
        // No leading letter: not identifiable, yet long enough to report
        let result = reference::lookup_postcode("12", &book());
        assert!(!result.can_identify);
        assert!(reference::is_long_enough_to_judge("12"));
        assert_eq!(
            LookupDisplay::from_result("12", &result),
            LookupDisplay::Unrecognized { message: UNRECOGNIZED_MESSAGE }
        );

        // Letter-led input: the two rules agree
        for input in ["Z", "ZZ", "ZZ9 9"] {
            let result = reference::lookup_postcode(input, &book());
            let shown = !LookupDisplay::from_result(input, &result).is_empty();
            assert_eq!(shown, result.can_identify, "input {:?}", input);
        }
    }

    #[test]
    fn test_resolved_london() {
        let display = LookupDisplay::for_postcode("SW1A 1AA", &book());
        match &display {
            LookupDisplay::Resolved { route, date, areas } => {
                assert_eq!(route, LONDON_ROUTE);
                assert_eq!(date.as_deref(), Some("6th of September"));
                assert!(areas.iter().any(|a| a == "East London"));
            }
            other => panic!("Expected Resolved, got {:?}", other),
        }

        let text = display.to_string();
        assert!(text.starts_with(
            "Route: LONDON ROUTE\nNext collection: 6th of September\nAreas covered: "
        ));
    }

    #[test]
    fn test_single_letter_known_prefix_resolves() {
        assert!(matches!(
            LookupDisplay::for_postcode("B", &book()),
            LookupDisplay::Resolved { .. }
        ));
    }

    #[test]
    fn test_resolved_without_date_or_areas() {
        let result = LookupResult {
            route: Some("TEST ROUTE".to_string()),
            date: None,
            areas: vec![AREA_NOT_SPECIFIED.to_string()],
            ..Default::default()
        };
        let display = LookupDisplay::from_result("T1", &result);
        assert_eq!(
            display,
            LookupDisplay::Resolved {
                route: "TEST ROUTE".to_string(),
                date: None,
                areas: Vec::new(),
            }
        );
        assert_eq!(display.to_string(), "Route: TEST ROUTE");
    }

    #[test]
    fn test_ireland_city_display() {
        let display = LookupDisplay::for_ireland_city("BELFAST", &book());
        assert_eq!(
            display,
            LookupDisplay::Resolved {
                route: NORTHERN_IRELAND_ROUTE.to_string(),
                date: Some("11th of September".to_string()),
                areas: Vec::new(),
            }
        );
        assert_eq!(
            LookupDisplay::for_ireland_city("Atlantis", &book()),
            LookupDisplay::Unrecognized { message: UNRECOGNIZED_CITY_MESSAGE }
        );
        assert!(LookupDisplay::for_ireland_city(" ", &book()).is_empty());
    }

    #[test]
    fn test_serializes_with_state_tag() {
        let json = serde_json::to_value(LookupDisplay::Restricted).unwrap();
        assert_eq!(json["state"], "restricted");

        let json = serde_json::to_value(LookupDisplay::for_postcode("LS1 4DP", &book())).unwrap();
        assert_eq!(json["state"], "resolved");
        assert_eq!(json["route"], "YORKSHIRE ROUTE");
    }
}
