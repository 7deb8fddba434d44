// Bundled default collection dates for UK routes
// Used whenever the schedule store has no row for a route.

use super::routes::*;

/// Default collection date for a UK route
#[derive(Debug, Clone)]
pub struct DefaultCollection {
    pub route: &'static str,
    /// Free text, shown to customers as-is
    pub date: &'static str,
}

pub const DEFAULT_COLLECTIONS: &[DefaultCollection] = &[
    DefaultCollection { route: LONDON_ROUTE, date: "6th of September" },
    DefaultCollection { route: HOME_COUNTIES_ROUTE, date: "6th of September" },
    DefaultCollection { route: SOUTH_EAST_ROUTE, date: "7th of September" },
    DefaultCollection { route: SOUTH_WEST_ROUTE, date: "8th of September" },
    DefaultCollection { route: EAST_ANGLIA_ROUTE, date: "7th of September" },
    DefaultCollection { route: MIDLANDS_ROUTE, date: "9th of September" },
    DefaultCollection { route: WALES_ROUTE, date: "8th of September" },
    DefaultCollection { route: NORTH_WEST_ROUTE, date: "10th of September" },
    DefaultCollection { route: YORKSHIRE_ROUTE, date: "10th of September" },
    DefaultCollection { route: NORTH_EAST_ROUTE, date: "11th of September" },
    DefaultCollection { route: SCOTLAND_ROUTE, date: "12th of September" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_uk_route_has_a_default() {
        for route in UK_ROUTES {
            assert!(
                DEFAULT_COLLECTIONS.iter().any(|d| d.route == *route),
                "{} has no default date",
                route
            );
        }
    }
}
