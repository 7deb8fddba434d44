// Ireland collection routes
// Ireland is served by city name rather than by postcode prefix.
// City keys are stored title-cased (first letter upper, rest lower).

/// A city served by an Ireland collection route
#[derive(Debug, Clone)]
pub struct IrelandCity {
    pub city: &'static str,
    pub route: &'static str,
}

/// Default collection date for an Ireland route
#[derive(Debug, Clone)]
pub struct IrelandRouteDate {
    pub route: &'static str,
    pub date: &'static str,
}

pub const DUBLIN_ROUTE: &str = "DUBLIN ROUTE";
pub const SOUTH_IRELAND_ROUTE: &str = "SOUTH IRELAND ROUTE";
pub const WEST_IRELAND_ROUTE: &str = "WEST IRELAND ROUTE";
pub const NORTHERN_IRELAND_ROUTE: &str = "NORTHERN IRELAND ROUTE";

pub const IRELAND_ROUTES: &[&str] = &[
    DUBLIN_ROUTE,
    SOUTH_IRELAND_ROUTE,
    WEST_IRELAND_ROUTE,
    NORTHERN_IRELAND_ROUTE,
];

pub const IRELAND_CITIES: &[IrelandCity] = &[
    IrelandCity { city: "Dublin", route: DUBLIN_ROUTE },
    IrelandCity { city: "Drogheda", route: DUBLIN_ROUTE },
    IrelandCity { city: "Dundalk", route: DUBLIN_ROUTE },
    IrelandCity { city: "Navan", route: DUBLIN_ROUTE },
    IrelandCity { city: "Kilkenny", route: DUBLIN_ROUTE },
    IrelandCity { city: "Cork", route: SOUTH_IRELAND_ROUTE },
    IrelandCity { city: "Waterford", route: SOUTH_IRELAND_ROUTE },
    IrelandCity { city: "Wexford", route: SOUTH_IRELAND_ROUTE },
    IrelandCity { city: "Tralee", route: SOUTH_IRELAND_ROUTE },
    IrelandCity { city: "Killarney", route: SOUTH_IRELAND_ROUTE },
    IrelandCity { city: "Galway", route: WEST_IRELAND_ROUTE },
    IrelandCity { city: "Limerick", route: WEST_IRELAND_ROUTE },
    IrelandCity { city: "Athlone", route: WEST_IRELAND_ROUTE },
    IrelandCity { city: "Sligo", route: WEST_IRELAND_ROUTE },
    IrelandCity { city: "Ennis", route: WEST_IRELAND_ROUTE },
    IrelandCity { city: "Belfast", route: NORTHERN_IRELAND_ROUTE },
    IrelandCity { city: "Derry", route: NORTHERN_IRELAND_ROUTE },
    IrelandCity { city: "Lisburn", route: NORTHERN_IRELAND_ROUTE },
    IrelandCity { city: "Newry", route: NORTHERN_IRELAND_ROUTE },
    IrelandCity { city: "Letterkenny", route: NORTHERN_IRELAND_ROUTE },
];

pub const IRELAND_ROUTE_DATES: &[IrelandRouteDate] = &[
    IrelandRouteDate { route: DUBLIN_ROUTE, date: "12th of September" },
    IrelandRouteDate { route: SOUTH_IRELAND_ROUTE, date: "13th of September" },
    IrelandRouteDate { route: WEST_IRELAND_ROUTE, date: "14th of September" },
    IrelandRouteDate { route: NORTHERN_IRELAND_ROUTE, date: "11th of September" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_keys_are_title_case() {
        for entry in IRELAND_CITIES {
            let mut chars = entry.city.chars();
            let first = chars.next().unwrap();
            assert!(first.is_uppercase(), "{} not title-cased", entry.city);
            assert!(chars.all(|c| !c.is_uppercase()), "{} not title-cased", entry.city);
        }
    }

    #[test]
    fn test_every_route_has_a_date() {
        for route in IRELAND_ROUTES {
            assert!(IRELAND_ROUTE_DATES.iter().any(|d| d.route == *route), "{} has no date", route);
        }
    }
}
