// Postcode prefix to collection route mapping
// Source: operations route planning sheet (UK mainland collection circuits)
//
// Keys are the full leading alphabetic run of a postcode's outward code
// ("SW" for SW1A, "B" for B33). A postcode only ever produces one such run,
// so "S" and "SW" can both be keys without competing.

/// A prefix rule assigning a postcode area to a collection route
#[derive(Debug, Clone)]
pub struct PrefixRoute {
    /// Postcode area letters (e.g., "SW", "B", "LS")
    pub prefix: &'static str,
    /// The collection route serving this postcode area
    pub route: &'static str,
}

pub const LONDON_ROUTE: &str = "LONDON ROUTE";
pub const HOME_COUNTIES_ROUTE: &str = "HOME COUNTIES ROUTE";
pub const SOUTH_EAST_ROUTE: &str = "SOUTH EAST ROUTE";
pub const SOUTH_WEST_ROUTE: &str = "SOUTH WEST ROUTE";
pub const EAST_ANGLIA_ROUTE: &str = "EAST ANGLIA ROUTE";
pub const MIDLANDS_ROUTE: &str = "MIDLANDS ROUTE";
pub const WALES_ROUTE: &str = "WALES ROUTE";
pub const NORTH_WEST_ROUTE: &str = "NORTH WEST ROUTE";
pub const YORKSHIRE_ROUTE: &str = "YORKSHIRE ROUTE";
pub const NORTH_EAST_ROUTE: &str = "NORTH EAST ROUTE";
pub const SCOTLAND_ROUTE: &str = "SCOTLAND ROUTE";

/// All UK collection routes, in display order
pub const UK_ROUTES: &[&str] = &[
    LONDON_ROUTE,
    HOME_COUNTIES_ROUTE,
    SOUTH_EAST_ROUTE,
    SOUTH_WEST_ROUTE,
    EAST_ANGLIA_ROUTE,
    MIDLANDS_ROUTE,
    WALES_ROUTE,
    NORTH_WEST_ROUTE,
    YORKSHIRE_ROUTE,
    NORTH_EAST_ROUTE,
    SCOTLAND_ROUTE,
];

pub const PREFIX_ROUTES: &[PrefixRoute] = &[
    // =========================================================================
    // LONDON
    // =========================================================================
    PrefixRoute { prefix: "E", route: LONDON_ROUTE },
    PrefixRoute { prefix: "EC", route: LONDON_ROUTE },
    PrefixRoute { prefix: "N", route: LONDON_ROUTE },
    PrefixRoute { prefix: "NW", route: LONDON_ROUTE },
    PrefixRoute { prefix: "SE", route: LONDON_ROUTE },
    PrefixRoute { prefix: "SW", route: LONDON_ROUTE },
    PrefixRoute { prefix: "W", route: LONDON_ROUTE },
    PrefixRoute { prefix: "WC", route: LONDON_ROUTE },
    PrefixRoute { prefix: "BR", route: LONDON_ROUTE },  // Bromley
    PrefixRoute { prefix: "CR", route: LONDON_ROUTE },  // Croydon
    PrefixRoute { prefix: "DA", route: LONDON_ROUTE },  // Dartford
    PrefixRoute { prefix: "EN", route: LONDON_ROUTE },  // Enfield
    PrefixRoute { prefix: "HA", route: LONDON_ROUTE },  // Harrow
    PrefixRoute { prefix: "IG", route: LONDON_ROUTE },  // Ilford
    PrefixRoute { prefix: "KT", route: LONDON_ROUTE },  // Kingston
    PrefixRoute { prefix: "RM", route: LONDON_ROUTE },  // Romford
    PrefixRoute { prefix: "SM", route: LONDON_ROUTE },  // Sutton
    PrefixRoute { prefix: "TW", route: LONDON_ROUTE },  // Twickenham
    PrefixRoute { prefix: "UB", route: LONDON_ROUTE },  // Southall

    // =========================================================================
    // HOME COUNTIES
    // =========================================================================
    PrefixRoute { prefix: "AL", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "HP", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "LU", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "MK", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "OX", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "RG", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "SG", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "SL", route: HOME_COUNTIES_ROUTE },
    PrefixRoute { prefix: "WD", route: HOME_COUNTIES_ROUTE },

    // =========================================================================
    // SOUTH EAST
    // =========================================================================
    PrefixRoute { prefix: "BN", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "CM", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "CT", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "GU", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "ME", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "PO", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "RH", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "SO", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "SS", route: SOUTH_EAST_ROUTE },
    PrefixRoute { prefix: "TN", route: SOUTH_EAST_ROUTE },

    // =========================================================================
    // SOUTH WEST (Devon and Cornwall are restricted, see restricted.rs)
    // =========================================================================
    PrefixRoute { prefix: "BA", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "BH", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "BS", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "DT", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "GL", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "SN", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "SP", route: SOUTH_WEST_ROUTE },
    PrefixRoute { prefix: "TA", route: SOUTH_WEST_ROUTE },

    // =========================================================================
    // EAST ANGLIA
    // =========================================================================
    PrefixRoute { prefix: "CB", route: EAST_ANGLIA_ROUTE },
    PrefixRoute { prefix: "CO", route: EAST_ANGLIA_ROUTE },
    PrefixRoute { prefix: "IP", route: EAST_ANGLIA_ROUTE },
    PrefixRoute { prefix: "NR", route: EAST_ANGLIA_ROUTE },
    PrefixRoute { prefix: "PE", route: EAST_ANGLIA_ROUTE },

    // =========================================================================
    // MIDLANDS
    // =========================================================================
    PrefixRoute { prefix: "B", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "CV", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "DE", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "DY", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "LE", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "NG", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "NN", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "ST", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "WR", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "WS", route: MIDLANDS_ROUTE },
    PrefixRoute { prefix: "WV", route: MIDLANDS_ROUTE },

    // =========================================================================
    // WALES
    // =========================================================================
    PrefixRoute { prefix: "CF", route: WALES_ROUTE },
    PrefixRoute { prefix: "LD", route: WALES_ROUTE },
    PrefixRoute { prefix: "LL", route: WALES_ROUTE },
    PrefixRoute { prefix: "NP", route: WALES_ROUTE },
    PrefixRoute { prefix: "SA", route: WALES_ROUTE },
    PrefixRoute { prefix: "SY", route: WALES_ROUTE },

    // =========================================================================
    // NORTH WEST
    // =========================================================================
    PrefixRoute { prefix: "M", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "L", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "BB", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "BL", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "CH", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "CW", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "FY", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "LA", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "OL", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "PR", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "SK", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "WA", route: NORTH_WEST_ROUTE },
    PrefixRoute { prefix: "WN", route: NORTH_WEST_ROUTE },

    // =========================================================================
    // YORKSHIRE
    // =========================================================================
    PrefixRoute { prefix: "S", route: YORKSHIRE_ROUTE },   // Sheffield
    PrefixRoute { prefix: "LS", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "BD", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "DN", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "HD", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "HG", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "HU", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "HX", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "WF", route: YORKSHIRE_ROUTE },
    PrefixRoute { prefix: "YO", route: YORKSHIRE_ROUTE },

    // =========================================================================
    // NORTH EAST
    // =========================================================================
    PrefixRoute { prefix: "DH", route: NORTH_EAST_ROUTE },
    PrefixRoute { prefix: "DL", route: NORTH_EAST_ROUTE },
    PrefixRoute { prefix: "NE", route: NORTH_EAST_ROUTE },
    PrefixRoute { prefix: "SR", route: NORTH_EAST_ROUTE },
    PrefixRoute { prefix: "TS", route: NORTH_EAST_ROUTE },
    PrefixRoute { prefix: "CA", route: NORTH_EAST_ROUTE },  // Carlisle

    // =========================================================================
    // SCOTLAND (Highlands and Islands are restricted)
    // =========================================================================
    PrefixRoute { prefix: "G", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "AB", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "DD", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "DG", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "EH", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "FK", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "KA", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "KY", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "ML", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "PH", route: SCOTLAND_ROUTE },
    PrefixRoute { prefix: "TD", route: SCOTLAND_ROUTE },
];

/// Get all prefixes assigned to a route
pub fn get_prefixes_for_route(route: &str) -> Vec<&'static str> {
    PREFIX_ROUTES
        .iter()
        .filter(|rule| rule.route == route)
        .map(|rule| rule.prefix)
        .collect()
}
