// Service areas covered by each collection route
// Display only: areas are never used to resolve a route.

use super::routes::*;

/// Placeholder shown when a route has no area list of its own
pub const AREA_NOT_SPECIFIED: &str = "Area not specified";

/// Areas served by a collection route
#[derive(Debug, Clone)]
pub struct RouteAreas {
    pub route: &'static str,
    pub areas: &'static [&'static str],
}

pub const ROUTE_AREAS: &[RouteAreas] = &[
    RouteAreas {
        route: LONDON_ROUTE,
        areas: &[
            "Central London",
            "North London",
            "East London",
            "South London",
            "West London",
            "Outer London",
        ],
    },
    RouteAreas {
        route: HOME_COUNTIES_ROUTE,
        areas: &[
            "St Albans",
            "Hemel Hempstead",
            "Luton",
            "Milton Keynes",
            "Oxford",
            "Reading",
            "Stevenage",
            "Slough",
            "Watford",
        ],
    },
    RouteAreas {
        route: SOUTH_EAST_ROUTE,
        areas: &[
            "Brighton",
            "Chelmsford",
            "Canterbury",
            "Guildford",
            "Maidstone",
            "Portsmouth",
            "Crawley",
            "Southampton",
            "Southend-on-Sea",
            "Tunbridge Wells",
        ],
    },
    RouteAreas {
        route: SOUTH_WEST_ROUTE,
        areas: &[
            "Bath",
            "Bournemouth",
            "Bristol",
            "Dorchester",
            "Gloucester",
            "Swindon",
            "Salisbury",
            "Taunton",
        ],
    },
    RouteAreas {
        route: EAST_ANGLIA_ROUTE,
        areas: &["Cambridge", "Colchester", "Ipswich", "Norwich", "Peterborough"],
    },
    RouteAreas {
        route: MIDLANDS_ROUTE,
        areas: &[
            "Birmingham",
            "Coventry",
            "Derby",
            "Dudley",
            "Leicester",
            "Nottingham",
            "Northampton",
            "Stoke-on-Trent",
            "Worcester",
            "Walsall",
            "Wolverhampton",
        ],
    },
    RouteAreas {
        route: WALES_ROUTE,
        areas: &["Cardiff", "Llandrindod Wells", "Llandudno", "Newport", "Swansea", "Shrewsbury"],
    },
    RouteAreas {
        route: NORTH_WEST_ROUTE,
        areas: &[
            "Manchester",
            "Liverpool",
            "Blackburn",
            "Bolton",
            "Chester",
            "Crewe",
            "Blackpool",
            "Lancaster",
            "Oldham",
            "Preston",
            "Stockport",
            "Warrington",
            "Wigan",
        ],
    },
    RouteAreas {
        route: YORKSHIRE_ROUTE,
        areas: &[
            "Sheffield",
            "Leeds",
            "Bradford",
            "Doncaster",
            "Huddersfield",
            "Harrogate",
            "Hull",
            "Halifax",
            "Wakefield",
            "York",
        ],
    },
    RouteAreas {
        route: NORTH_EAST_ROUTE,
        areas: &["Durham", "Darlington", "Newcastle", "Sunderland", "Middlesbrough", "Carlisle"],
    },
    RouteAreas {
        route: SCOTLAND_ROUTE,
        areas: &[
            "Glasgow",
            "Aberdeen",
            "Dundee",
            "Dumfries",
            "Edinburgh",
            "Falkirk",
            "Kilmarnock",
            "Kirkcaldy",
            "Motherwell",
            "Perth",
            "Galashiels",
        ],
    },
];
