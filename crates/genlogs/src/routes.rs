//! Static route table and the city matcher.
//!
//! A route pairs two [`CityPattern`]s with the carriers that service it. Cities are
//! normalized before matching and each route is checked in both directions, so
//! `NYC -> Washington` and `Washington -> NYC` resolve to the same carriers. When several
//! routes could match the same input, the one listed first wins.

use crate::models::CarrierTemplate;

macro_rules! logo {
    ($domain:literal) => {
        concat!("https://logo.clearbit.com/", $domain)
    };
}

/// Describes which normalized city names belong to one end of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityPattern {
    /// Matches when the city contains any of these substrings
    pub contains: &'static [&'static str],
    /// Matches when the city is exactly one of these
    pub equals: &'static [&'static str],
}

impl CityPattern {
    pub const fn new(contains: &'static [&'static str], equals: &'static [&'static str]) -> Self {
        Self { contains, equals }
    }

    /// `city` is expected to be normalized already, see [`normalize_city`].
    pub fn matches(&self, city: &str) -> bool {
        self.contains.iter().any(|needle| city.contains(needle))
            || self.equals.iter().any(|exact| city == *exact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDefinition {
    pub name: &'static str,
    pub endpoints: [CityPattern; 2],
    pub carriers: &'static [CarrierTemplate],
}

impl RouteDefinition {
    /// Checks both directions against already normalized cities.
    pub fn matches(&self, from: &str, to: &str) -> bool {
        let [a, b] = &self.endpoints;
        (a.matches(from) && b.matches(to)) || (a.matches(to) && b.matches(from))
    }
}

pub static BUILTIN_ROUTES: &[RouteDefinition] = &[
    RouteDefinition {
        name: "NYC-WDC",
        endpoints: [
            CityPattern::new(&["new york", "nyc"], &[]),
            CityPattern::new(&["washington"], &[]),
        ],
        carriers: &[
            CarrierTemplate::new(
                "Knight-Swift Transport Services",
                10,
                logo!("knight-swift.com"),
            ),
            CarrierTemplate::new(
                "J.B. Hunt Transport Services Inc",
                7,
                logo!("jbhunt.com"),
            ),
            CarrierTemplate::new("YRC Worldwide", 5, logo!("yrcw.com")),
        ],
    },
    RouteDefinition {
        name: "SF-LA",
        endpoints: [
            CityPattern::new(&["san francisco"], &["sf"]),
            CityPattern::new(&["los angeles"], &["la"]),
        ],
        carriers: &[
            CarrierTemplate::new("XPO Logistics", 9, logo!("xpo.com")),
            CarrierTemplate::new("Schneider", 6, logo!("schneider.com")),
            CarrierTemplate::new("Landstar Systems", 2, logo!("landstar.com")),
        ],
    },
];

/// Carriers offered when no route matches.
pub static DEFAULT_CARRIERS: &[CarrierTemplate] = &[
    CarrierTemplate::new("UPS Inc.", 11, logo!("ups.com")),
    CarrierTemplate::new("FedEx Corp", 9, logo!("fedex.com")),
];

pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Read-only view over a list of routes and the fallback carriers.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDefinition],
    default_carriers: &'static [CarrierTemplate],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RouteTable {
    pub const fn new(
        routes: &'static [RouteDefinition],
        default_carriers: &'static [CarrierTemplate],
    ) -> Self {
        Self {
            routes,
            default_carriers,
        }
    }

    pub const fn builtin() -> Self {
        Self::new(BUILTIN_ROUTES, DEFAULT_CARRIERS)
    }

    pub fn routes(&self) -> &'static [RouteDefinition] {
        self.routes
    }

    pub fn default_carriers(&self) -> &'static [CarrierTemplate] {
        self.default_carriers
    }

    /// First route, in table order, whose endpoints match the cities in either direction.
    pub fn find_route(&self, from_city: &str, to_city: &str) -> Option<&'static RouteDefinition> {
        let from = normalize_city(from_city);
        let to = normalize_city(to_city);
        self.routes.iter().find(|route| route.matches(&from, &to))
    }

    pub fn resolve(&self, from_city: &str, to_city: &str) -> &'static [CarrierTemplate] {
        self.find_route(from_city, to_city)
            .map(|route| route.carriers)
            .unwrap_or(self.default_carriers)
    }
}
