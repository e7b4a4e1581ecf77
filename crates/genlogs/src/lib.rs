pub mod errors;
pub mod fleet;
pub mod models;
pub mod routes;
pub mod search;

/// Name reported by the health endpoint.
pub const SERVICE_TITLE: &str = "Genlogs Logistics Search API";

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SERVICE_DESCRIPTION: &str =
    "API for fetching logistics carriers and truck data based on specified routes.";
