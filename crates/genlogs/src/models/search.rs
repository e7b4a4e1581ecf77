use super::carrier::Carrier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub from_city: String,
    pub to_city: String,
}

impl SearchRequest {
    /// Both cities must be non-empty. Whitespace-only input is accepted and
    /// simply falls through to the default carriers.
    pub fn has_cities(&self) -> bool {
        !self.from_city.is_empty() && !self.to_city.is_empty()
    }
}

/// Search result echoing the cities exactly as they were sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub from_city: String,
    pub to_city: String,
    pub carriers: Vec<Carrier>,
}
