use crate::errors::SearchResult;
use crate::models::Carrier;
use crate::routes::RouteTable;
use rand::Rng;

/// Resolves the carriers, with their fleets, servicing a pair of cities.
pub trait CarrierSource: Send + Sync {
    fn find_carriers(&self, from_city: &str, to_city: &str) -> SearchResult<Vec<Carrier>>;
}

/// Carrier lookup backed by a static [`RouteTable`] and random fleets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSearch {
    table: RouteTable,
}

impl RouteSearch {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn find_carriers_with_rng<R: Rng + ?Sized>(
        &self,
        from_city: &str,
        to_city: &str,
        rng: &mut R,
    ) -> Vec<Carrier> {
        self.table
            .resolve(from_city, to_city)
            .iter()
            .map(|template| template.with_fleet(rng))
            .collect()
    }
}

impl CarrierSource for RouteSearch {
    fn find_carriers(&self, from_city: &str, to_city: &str) -> SearchResult<Vec<Carrier>> {
        let mut rng = rand::thread_rng();
        Ok(self.find_carriers_with_rng(from_city, to_city, &mut rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_known_route_generates_every_fleet() {
        let search = RouteSearch::default();
        let carriers = search.find_carriers("nyc", "washington").unwrap();

        assert_eq!(carriers.len(), 3);
        assert_eq!(carriers[0].name, "Knight-Swift Transport Services");
        for carrier in &carriers {
            assert_eq!(carrier.trucks.len() as u32, carrier.trucks_per_day);
        }
    }

    #[test]
    fn test_unknown_route_uses_default_carriers() {
        let search = RouteSearch::default();
        let carriers = search.find_carriers("Unknown", "City").unwrap();

        assert_eq!(carriers.len(), search.table().default_carriers().len());
        assert_eq!(carriers[0].name, "UPS Inc.");
        assert_eq!(carriers[0].trucks.len(), 11);
    }

    #[test]
    fn test_seeded_search_is_repeatable() {
        let search = RouteSearch::default();
        let first = search.find_carriers_with_rng("SF", "LA", &mut ChaCha8Rng::seed_from_u64(11));
        let second = search.find_carriers_with_rng("LA", "SF", &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
