//! Venue catalog port

use rendezvous_domain::Venue;

/// Read-only catalog of candidate venues
pub trait VenueCatalog: Send + Sync {
    /// All venues, in catalog order
    fn venues(&self) -> Vec<Venue>;

    /// Venues whose name or abbreviation contains `query`
    fn search(&self, query: &str) -> Vec<Venue> {
        self.venues()
            .into_iter()
            .filter(|venue| venue.matches(query))
            .collect()
    }
}
