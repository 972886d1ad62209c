//! Fixed in-process venue catalog

use rendezvous_application::VenueCatalog;
use rendezvous_domain::Venue;

/// Venue catalog backed by a list loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct StaticVenueCatalog {
    venues: Vec<Venue>,
}

impl StaticVenueCatalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl VenueCatalog for StaticVenueCatalog {
    fn venues(&self) -> Vec<Venue> {
        self.venues.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venues::builtin_campus_venues;

    #[test]
    fn test_campus_catalog() {
        let catalog = StaticVenueCatalog::new(builtin_campus_venues());
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_search_by_name_or_abbreviation() {
        let catalog = StaticVenueCatalog::new(builtin_campus_venues());

        let hall = catalog.search("hall");
        assert_eq!(hall.len(), 3); // Haas, Stanley Coulter, Armstrong

        let walc = catalog.search("walc");
        assert_eq!(walc.len(), 1);
        assert_eq!(walc[0].display_name, "Wilmeth Active Learning Center");

        assert_eq!(catalog.search("").len(), 10);
        assert!(catalog.search("stadium").is_empty());
    }
}
