//! Venue catalog adapters
//!
//! Provides [`StaticVenueCatalog`], a fixed in-process catalog implementing the
//! [`VenueCatalog`](rendezvous_application::VenueCatalog) port, and the
//! built-in campus buildings it defaults to.

mod campus;
mod static_catalog;

pub use campus::builtin_campus_venues;
pub use static_catalog::StaticVenueCatalog;
