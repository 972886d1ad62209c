//! Infrastructure layer for rendezvous
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;
pub mod venues;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGridConfig, FileOutputConfig, FileResolutionConfig, FileVenue,
    FileVenuesConfig,
};
pub use storage::{InMemorySubmissionStore, JsonFileSubmissionSource};
pub use venues::{StaticVenueCatalog, builtin_campus_venues};
