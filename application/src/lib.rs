//! Application layer for rendezvous
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolutionSettings;
pub use ports::{
    submission_source::{MeetingSnapshot, SourceError, SubmissionSource},
    venue_catalog::VenueCatalog,
};
pub use use_cases::resolve_meeting::{
    ResolveMeetingError, ResolveMeetingInput, ResolveMeetingUseCase,
};
