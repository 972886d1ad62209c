//! Domain layer for rendezvous
//!
//! This crate contains the resolution engine: value objects, the geodistance
//! primitive and the two aggregation algorithms. It has no dependencies on
//! infrastructure or presentation concerns, performs no I/O and holds no
//! shared state, so every operation is safe to call concurrently.
//!
//! # Core Concepts
//!
//! ## Time consensus
//!
//! - **TimeSlotId**: a `(day, time)` cell on the availability grid
//! - **TimeConsensusResolver**: ranks cells by how many participants can attend
//!
//! ## Location fairness
//!
//! - **Venue**: a candidate meeting place from a fixed catalog
//! - **LocationFairnessResolver**: ranks venues by average distance to the
//!   located participants and exposes the fairness gap (max − average)

pub mod config;
pub mod core;
pub mod geo;
pub mod ranking;
pub mod resolution;
pub mod schedule;
pub mod submission;
pub mod venue;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use geo::{Coordinate, LocationInput, geographic_center, haversine_meters};
pub use ranking::{LocationPolicy, TimePolicy, leading_ties, top_k};
pub use resolution::MeetingResolution;
pub use schedule::{AvailabilityGrid, TimeConsensusResolver, TimeResolution, TimeSlotId};
pub use submission::ParticipantSubmission;
pub use venue::{LocationFairnessResolver, LocationScore, Venue};
