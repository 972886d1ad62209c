//! Location fairness domain
//!
//! Venues come from a fixed catalog. The [`LocationFairnessResolver`] scores
//! each venue by the average and worst-case straight-line distance to the
//! located participants.

pub mod fairness;
pub mod venue;

pub use fairness::{LocationFairnessResolver, LocationScore};
pub use venue::Venue;
