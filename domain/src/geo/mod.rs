//! Geographic primitives
//!
//! Coordinates are WGS-84 degrees. Distances are straight-line great-circle
//! distances in meters; road networks and transit are out of scope.

pub mod coordinate;
pub mod distance;

pub use coordinate::{Coordinate, LocationInput};
pub use distance::{EARTH_RADIUS_METERS, geographic_center, haversine_meters};
