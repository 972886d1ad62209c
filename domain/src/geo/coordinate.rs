//! Coordinate value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated geographic coordinate (Value Object)
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`, both finite.
///
/// # Example
///
/// ```
/// use rendezvous_domain::geo::Coordinate;
///
/// let lawson = Coordinate::new(40.4283, -86.9162).unwrap();
/// assert_eq!(lawson.lat(), 40.4283);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinate(format!(
                "non-finite value (lat={}, lng={})",
                lat, lng
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

/// Location exactly as a participant submitted it
///
/// Either field may be missing on the wire. Both missing means the
/// participant is unlocated; exactly one missing is malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl LocationInput {
    /// A fully specified location
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Validate into a coordinate
    ///
    /// Returns `Ok(None)` for an absent location.
    pub fn validate(&self) -> Result<Option<Coordinate>, DomainError> {
        match (self.lat, self.lng) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => Coordinate::new(lat, lng).map(Some),
            (Some(_), None) => Err(DomainError::InvalidCoordinate(
                "latitude present without longitude".to_string(),
            )),
            (None, Some(_)) => Err(DomainError::InvalidCoordinate(
                "longitude present without latitude".to_string(),
            )),
        }
    }
}

impl From<Coordinate> for LocationInput {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.lat, coordinate.lng)
    }
}
