//! Great-circle distance

use super::coordinate::Coordinate;

/// Mean Earth radius used by the Haversine formula, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance between two coordinates, in meters
///
/// # Example
///
/// ```
/// use rendezvous_domain::geo::{Coordinate, haversine_meters};
///
/// let lawson = Coordinate::new(40.4283, -86.9162).unwrap();
/// let hicks = Coordinate::new(40.4264, -86.9214).unwrap();
///
/// let d = haversine_meters(&lawson, &hicks);
/// assert!(d > 450.0 && d < 500.0);
/// assert_eq!(haversine_meters(&lawson, &lawson), 0.0);
/// ```
pub fn haversine_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lng = (to.lng() - from.lng()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Arithmetic mean of latitudes and longitudes
///
/// Good enough as a reference point at campus or city scale. Returns `None`
/// for an empty slice.
pub fn geographic_center(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let lat = points.iter().map(Coordinate::lat).sum::<f64>() / n;
    let lng = points.iter().map(Coordinate::lng).sum::<f64>() / n;

    Coordinate::new(lat, lng).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = coord(40.4279, -86.9166);
        assert_eq!(haversine_meters(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = coord(40.4283, -86.9162);
        let b = coord(-33.8688, 151.2093);
        assert_eq!(haversine_meters(&a, &b), haversine_meters(&b, &a));
    }

    #[test]
    fn test_triangle_inequality() {
        let a = coord(40.4283, -86.9162);
        let b = coord(41.8781, -87.6298);
        let c = coord(39.7684, -86.1581);

        let ab = haversine_meters(&a, &b);
        let bc = haversine_meters(&b, &c);
        let ac = haversine_meters(&a, &c);

        assert!(ac <= ab + bc + 1e-6);
        assert!(ab <= ac + bc + 1e-6);
        assert!(bc <= ab + ac + 1e-6);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // 2πR / 360
        let d = haversine_meters(&coord(0.0, 0.0), &coord(1.0, 0.0));
        assert!((d - 111_194.93).abs() < 0.1);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_meters(&coord(0.0, 0.0), &coord(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn test_geographic_center() {
        let center = geographic_center(&[coord(40.0, -87.0), coord(42.0, -85.0)]).unwrap();
        assert_eq!(center.lat(), 41.0);
        assert_eq!(center.lng(), -86.0);
    }

    #[test]
    fn test_geographic_center_empty() {
        assert!(geographic_center(&[]).is_none());
    }
}
