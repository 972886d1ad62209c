//! Built-in campus building catalog

use rendezvous_domain::{Coordinate, Venue};

/// (id, name, abbreviation, lat, lng)
const CAMPUS_BUILDINGS: [(&str, &str, &str, f64, f64); 10] = [
    ("1", "Lawson Computer Science Building", "LWSN", 40.4283, -86.9162),
    ("2", "Hicks Undergraduate Library", "HICKS", 40.4264, -86.9214),
    ("3", "Wilmeth Active Learning Center", "WALC", 40.4279, -86.9166),
    ("4", "Electrical Engineering Building", "EE", 40.4282, -86.9169),
    ("5", "Mathematical Sciences Building", "MATH", 40.4271, -86.9152),
    ("6", "Recitation Building", "REC", 40.4268, -86.9203),
    ("7", "Haas Hall", "HAAS", 40.4254, -86.9189),
    ("8", "Stanley Coulter Hall", "SC", 40.4255, -86.9208),
    ("9", "Stewart Center", "STEW", 40.4265, -86.9186),
    ("10", "Armstrong Hall", "ARMS", 40.4276, -86.9194),
];

/// The default venue catalog: ten central campus buildings
pub fn builtin_campus_venues() -> Vec<Venue> {
    CAMPUS_BUILDINGS
        .iter()
        .filter_map(|&(id, name, abbr, lat, lng)| {
            Coordinate::new(lat, lng)
                .ok()
                .map(|coordinate| Venue::new(id, name, coordinate).with_abbreviation(abbr))
        })
        .collect()
}
