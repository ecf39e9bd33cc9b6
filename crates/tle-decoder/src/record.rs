use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully decoded element set, keyed by the name the source gave it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElementRecord {
    pub name: String,
    pub info: ElementSetInfo,
    pub elements: KeplerianElements,
}

/// Line 1 metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSetInfo {
    /// Verbatim; some catalogs use alphanumeric numbers
    pub catalog_number: String,
    pub classification: char,
    pub designator: InternationalDesignator,
    pub epoch: DateTime<Utc>,
    /// First derivative of mean motion divided by two (rev/day²)
    pub half_mean_motion_dot: f64,
    /// Second derivative of mean motion divided by six (rev/day³)
    pub sixth_mean_motion_ddot: f64,
    /// BSTAR drag term (1/earth radii)
    pub bstar_drag_term: f64,
    pub ephemeris_type: char,
    /// Verbatim, including padding
    pub element_set_number: String,
}

/// COSPAR designator: launch year, launch number of the year, piece
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternationalDesignator {
    pub year: i32,
    pub launch_number: u16,
    pub piece: String,
}

/// Line 2 mean elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub inclination_deg: f64,
    /// Right ascension of the ascending node
    pub raan_deg: f64,
    pub eccentricity: f64,
    pub arg_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    pub mean_motion_rev_per_day: f64,
    pub rev_number_at_epoch: u32,
}
