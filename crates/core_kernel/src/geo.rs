//! Fixed-point geographic coordinates
//!
//! Coordinates travel on the wire as signed integers equal to the real
//! degree value multiplied by 10^7, giving seven decimal digits of
//! precision without fractional representation at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale factor between degrees and the fixed-point integer encoding
pub const COORD_SCALE: i64 = 10_000_000;

/// A geographic point in fixed-point encoding.
///
/// `lat_e7` / `lon_e7` hold degrees multiplied by [`COORD_SCALE`]. The
/// engine stores and compares these as opaque integers; conversion back to
/// degrees exists for display and downstream consumers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, degrees x 10^7
    pub lat_e7: i64,
    /// Longitude, degrees x 10^7
    pub lon_e7: i64,
}

impl GeoPoint {
    /// Creates a point from already-encoded fixed-point values
    pub const fn new(lat_e7: i64, lon_e7: i64) -> Self {
        Self { lat_e7, lon_e7 }
    }

    /// Encodes a point from real-valued degrees
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat_e7: (lat * COORD_SCALE as f64).round() as i64,
            lon_e7: (lon * COORD_SCALE as f64).round() as i64,
        }
    }

    /// Returns the latitude in degrees
    pub fn lat_degrees(&self) -> f64 {
        self.lat_e7 as f64 / COORD_SCALE as f64
    }

    /// Returns the longitude in degrees
    pub fn lon_degrees(&self) -> f64 {
        self.lon_e7 as f64 / COORD_SCALE as f64
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7},{:.7}", self.lat_degrees(), self.lon_degrees())
    }
}
