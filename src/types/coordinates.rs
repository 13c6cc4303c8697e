//! Geographic coordinates used as the location part of a query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe, in decimal degrees.
///
/// # Examples
///
/// ```
/// use meteomatics::Coordinates;
///
/// let zurich = Coordinates::new(47.3769, 8.5417);
/// assert_eq!(zurich.to_string(), "47.3769,8.5417");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Renders as `lat,lon` with plain decimal numbers, the form used in request paths.
/// Negative zero is written as `0`.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", unsigned_zero(self.lat), unsigned_zero(self.lon))
    }
}

fn unsigned_zero(degrees: f64) -> f64 {
    if degrees == 0.0 {
        0.0
    } else {
        degrees
    }
}
