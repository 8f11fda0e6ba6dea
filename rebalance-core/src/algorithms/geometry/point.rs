#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/point_test.rs"]
mod point_test;

use crate::utils::Float;

/// Represents a point on a local map given by latitude and longitude in degrees.
///
/// Distances are planar (Euclidean in degree space), not geodesic: the map is local and grid cells
/// are small, so straight-line distance is used as a cost proxy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lon: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }

    /// Computes planar distance from given point to `other`.
    pub fn distance_to_point(&self, other: &Point) -> Float {
        let delta_lat = self.lat - other.lat;
        let delta_lon = self.lon - other.lon;

        (delta_lat * delta_lat + delta_lon * delta_lon).sqrt()
    }
}
