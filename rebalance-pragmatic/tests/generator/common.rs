use super::*;

/// Specifies a bounding box of generated locations.
#[derive(Clone, Debug)]
pub struct BoundingBox {
    /// Min latitude and longitude.
    pub min: (f64, f64),
    /// Max latitude and longitude.
    pub max: (f64, f64),
}

prop_compose! {
    /// Generates location inside bounding box.
    pub fn generate_location(bbox: &BoundingBox)
        (lat in bbox.min.0..bbox.max.0, lon in bbox.min.1..bbox.max.1)
    -> (f64, f64) {
        (lat, lon)
    }
}

prop_compose! {
    /// Generates location on the grid with given step, so distance ties are frequent.
    pub fn generate_grid_location(size: i32, step: f64)
        (row in 0..size, column in 0..size)
    -> (f64, f64) {
        (row as f64 * step, column as f64 * step)
    }
}

/// Generates risk which is zero in some cases.
pub fn generate_risk(max: f64) -> impl Strategy<Value = f64> {
    prop_oneof![1 => Just(0.), 4 => 0.01..max]
}
