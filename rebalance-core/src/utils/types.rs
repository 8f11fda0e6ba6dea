/// Alias to a scalar floating type.
///
/// NOTE: distances are computed in coordinate-degree space, so `f64` precision is required.
pub type Float = f64;

/// Alias to an integer vehicle count type.
///
/// Signed on purpose: deltas between current and target counts are negative on deficit stations.
pub type VehicleCount = i64;
