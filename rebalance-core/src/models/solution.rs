use crate::models::Station;
use crate::utils::{Float, VehicleCount};

/// A station annotated with attributed risk and target amount of vehicles.
#[derive(Clone, Debug, PartialEq)]
pub struct StationPlan {
    /// An original station.
    pub station: Station,
    /// A sum of risk attributed to the station.
    pub local_risk: Float,
    /// A target amount of vehicles.
    pub vehicles_target: VehicleCount,
}

impl StationPlan {
    /// Returns a difference between current and target amount of vehicles: positive value means
    /// surplus, negative one means deficit.
    pub fn delta(&self) -> VehicleCount {
        self.station.vehicles_current - self.vehicles_target
    }
}

/// A move of vehicles between two distinct stations.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    /// Id of the station vehicles are taken from.
    pub from_station_id: String,
    /// Id of the station vehicles are moved to.
    pub to_station_id: String,
    /// Amount of moved vehicles, always positive.
    pub num_vehicles: VehicleCount,
    /// Planar distance between stations.
    pub distance: Float,
}

impl Move {
    /// Returns travel cost of the move.
    pub fn cost(&self) -> Float {
        self.num_vehicles as Float * self.distance
    }
}

/// A rebalancing plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Stations in roster order.
    pub stations: Vec<StationPlan>,
    /// Moves to perform.
    pub moves: Vec<Move>,
    /// Total travel cost: a sum of move costs.
    pub total_travel_cost: Float,
}
