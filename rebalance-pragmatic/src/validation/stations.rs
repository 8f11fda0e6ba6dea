#[cfg(test)]
#[path = "../../tests/unit/validation/stations_test.rs"]
mod stations_test;

use super::*;

/// Checks that station roster is not empty.
fn check_e1000_non_empty_roster(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.stations.is_empty() {
        Err(FormatError::new(
            "E1000".to_string(),
            "station roster is empty".to_string(),
            "add at least one station to the request".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that roster has no stations with duplicate ids.
fn check_e1001_no_stations_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.stations().map(|station| &station.station_id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1001".to_string(),
            "duplicated station ids".to_string(),
            format!("remove duplicated station ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that stations have non-negative amount of vehicles.
fn check_e1002_non_negative_vehicles(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .stations()
        .filter(|station| station.vehicles_current < 0)
        .map(|station| station.station_id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "negative amount of vehicles".to_string(),
            format!("set non-negative vehicles_current for stations: {}", ids.join(", ")),
        ))
    }
}

/// Checks that station coordinates are finite numbers.
fn check_e1003_finite_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .stations()
        .filter(|station| !station.lat.is_finite() || !station.lon.is_finite())
        .map(|station| station.station_id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            "invalid station coordinates".to_string(),
            format!("use finite lat and lon for stations: {}", ids.join(", ")),
        ))
    }
}

/// Validates stations from the roster.
pub fn validate_stations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_e1000_non_empty_roster(ctx)
        .err()
        .into_iter()
        .chain(check_e1001_no_stations_with_duplicate_ids(ctx).err())
        .chain(check_e1002_non_negative_vehicles(ctx).err())
        .chain(check_e1003_finite_coordinates(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
