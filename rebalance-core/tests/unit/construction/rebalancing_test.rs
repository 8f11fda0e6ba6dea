use super::*;
use crate::algorithms::geometry::Point;
use crate::helpers::models::test_station_plan;
use crate::helpers::utils::{ReachedQuota, brute_force_transportation_cost, test_environment};
use std::sync::Arc;

fn get_moves(moves: &[Move]) -> Vec<(&str, &str, VehicleCount)> {
    moves.iter().map(|m| (m.from_station_id.as_str(), m.to_station_id.as_str(), m.num_vehicles)).collect()
}

#[test]
fn can_move_all_vehicles_between_two_stations() {
    let stations = vec![test_station_plan("A", (0., 0.), 10, 0), test_station_plan("B", (0., 1.), 0, 10)];

    let result = rebalance(stations.as_slice(), &test_environment()).unwrap();

    assert_eq!(
        result.moves,
        vec![Move { from_station_id: "A".to_string(), to_station_id: "B".to_string(), num_vehicles: 10, distance: 1. }]
    );
    assert_eq!(result.total_travel_cost, 10.);
}

#[test]
fn can_return_no_moves_when_all_stations_are_at_target() {
    let stations = vec![test_station_plan("A", (0., 0.), 3, 3), test_station_plan("B", (0., 1.), 0, 0)];

    let result = rebalance(stations.as_slice(), &test_environment()).unwrap();

    assert!(result.moves.is_empty());
    assert_eq!(result.total_travel_cost, 0.);
    assert_eq!(result.augmentations, 0);
}

#[test]
fn can_detect_conservation_violation() {
    let stations = vec![test_station_plan("A", (0., 0.), 3, 2), test_station_plan("B", (0., 1.), 0, 2)];

    let result = rebalance(stations.as_slice(), &test_environment());

    assert!(matches!(result, Err(RebalanceError::ConservationViolation(_))));
}

#[test]
fn can_find_cheapest_moves() {
    let stations = vec![
        test_station_plan("A", (0., 0.), 2, 0),
        test_station_plan("C", (0., 1.), 0, 1),
        test_station_plan("D", (0., 9.), 0, 2),
        test_station_plan("B", (0., 10.), 1, 0),
    ];

    let result = rebalance(stations.as_slice(), &test_environment()).unwrap();

    assert_eq!(get_moves(result.moves.as_slice()), vec![("A", "C", 1), ("A", "D", 1), ("B", "D", 1)]);
    assert!((result.total_travel_cost - 11.).abs() < 1E-9);
}

parameterized_test! {can_match_brute_force_cost, (surplus, deficit), {
    can_match_brute_force_cost_impl(surplus, deficit);
}}

can_match_brute_force_cost! {
    case_01: (&[(3, (0., 0.)), (2, (5., 5.))], &[(1, (1., 0.)), (4, (4., 6.))]),
    case_02: (&[(4, (0., 0.))], &[(1, (1., 1.)), (1, (2., 2.)), (2, (0., 3.))]),
    case_03: (&[(1, (0., 0.)), (1, (0., 2.)), (3, (3., 1.))], &[(2, (1., 1.)), (3, (2., 0.))]),
    case_04: (&[(2, (0.3, 0.7)), (2, (0.9, 0.1))], &[(2, (0.5, 0.5)), (1, (0.8, 0.8)), (1, (0.2, 0.1))]),
}

fn can_match_brute_force_cost_impl(
    surplus: &[(VehicleCount, (Float, Float))],
    deficit: &[(VehicleCount, (Float, Float))],
) {
    let stations = surplus
        .iter()
        .enumerate()
        .map(|(idx, &(amount, location))| test_station_plan(&format!("s{idx}"), location, amount, 0))
        .chain(
            deficit
                .iter()
                .enumerate()
                .map(|(idx, &(amount, location))| test_station_plan(&format!("d{idx}"), location, 0, amount)),
        )
        .collect::<Vec<_>>();
    let costs = surplus
        .iter()
        .map(|(_, from)| {
            deficit
                .iter()
                .map(|(_, to)| Point::new(from.0, from.1).distance_to_point(&Point::new(to.0, to.1)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let expected = brute_force_transportation_cost(
        surplus.iter().map(|(amount, _)| *amount).collect::<Vec<_>>().as_slice(),
        deficit.iter().map(|(amount, _)| *amount).collect::<Vec<_>>().as_slice(),
        costs.as_slice(),
    );

    let result = rebalance(stations.as_slice(), &test_environment()).unwrap();

    assert!((result.total_travel_cost - expected).abs() < 1E-9, "{} != {}", result.total_travel_cost, expected);
}

#[test]
fn can_aggregate_moves_per_station_pair() {
    let stations = (0..6)
        .map(|idx| {
            let (current, target) = if idx % 2 == 0 { (idx + 2, 0) } else { (0, idx + 1) };
            test_station_plan(&format!("s{idx}"), (idx as Float * 0.1, (idx % 3) as Float), current, target)
        })
        .collect::<Vec<_>>();

    let result = rebalance(stations.as_slice(), &test_environment()).unwrap();

    let mut pairs =
        result.moves.iter().map(|m| (m.from_station_id.clone(), m.to_station_id.clone())).collect::<Vec<_>>();
    let total = pairs.len();
    pairs.dedup();
    assert_eq!(pairs.len(), total);
    assert!(result.moves.iter().all(|m| m.num_vehicles > 0 && m.from_station_id != m.to_station_id));
}

#[test]
fn can_propagate_solver_timeout() {
    let stations = vec![test_station_plan("A", (0., 0.), 10, 0), test_station_plan("B", (0., 1.), 0, 10)];
    let environment = Environment { quota: Some(Arc::new(ReachedQuota)), ..test_environment() };

    let result = rebalance(stations.as_slice(), &environment);

    assert!(matches!(result, Err(RebalanceError::SolverTimeout(_))));
}
