use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{test_environment, test_parallel_environment};
use crate::models::Cell;
use crate::utils::{Float, RebalanceError, VehicleCount};

fn create_solver() -> Solver {
    Solver::new(Arc::new(test_environment()))
}

fn get_targets(plan: &Plan) -> Vec<VehicleCount> {
    plan.stations.iter().map(|station| station.vehicles_target).collect()
}

#[test]
fn can_move_vehicles_towards_risk() {
    let problem = create_test_problem(&[(0., 1., 1.)], &[("A", 0., 0., 10), ("B", 0., 1., 0)]);

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![0, 10]);
    assert_eq!(plan.moves.len(), 1);
    assert_eq!(plan.moves[0].from_station_id, "A");
    assert_eq!(plan.moves[0].to_station_id, "B");
    assert_eq!(plan.moves[0].num_vehicles, 10);
    assert_eq!(plan.moves[0].distance, 1.);
    assert_eq!(plan.total_travel_cost, 10.);
    assert_plan_invariants(&plan);
}

#[test]
fn can_solve_problem_with_risks_near_float_limit() {
    let problem = create_test_problem(&[(0., 0., 5E307), (0., 1., 5E307)], &[("A", 0., 0., 10), ("B", 0., 1., 0)]);

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![5, 5]);
    assert_eq!(plan.total_travel_cost, 5.);
    assert_plan_invariants(&plan);
}

#[test]
fn can_split_fleet_by_largest_remainder() {
    let problem = create_test_problem(
        &[(0., 0., 1.), (0., 10., 1.), (0., 20., 1.)],
        &[("A", 0., 0., 10), ("B", 0., 10., 0), ("C", 0., 20., 0)],
    );

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![4, 3, 3]);
    assert_eq!(plan.moves.len(), 2);
    assert!((plan.total_travel_cost - 90.).abs() < 1E-9);
    assert_plan_invariants(&plan);
}

#[test]
fn can_handle_single_station() {
    let problem = create_test_problem(&[(5., 5., 3.), (-1., 2., 0.5)], &[("A", 0., 0., 7)]);

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![7]);
    assert!(plan.moves.is_empty());
    assert_eq!(plan.total_travel_cost, 0.);
}

#[test]
fn can_keep_current_distribution_without_risk() {
    let problem = create_test_problem(&[(0., 0., 0.), (1., 1., -2.)], &[("A", 0., 0., 4), ("B", 0., 1., 1)]);

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![4, 1]);
    assert!(plan.moves.is_empty());
    assert!(plan.stations.iter().all(|station| station.local_risk == 0.));
}

#[test]
fn can_rebalance_empty_fleet() {
    let problem = create_test_problem(&[(0., 0., 1.)], &[("A", 0., 0., 0), ("B", 0., 1., 0)]);

    let plan = create_solver().solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![0, 0]);
    assert!(plan.moves.is_empty());
}

#[test]
fn can_reject_invalid_roster() {
    let problem = Problem { cells: vec![Cell::new(0., 0., 1.)], stations: vec![] };

    let result = create_solver().solve(&problem);

    assert!(matches!(result, Err(RebalanceError::InvalidInput(_))));
}

#[test]
fn can_produce_same_plan_sequentially_and_in_parallel() {
    let cells = (0..200)
        .map(|idx| {
            let idx = idx as Float;
            ((idx * 0.37) % 7., (idx * 0.73) % 5., 1. + (idx % 11.) * 0.1)
        })
        .collect::<Vec<_>>();
    let problem = create_test_problem(
        cells.as_slice(),
        &[("A", 0., 0., 12), ("B", 3., 1., 0), ("C", 6., 4., 3), ("D", 1., 4., 0), ("E", 5., 0., 5)],
    );

    let sequential = Solver::new(Arc::new(test_environment())).solve(&problem).unwrap();
    let parallel = Solver::new(Arc::new(test_parallel_environment())).solve(&problem).unwrap();
    let repeated = Solver::new(Arc::new(test_environment())).solve(&problem).unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential, repeated);
    assert_plan_invariants(&sequential);
}
