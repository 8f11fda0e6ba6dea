use super::*;
use crate::format::solution::Move;
use crate::helpers::*;

fn create_test_problem() -> Problem {
    create_problem(
        vec![create_cell((0., 1.), 1.), create_cell((0., 2.), 1.)],
        vec![create_station("A", (0., 0.), 10), create_station("B", (0., 1.), 0), create_station("C", (0., 2.), 0)],
    )
}

fn create_move(from: &str, to: &str, num_vehicles: i64, distance: f64) -> Move {
    Move { from_station_id: from.to_string(), to_station_id: to.to_string(), num_vehicles, distance }
}

fn check_plan(problem: Problem, plan: Plan) -> Result<(), Vec<String>> {
    CheckerContext::new(problem, plan)?.check()
}

#[test]
fn can_accept_valid_plan() {
    let problem = create_test_problem();
    let plan = try_solve(&problem).unwrap();

    assert_eq!(get_targets(&plan), vec![0, 5, 5]);
    assert_eq!(get_moves(&plan), vec![("A", "B", 5), ("A", "C", 5)]);
    assert_eq!(check_plan(problem, plan), Ok(()));
}

parameterized_test! {can_detect_plan_violation, (modify, expected), {
    let problem = create_test_problem();
    let mut plan = try_solve(&problem).unwrap();
    modify(&mut plan);

    let errors = check_plan(problem, plan).unwrap_err();

    assert!(errors.iter().any(|err| err.contains(expected)), "{errors:?}");
}}

can_detect_plan_violation! {
    case_01_station_order: (|plan: &mut Plan| plan.stations.swap(1, 2), "expected station 'B', got 'C'"),
    case_02_missing_station: (|plan: &mut Plan| { plan.stations.pop(); }, "plan has 2 stations, but request has 3"),
    case_03_changed_station: (|plan: &mut Plan| plan.stations[0].vehicles_current = 9, "station 'A' differs"),
    case_04_negative_target: (|plan: &mut Plan| plan.stations[1].vehicles_target = -1, "negative target"),
    case_05_wrong_target: (|plan: &mut Plan| {
        plan.stations[1].vehicles_target = 6;
        plan.stations[2].vehicles_target = 4;
        plan.moves = vec![create_move("A", "B", 6, 1.), create_move("A", "C", 4, 2.)];
        plan.total_travel_cost = 14.;
    }, "station 'B' has target 6, expected 5"),
    case_06_wrong_risk: (|plan: &mut Plan| plan.stations[2].local_risk = 2., "station 'C' has local risk 2"),
    case_07_empty_move: (|plan: &mut Plan| plan.moves.push(create_move("B", "C", 0, 1.)), "non-positive amount"),
    case_08_self_move: (|plan: &mut Plan| plan.moves.push(create_move("B", "B", 1, 0.)), "same source and destination"),
    case_09_unknown_station: (
        |plan: &mut Plan| plan.moves[0].to_station_id = "X".to_string(),
        "cannot find station with id 'X'"
    ),
    case_10_wrong_distance: (|plan: &mut Plan| plan.moves[1].distance = 3., "has distance 3, expected 2"),
    case_11_unbalanced: (|plan: &mut Plan| plan.moves[0].num_vehicles = 4, "station 'A' ends up with 1 vehicles"),
    case_12_wrong_cost: (|plan: &mut Plan| plan.total_travel_cost = 14., "total travel cost is 14, but moves cost 15"),
    case_13_not_optimal: (|plan: &mut Plan| {
        plan.moves = vec![create_move("A", "C", 10, 2.), create_move("C", "B", 5, 1.)];
        plan.total_travel_cost = 25.;
    }, "total travel cost 25 is greater than optimal 15"),
}

#[test]
fn can_report_invalid_request() {
    let problem = create_problem(vec![], vec![]);
    let plan =
        Plan { fleet_type: "fire".to_string(), timestamp: None, stations: vec![], moves: vec![], total_travel_cost: 0. };

    let errors = CheckerContext::new(problem, plan).err().unwrap_or_default();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("E1000"));
}
