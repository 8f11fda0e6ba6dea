use super::*;
use crate::commands::{get_app, run_subcommand};
use std::io::Write;

const PRAGMATIC_REQUEST_PATH: &str = "../data/pragmatic/simple.request.json";
const PRAGMATIC_PLAN_PATH: &str = "../data/pragmatic/simple.plan.json";

fn run_check_with_plan(plan_path: &str) -> Result<(), GenericError> {
    let args = vec![
        "rebalance-cli",
        "check",
        "pragmatic",
        "--request-file",
        PRAGMATIC_REQUEST_PATH,
        "--plan-file",
        plan_path,
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches)
}

#[test]
fn can_run_check_plan() {
    run_check_with_plan(PRAGMATIC_PLAN_PATH).unwrap();
}

#[test]
fn can_report_invalid_plan() {
    let plan = std::fs::read_to_string(PRAGMATIC_PLAN_PATH)
        .unwrap()
        .replace("\"total_travel_cost\": 15.0", "\"total_travel_cost\": 12.0");
    let mut plan_file = tempfile::NamedTempFile::new().unwrap();
    plan_file.write_all(plan.as_bytes()).unwrap();

    let error = run_check_with_plan(plan_file.path().to_str().unwrap()).unwrap_err().to_string();

    assert!(error.starts_with("checker found 1 errors:"), "{error}");
    assert!(error.contains("total travel cost is 12, but moves cost 15"));
}

#[test]
fn can_require_request_and_plan_files() {
    get_check_app().try_get_matches_from(vec!["check", "pragmatic", "--plan-file", PRAGMATIC_PLAN_PATH]).unwrap_err();
    get_check_app().try_get_matches_from(vec!["check", "pragmatic", "-r", PRAGMATIC_REQUEST_PATH]).unwrap_err();
}
