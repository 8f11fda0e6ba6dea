#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction};
use rebalance_cli::extensions::solve::config::{Config, create_environment_from_config, read_config};
use rebalance_cli::get_errors_serialized;
use rebalance_core::prelude::Solver;
use rebalance_pragmatic::checker::CheckerContext;
use rebalance_pragmatic::format::MultiFormatError;
use rebalance_pragmatic::format::problem::{PragmaticProblem, deserialize_problem};
use rebalance_pragmatic::format::solution::{PragmaticSolution, create_plan};
use std::io::BufReader;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const TIME_ARG_NAME: &str = "max-time";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves fleet rebalancing problem")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of min-cost flow search in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies max amount of min-cost flow augmentations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final plan should be checked")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("problem format is not specified")?;
    if problem_format != "pragmatic" {
        return Err(format!("unknown format: '{problem_format}'").into());
    }

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    let environment = create_environment_from_config(&config.with_overrides(max_time, max_iterations, is_logging))?;

    let problem = deserialize_problem(BufReader::new(open_file(problem_path, "problem")?)).map_err(|errors| {
        format!("cannot read pragmatic problem from '{problem_path}':\n{}", get_errors_serialized(&errors))
    })?;
    let core_problem = problem.clone().read_pragmatic().map_err(|errors| {
        format!("pragmatic problem from '{problem_path}' is invalid:\n{}", get_errors_serialized(&errors))
    })?;

    let plan = Solver::new(Arc::new(environment))
        .solve(&core_problem)
        .map_err(|err| format!("cannot find plan:\n{}", get_errors_serialized(&MultiFormatError::from(err))))?;

    if is_check_requested {
        CheckerContext::new(problem.clone(), create_plan(&problem, &plan))
            .and_then(|ctx| ctx.check())
            .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))?;
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out plan")).transpose()?;

    plan.write_pragmatic_json(&problem, out_writer_func(out_result))
}
