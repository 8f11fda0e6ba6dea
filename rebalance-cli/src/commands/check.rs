#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Arg;
use rebalance_cli::extensions::check::check_pragmatic_plan;
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const REQUEST_ARG_NAME: &str = "request-file";
const PLAN_ARG_NAME: &str = "plan-file";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check that plan is valid for the request")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(
            Arg::new(REQUEST_ARG_NAME)
                .help("Sets input file which contains a rebalancing request")
                .short('r')
                .long(REQUEST_ARG_NAME)
                .required(true),
        )
        .arg(Arg::new(PLAN_ARG_NAME).help("Sets plan file").short('p').long(PLAN_ARG_NAME).required(true))
}

pub fn run_check(matches: &ArgMatches) -> Result<(), GenericError> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("request file is not specified")?;
    let plan_path = matches.get_one::<String>(PLAN_ARG_NAME).ok_or("plan file is not specified")?;

    let result = match input_format.as_str() {
        "pragmatic" => check_pragmatic_plan(
            BufReader::new(open_file(request_path, "request")?),
            BufReader::new(open_file(plan_path, "plan")?),
        ),
        _ => Err(vec![format!("unknown format: '{input_format}'")]),
    };

    result.map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")).into())
}
