use clap::{ArgMatches, Command};

pub mod check;
pub mod generate;
pub mod solve;

use self::check::{get_check_app, run_check};
use self::generate::{get_generate_app, run_generate};
use self::solve::{get_solve_app, run_solve};
use rebalance_core::prelude::GenericError;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;

/// Creates a command line application with all subcommands.
pub fn get_app() -> Command {
    Command::new("Fleet Rebalancing Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to fleet rebalancing solver")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .subcommand(get_generate_app())
}

/// Runs subcommand selected by user.
pub fn run_subcommand(matches: ArgMatches) -> Result<(), GenericError> {
    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    }
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
