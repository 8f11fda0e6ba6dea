#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::Arg;
use rebalance_cli::extensions::generate::{Area, generate_problem};
use rebalance_pragmatic::format::problem::serialize_problem;

const FORMAT_ARG_NAME: &str = "FORMAT";
const STATIONS_SIZE_ARG_NAME: &str = "stations";
const CELLS_SIZE_ARG_NAME: &str = "cells";
const VEHICLES_SIZE_ARG_NAME: &str = "vehicles";
const SEED_ARG_NAME: &str = "seed";
const AREA_ARG_NAME: &str = "area";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate rebalancing requests for experiments")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(
            Arg::new(STATIONS_SIZE_ARG_NAME)
                .help("Amount of stations in generated request")
                .short('s')
                .long(STATIONS_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CELLS_SIZE_ARG_NAME)
                .help("Amount of risk cells in generated request")
                .short('c')
                .long(CELLS_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(VEHICLES_SIZE_ARG_NAME)
                .help("Total amount of vehicles distributed randomly between stations")
                .short('v')
                .long(VEHICLES_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get reproducible output")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(AREA_ARG_NAME)
                .help("Specifies bounding box of generated locations as \"min_lat,min_lon,max_lat,max_lon\"")
                .short('a')
                .long(AREA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), GenericError> {
    let stations_size = parse_int_value::<usize>(matches, STATIONS_SIZE_ARG_NAME, "stations size")?
        .ok_or("stations size is not specified")?;
    let cells_size =
        parse_int_value::<usize>(matches, CELLS_SIZE_ARG_NAME, "cells size")?.ok_or("cells size is not specified")?;
    let vehicles_size = parse_int_value::<usize>(matches, VEHICLES_SIZE_ARG_NAME, "vehicles size")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let area = matches.get_one::<String>(AREA_ARG_NAME).map(|area| Area::parse(area)).transpose()?;

    let problem = generate_problem(stations_size, cells_size, vehicles_size, area, seed)
        .map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    serialize_problem(&problem, create_write_buffer(out_result))
}
