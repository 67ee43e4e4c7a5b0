use std::process;
use std::time::Instant;

use anyhow::Error;
use clap::{value_t, App, Arg, ArgMatches};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use geometry::coord2d::map::Map;
use geometry::coord2d::pathfinder::PathfindingError;
use geometry::coord2d::Position;
use gridroute::render::render;
use gridroute::{get_input_reader, read_grid, Request, Strategy};
use searcher::SearchOptions;

/// Exit status when no route exists.
const NO_ROUTE: i32 = 1;

/// Exit status when the search gave up with an unverified trace.
const UNVERIFIED: i32 = 2;

fn main() {
    match driver() {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("gridroute")
        .version("0.1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find routes across occupancy grids")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .help("Start position as row,col")
                .required(true)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .help("Goal position as row,col")
                .required(true)
                .takes_value(true)
                .index(2),
        )
        .arg(
            Arg::with_name("grid")
                .value_name("GRID")
                .help("Grid file, 0 for free cells and anything else for walls (default: stdin)")
                .required(false)
                .takes_value(true)
                .index(3),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .possible_values(Strategy::names())
                .default_value("astar")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("diagonal")
                .short("d")
                .long("diagonal")
                .help("Allow diagonal moves (astar only)"),
        )
        .arg(
            Arg::with_name("step-limit")
                .short("l")
                .long("step-limit")
                .value_name("STEPS")
                .help("Maximum number of cells A* may expand (default: half the grid)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Only print the route coordinates"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increase logging, may be repeated"),
        )
}

/// Log level for a count of `-v` flags.
fn verbosity(occurrences: u64) -> &'static str {
    match occurrences {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(matches: &ArgMatches) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity(matches.occurrences_of("verbose"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn request(matches: &ArgMatches) -> Result<Request, Error> {
    let start: Position = matches.value_of("start").unwrap_or_default().parse()?;
    let goal: Position = matches.value_of("goal").unwrap_or_default().parse()?;
    let strategy: Strategy = matches.value_of("strategy").unwrap_or("astar").parse()?;

    let mut options = SearchOptions::default();
    if matches.is_present("step-limit") {
        options = options.with_step_limit(value_t!(matches, "step-limit", usize)?);
    }

    if strategy == Strategy::BreadthFirst && matches.is_present("diagonal") {
        warn!("breadth-first search is orthogonal only, ignoring --diagonal");
    }
    if strategy == Strategy::BreadthFirst && options.step_limit.is_some() {
        warn!("breadth-first search is not bounded, ignoring --step-limit");
    }

    Ok(Request::new(start, goal, strategy)
        .diagonal(matches.is_present("diagonal"))
        .options(options))
}

fn driver() -> Result<i32, Error> {
    let matches = app().get_matches();
    init_logging(&matches);

    let request = request(&matches)?;
    let grid = read_grid(get_input_reader(matches.value_of("grid"))?)?;
    let quiet = matches.is_present("quiet");
    info!(rows = grid.rows(), cols = grid.cols(), "grid loaded");

    if !quiet {
        println!("\nUnsolved:\n");
        print!("{}", render(&grid, None, request.goal));
    }

    debug!(
        strategy = %request.strategy,
        diagonal = request.diagonal,
        step_limit = ?request.options.step_limit,
        "starting search"
    );
    let started = Instant::now();
    let outcome = request.route(&grid);
    let elapsed = started.elapsed();

    match outcome {
        Ok(route) => {
            info!(
                iterations = route.iterations,
                length = route.path.distance(),
                elapsed = ?elapsed,
                "route found"
            );
            if !quiet {
                println!("\nSolved:\n");
                print!("{}", render(&grid, Some(&route.path), request.goal));
                println!();
            }
            println!("{}", route.path);
            Ok(0)
        }
        Err(PathfindingError::NoPathFound { iterations }) => {
            info!(iterations, elapsed = ?elapsed, "no route");
            println!("\nNo route found from {} to {}.", request.start, request.goal);
            Ok(NO_ROUTE)
        }
        Err(PathfindingError::IterationBoundExceeded {
            iterations,
            partial,
        }) => {
            warn!(iterations, "iteration bound exceeded");
            if !quiet {
                println!("\nUnverified partial route:\n");
                print!("{}", render(&grid, Some(&partial), request.goal));
                println!();
            }
            println!("Gave up after {} iterations; unverified: {}", iterations, partial);
            Ok(UNVERIFIED)
        }
        Err(e) => Err(e.into()),
    }
}
