use std::error::Error;
use std::io::{self, Read, Write};
use std::process;

use clap::{value_t, values_t, App, Arg, ArgMatches};
use log::debug;

use rink_solver::config::Config;
use rink_solver::data::DEFAULT_SIZE;
use rink_solver::formatter::RinkFormatter;
use rink_solver::parser;
use rink_solver::problem::Problem;
use rink_solver::{LoadProblem, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("rink-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a short sequence of moves, slides and obstacle toggles visiting all destinations in order")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .takes_value(true)
                .help("seed for the random restarts"),
        )
        .arg(
            Arg::with_name("time-limits")
                .short("t")
                .long("time-limits")
                .takes_value(true)
                .use_delimiter(true)
                .help("deadline of each search round in seconds since start [default: 0.6,1.2,1.8]"),
        )
        .arg(
            Arg::with_name("iterations")
                .short("i")
                .long("iterations")
                .takes_value(true)
                .conflicts_with("time-limits")
                .help("attempts per round instead of time limits, makes runs reproducible"),
        )
        .arg(
            Arg::with_name("rounds")
                .short("r")
                .long("rounds")
                .takes_value(true)
                .requires("iterations")
                .help("number of rounds when using --iterations [default: 3]"),
        )
        .arg(
            Arg::with_name("max-actions")
                .long("max-actions")
                .takes_value(true)
                .help("upper limit on the number of actions [default: 1600]"),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .takes_value(true)
                .help("rink size if the first line doesn't specify it [default: 20]"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics to stderr"),
        )
        .arg(
            Arg::with_name("draw")
                .long("draw")
                .help("draw the final rink to stderr"),
        )
        .arg(Arg::with_name("file").help("input file, stdin if missing"))
        .get_matches();

    let config = parse_config(&matches).unwrap_or_else(|err| err.exit());
    let size = if matches.is_present("size") {
        value_t!(matches, "size", u8).unwrap_or_else(|err| err.exit())
    } else {
        DEFAULT_SIZE
    };

    let problem = load(matches.value_of("file"), size).unwrap_or_else(|err| {
        eprintln!("Can't load problem: {}", err);
        process::exit(1);
    });
    debug!("Problem:\n{:?}", problem);

    let solution = problem.solve(&config).unwrap_or_else(|err| {
        eprintln!("Solver failed: {}", err);
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if let Err(err) = write!(stdout, "{}", solution.state.actions()) {
        eprintln!("Can't write actions: {}", err);
        process::exit(1);
    }

    if matches.is_present("stats") {
        eprintln!("{}", solution.stats);
    }
    if matches.is_present("draw") {
        eprintln!("{}", RinkFormatter::new(&solution.state));
    }
    eprintln!("score {}", solution.score());
}

fn parse_config(matches: &ArgMatches<'_>) -> Result<Config, clap::Error> {
    let mut config = if matches.is_present("iterations") {
        let attempts = value_t!(matches, "iterations", usize)?;
        let rounds = if matches.is_present("rounds") {
            value_t!(matches, "rounds", usize)?
        } else {
            3
        };
        Config::with_iterations(rounds, attempts)
    } else if matches.is_present("time-limits") {
        let secs = values_t!(matches, "time-limits", f64)?;
        if secs.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(clap::Error::with_description(
                "time limits must be non-negative numbers of seconds",
                clap::ErrorKind::InvalidValue,
            ));
        }
        Config::with_time_limits(&secs)
    } else {
        Config::default()
    };

    if matches.is_present("seed") {
        config.seed = value_t!(matches, "seed", u64)?;
    }
    if matches.is_present("max-actions") {
        config.max_actions = value_t!(matches, "max-actions", usize)?;
    }
    Ok(config)
}

fn load(path: Option<&str>, size: u8) -> Result<Problem, Box<dyn Error>> {
    match path {
        Some(path) => path.load_problem_with_size(size),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(parser::parse(&input, size)?)
        }
    }
}
