use clap::Parser;
use std::path::PathBuf;
use tilesearch::{
    request::{run, SolveOutcome, SolveRequest, SolveResponse},
    search::{search_engines::SearchEngineName, validate, SlidingPuzzle, Verbosity},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a sliding-tile puzzle described by a request file.
struct Cli {
    #[arg(help = "The request file, either .json or .toml")]
    request: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "The heuristic to use, overriding the one in the request",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<String>,
    #[arg(
        help = "Write the JSON response to this file instead of stdout",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let response = match SolveRequest::from_path(&cli.request) {
        Ok(mut request) => {
            if cli.heuristic.is_some() {
                request.heuristic = cli.heuristic.clone();
            }
            match run(&request, cli.search_engine_name) {
                Ok(outcome) => {
                    report(&outcome, request.size);
                    SolveResponse::from(outcome.result)
                }
                Err(e) => {
                    error!("request rejected: {}", e);
                    SolveResponse::from(e)
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            SolveResponse::Error {
                error: e.to_string(),
            }
        }
    };

    let json = match response.to_json() {
        Ok(json) => json,
        Err(e) => {
            error!("failed to serialise response: {}", e);
            std::process::exit(1);
        }
    };
    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &json) {
                error!("failed to write response to {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", json),
    }

    if response.status() != 200 {
        std::process::exit(1);
    }
}

fn report(outcome: &SolveOutcome, size: usize) {
    let statistics = outcome.engine.statistics();
    info!(
        nodes_evaluated = statistics.nodes_evaluated(),
        nodes_generated = statistics.nodes_generated(),
        search_time = %humantime::format_duration(statistics.search_duration()),
    );

    let Some(plan) = outcome.result.plan() else {
        info!("no plan found");
        eprintln!("No plan found: the goal is unreachable");
        return;
    };

    info!("validating plan");
    let validation_result = SlidingPuzzle::new(size).map_err(|e| e.to_string()).and_then(
        |mut puzzle| validate(plan, &mut puzzle, &outcome.initial_state, &outcome.goal_state),
    );
    match validation_result {
        Ok(()) => info!("plan is valid"),
        Err(e) => {
            error!("plan is invalid: {}", e);
            return;
        }
    }
    info!(plan_length = plan.len());

    eprintln!("Initial state:\n{}", outcome.initial_state);
    match plan.describe(&outcome.initial_state, size) {
        Ok(directions) => eprintln!("Plan found: {}", directions),
        Err(e) => error!("failed to describe plan: {}", e),
    }
    eprintln!("Plan length: {}", plan.len());
}
