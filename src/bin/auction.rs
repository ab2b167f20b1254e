//! Command-line entry point: load a bipartite graph, solve the
//! assignment problem with the ε-scaling auction algorithm, print the
//! result, and write the matching to a sibling file.

use auction::{io, AuctionSolver};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

/// Solve the linear assignment problem with the ε-scaling auction
/// algorithm.
///
/// The input file can be in binary format (`.wbg`) or text format
/// (`.txt`); the format is selected by extension.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the graph file (`.wbg` binary or `.txt` text format).
    ///
    /// Optional at the `clap` level so a missing path can be reported
    /// with the documented usage message and exit code `0`, matching
    /// the source's own behavior on a missing argument, rather than
    /// clap's default hard error.
    graph_path: Option<PathBuf>,

    /// Scaling factor by which ε shrinks at every phase.
    #[arg(short, long, default_value_t = 7.0)]
    alpha: f64,

    /// Starting ε. Defaults to the graph's maximum absolute edge cost,
    /// the source's own default, if not given.
    #[arg(short, long)]
    initial_epsilon: Option<f64>,

    /// Final ε. Defaults to `1 / (N + 2)`, the optimality threshold for
    /// integer costs, when set to `0.0` or left unspecified.
    #[arg(short, long, default_value_t = 0.0)]
    final_epsilon: f64,
}

fn run(graph_path: &PathBuf, cli: &Cli) -> auction::Result<()> {
    let graph = io::load_graph(graph_path)?;

    let mut solver = AuctionSolver::new();
    solver.load_graph(graph);
    info!("loaded graph with {} persons", solver.num_persons());

    let initial_epsilon = cli
        .initial_epsilon
        .unwrap_or(f64::from(solver.max_abs_cost()));
    solver.solve(initial_epsilon, cli.alpha, cli.final_epsilon)?;

    println!("Matching cost: {}", solver.matching_cost());
    println!(
        "Solving time: {:.5} sec",
        solver.solving_time().as_secs_f64()
    );

    let output_path = io::matching_output_path(graph_path);
    io::write_matching(&output_path, &solver)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Some(graph_path) = cli.graph_path.clone() else {
        println!("Usage: auction file_path");
        println!("The file can be in binary format '.wbg' or text format '.txt'");
        return ExitCode::SUCCESS;
    };

    match run(&graph_path, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
