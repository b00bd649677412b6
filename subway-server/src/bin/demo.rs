//! Prints directions for a few sample trips across Objectville.
//!
//! Usage: `demo [NETWORK_FILE]`

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use subway_server::network::{default_network_path, load_network};
use subway_server::planner::{DirectionsConfig, Planner};
use subway_server::printer::DirectionsPrinter;

const TRIPS: [(&str, &str); 4] = [
    ("DRY Drive", "Head First Theater"),
    ("DRY Drive", "Infinite Circle"),
    ("Weather-O-Rama, Inc.", "Prime Numbers"),
    ("Boards 'R' Us", "Fibonacci"),
];

fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(default_network_path()));

    let graph = match load_network(&path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let planner = Planner::new(Arc::new(graph), DirectionsConfig::default());

    let mut printer = DirectionsPrinter::new(io::stdout());
    for (i, (from, to)) in TRIPS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {from} to {to} ==");

        let result = planner
            .get_directions(from, to)
            .map_err(|e| e.to_string())
            .and_then(|d| printer.print(d.steps()).map_err(|e| e.to_string()));
        if let Err(e) = result {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
