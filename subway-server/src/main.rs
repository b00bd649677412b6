use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::network::NetworkLoader;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_server=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Fail fast on a bad network description
    let graph = NetworkLoader::new()
        .allow_isolated_stations(config.allow_isolated_stations)
        .load_file(&config.network_path)?;
    info!(
        stations = graph.stations().len(),
        lines = graph.lines().len(),
        policy = %config.directions.line_choice,
        "network ready"
    );

    let state = AppState::new(graph, config.directions);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    println!("Objectville Subway listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /api/stations    - List stations and their lines");
    println!("  GET  /directions      - Directions (?from=..&to=..)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
