use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;
use transit_server::config::ServerConfig;
use transit_server::seed;
use transit_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "transit_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Seed the network once; it lives in memory only
    let network = match &config.network_file {
        Some(path) => seed::load_network(path)?,
        None => seed::sample_network(),
    };
    let stats = network.statistics();
    info!(
        stops = stats.stops,
        routes = stats.routes,
        buses = stats.buses,
        "network ready"
    );

    let app = create_router(AppState::new(network));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Transit Route Server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /stops       - List all bus stops");
    println!("  GET  /graph       - Network graph data");
    println!("  GET  /route       - Find a route (from, to, algo=cheapest|dfs)");
    println!("  GET  /statistics  - Network statistics");
    println!("  GET  /search      - Search stops (q)");
    println!("  GET  /buses       - List all buses");
    println!("  POST /addstop     - Add a stop (name)");
    println!("  POST /addroute    - Add a route (from, to, distance, fare, bus)");
    println!("  GET  /health      - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
