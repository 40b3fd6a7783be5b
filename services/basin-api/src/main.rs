//! Basin Term API Server
//!
//! HTTP service returning z1p0 and z2p5 basin depth terms for a coordinate.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use basin_api::config::ServiceConfig;
use basin_api::state::AppState;

/// Basin Term API Server
#[derive(Parser, Debug)]
#[command(name = "basin-api")]
#[command(about = "Basin term service: z1p0/z2p5 depth values for seismic hazard sites")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8084", env = "BASIN_LISTEN_ADDR")]
    listen: String,

    /// Directory holding basins.geojson and per-basin grid files
    #[arg(long, default_value = "data", env = "BASIN_DATA_DIR")]
    data_dir: PathBuf,

    /// ArcGIS point-service query URL
    #[arg(
        long,
        default_value = "http://localhost:6080/arcgis/rest/basin/query",
        env = "ARCGIS_URL"
    )]
    arcgis_url: String,

    /// ArcGIS request timeout in seconds
    #[arg(long, default_value = "10", env = "ARCGIS_TIMEOUT_SECS")]
    arcgis_timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "BASIN_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting basin term API server");

    let config = ServiceConfig {
        data_dir: args.data_dir,
        arcgis_url: args.arcgis_url,
        arcgis_timeout: Duration::from_secs(args.arcgis_timeout_secs),
    };

    // Load datasets and build application state
    let state = match AppState::new(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    let app = basin_api::router(state);

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Basin term API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
