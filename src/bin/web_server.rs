// src/bin/web_server.rs

use doc_verify::transport;
use doc_verify::DataSource;
use doc_verify::SheetsClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Data Source Initialization ---
    println!("> Initializing Sheets client...");
    let client = SheetsClient::from_env()?;
    let data_source = Arc::new(DataSource::new(Arc::new(client)));
    println!("> Data source initialized (snapshot starts empty, fills on first lookup).");

    let app_state = transport::http::AppState {
        data_source: data_source.clone(),
    };

    // --- Web Server Initialization ---
    println!("> Starting verification server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state).layer(cors);
    let port = doc_verify::infra::config::port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("> Verification server listening on http://0.0.0.0:{}", port);
    println!("> Press Ctrl+C to shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            let snapshot = data_source.cached().await;
            println!("\n> Shutdown signal received (Ctrl+C)...");
            println!("> Last snapshot: {} rows, fetched_at={:?}", snapshot.rows.len(), snapshot.fetched_at);
            println!("> Graceful shutdown complete.");
        }
    }

    Ok(())
}
