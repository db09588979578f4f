//! Tresor API Server
//!
//! Main entry point for the Tresor banking demo service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tresor_api::{create_router, AppState};
use tresor_shared::AppConfig;
use tresor_store::Bank;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tresor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Build the in-memory bank, optionally pre-populated with demo data
    let bank = if config.demo.seed_on_startup {
        info!("Seeding demo users and accounts");
        Bank::seeded()
    } else {
        Bank::new()
    };

    // Create application state
    let state = AppState::new(bank);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
