//! BetaCall Edge - request gate and auth plumbing
//!
//! This is the main entry point for the edge service.
//!
//! # Dev Mode
//!
//! Build with `--features dev-mode` to use a canned in-memory backend instead
//! of the remote user API. The demo account is
//! `demo@betacall.io` / `Dem0!pass`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(feature = "dev-mode"))]
use betacall_auth::{AuthConfig, BetacallClient};
#[cfg(feature = "dev-mode")]
use betacall_auth::MockAuthBackend;
use betacall_edge::{create_router, EdgeConfig, EdgeState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,betacall=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BetaCall edge");

    // Load configuration from environment
    let mut config = EdgeConfig::default();
    if let Ok(listen_addr) = std::env::var("LISTEN_ADDR") {
        config.listen_addr = listen_addr;
    }

    tracing::info!(
        listen_addr = %config.listen_addr,
        sign_up_path = %config.gate.sign_up_path,
        public_routes = ?config.gate.public_routes,
        "Edge configuration loaded"
    );

    // Initialize the user-API backend
    #[cfg(feature = "dev-mode")]
    let backend = {
        tracing::warn!("DEV MODE ENABLED - using in-memory mock backend");
        tracing::warn!("Demo account: demo@betacall.io / Dem0!pass");
        Arc::new(MockAuthBackend::new().with_user("demo@betacall.io", "Dem0!pass"))
    };

    #[cfg(not(feature = "dev-mode"))]
    let backend = {
        let mut auth_config = AuthConfig::default();
        if let Ok(base_url) = std::env::var("BACKEND_BASE_URL") {
            auth_config.base_url = base_url;
        }
        tracing::info!(base_url = %auth_config.base_url, "User API client initialized");
        Arc::new(BetacallClient::new(auth_config))
    };

    // Build edge state and the full router
    let listen_addr = config.listen_addr.clone();
    let state = EdgeState::new(backend, config);
    let app = create_router(state);
    tracing::info!("Router configured with gate middleware");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
