use api_server::{router, AppState};
use application::AccountApp;
use config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    info!("🚀 Starting {} v{}", config.title, config.version);

    let account_app = AccountApp::new();
    let seeded = account_app.account_service.user_count().await?;
    info!("👥 User store seeded with {} accounts", seeded);

    let bind_address = config.bind_address();
    let app = router(AppState::new(account_app, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET  /          - Server status");
    info!("   POST /register  - Create an account (name, email?, password, phone)");
    info!("   POST /login     - Log in with email or phone (identifier, password)");

    axum::serve(listener, app).await?;

    Ok(())
}
