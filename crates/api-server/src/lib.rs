use application::AccountApp;
use axum::{
    routing::{get, post},
    Router,
};
use config::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod messages;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub account_app: Arc<AccountApp>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(account_app: AccountApp, config: Config) -> Self {
        Self {
            account_app: Arc::new(account_app),
            config: Arc::new(config),
        }
    }
}

/// Every route, with permissive CORS for the app running on a device or emulator.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/register", post(handlers::register_user))
        .route("/login", post(handlers::login_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
