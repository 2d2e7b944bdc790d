use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{config::Config, error::AppError};

mod assets;
mod contact;
mod health;
mod index;
mod jump;

pub use assets::{AssetsService, export_assets};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/jump/{id}", get(jump::section))
        .route("/contact/send", get(contact::send))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
