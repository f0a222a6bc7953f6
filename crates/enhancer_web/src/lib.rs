//! Enhancer Web - browser form for the prompt enhancer

pub mod handlers;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};
use minijinja::Environment;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const PAGE_TEMPLATE: &str = "page.html";

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    /// OpenAI-compatible API base; `None` uses the public OpenAI endpoint
    pub backend_url: Option<String>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(backend_url: Option<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../templates/page.html"))?;
        Ok(Self {
            backend_url,
            templates: Arc::new(env),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/enhance", post(handlers::enhance))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
