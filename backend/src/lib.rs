use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::services::ServeDir;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
};
use tracing::debug;

pub mod api;
pub mod config;
pub mod lyrics;
pub mod update;

use api::{PageView, UpdateNotice};
use config::PageConfig;
use lyrics::{LyricCatalog, LyricSheet};
use update::UpdateChecker;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the handlers share. Read-only once the server is up.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PageConfig>,
    pub lyrics: Arc<LyricCatalog>,
    pub updates: Arc<UpdateChecker>,
}

impl AppState {
    pub fn new(config: PageConfig, lyrics_dir: impl AsRef<Path>) -> Result<Self> {
        let lyrics = LyricCatalog::new(lyrics_dir.as_ref(), config.lyrics.clone());
        let updates = UpdateChecker::new(&config.current_version, config.version_url.clone())?;
        Ok(Self {
            config: Arc::new(config),
            lyrics: Arc::new(lyrics),
            updates: Arc::new(updates),
        })
    }

    pub fn from_config(config_dir: &str, lyrics_dir: &str) -> Result<Self> {
        Self::new(PageConfig::from_config(config_dir)?, lyrics_dir)
    }
}

async fn handle_page(State(state): State<AppState>) -> Json<PageView> {
    Json(state.config.view())
}

async fn handle_lyrics(
    State(state): State<AppState>,
    UrlPath(index): UrlPath<usize>,
) -> Result<Json<LyricSheet>, StatusCode> {
    debug!("Lyrics requested: {}", index);
    state
        .lyrics
        .load(index)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn handle_update(State(state): State<AppState>) -> Json<UpdateNotice> {
    Json(UpdateNotice {
        message: state.updates.check().await,
    })
}

pub fn page_api(state: AppState) -> Router {
    Router::new()
        .route("/page", get(handle_page))
        .route("/lyrics/:index", get(handle_lyrics))
        .route("/update", get(handle_update))
        .with_state(state)
}

/// The api under `/api`, the static frontend everywhere else.
pub fn app(state: AppState, frontend_dir: impl AsRef<Path>) -> Router {
    let frontend = ServeDir::new(frontend_dir.as_ref());

    let middleware = tower::ServiceBuilder::new()
        .layer(CompressionLayer::new().quality(tower_http::CompressionLevel::Fastest))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CatchPanicLayer::new());

    Router::new()
        .nest("/api", page_api(state))
        .fallback_service(frontend)
        .layer(middleware)
}
