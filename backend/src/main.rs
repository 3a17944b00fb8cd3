#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use bloom_backend::AppState;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

fn required_var(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

/// `RUST_LOG` when set, otherwise info.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(log_filter())
        .init();

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    let frontend_dir = required_var("FRONTEND_DIR")?;
    let config_dir = required_var("CONFIG_DIR")?;
    let lyrics_dir = required_var("LYRICS_DIR")?;
    let port = required_var("PORT")?;

    info!("Starting server");

    let state = AppState::from_config(&config_dir, &lyrics_dir)?;
    info!(
        "Serving {} lyric files, version {}",
        state.lyrics.len(),
        state.updates.current_version()
    );

    let app = bloom_backend::app(state, &frontend_dir);

    // run our app with hyper, listening globally on PORT
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
