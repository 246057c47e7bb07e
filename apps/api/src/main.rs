mod catalog;
mod config;
mod documents;
mod errors;
mod extraction;
mod matching;
mod resumes;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    let catalog = SkillCatalog::load_or_builtin(config.skills_config.as_deref())?;
    info!(
        source = %config
            .skills_config
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        skills = catalog.skills.len(),
        fields = catalog.fields.fields().len(),
        "Skills catalog loaded"
    );

    let state = AppState::new(config.clone(), catalog)?;
    info!(
        name_scan_lines = state.extractor.patterns().name.scan_lines,
        skill_match_mode = ?state.extractor.patterns().skill_mode,
        max_upload_bytes = config.max_upload_bytes,
        "Field extractor ready"
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
