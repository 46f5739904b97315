use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedback_analyzer::api::{self, AppState};
use feedback_analyzer::config::Config;
use feedback_analyzer::lexicon::AfinnLexicon;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let state = Arc::new(AppState::from_config(&config));
    info!(
        feedback_capacity = ?state.feedback.capacity(),
        comment_capacity = ?state.comments.capacity(),
        lexicon_words = AfinnLexicon.len(),
        "in-memory stores initialized"
    );
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
    let addr = listener.local_addr()?;
    info!("Server running at http://{}", addr);
    info!("Swagger docs at http://{}/docs", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
