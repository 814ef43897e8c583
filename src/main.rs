use sage::answer::AnswerClient;
use sage::api::{self, AppState};
use sage::config::Config;
use sage::search::SearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let answer = AnswerClient::new(&config)?;
    let search = SearchClient::new(&config)?;
    let app = api::create_router(AppState::new(answer, search), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
