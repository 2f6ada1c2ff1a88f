// KeepNote - minimal note-taking web application
// Entry point and server setup

use keepnote::config::Config;
use keepnote::database::{create_pool, Repository};
use keepnote::http::{router, AppState};
use keepnote::services::NotesService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keepnote=debug,tower_http=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting KeepNote");

    let config = Config::from_env();

    let pool = create_pool(&config.db_path).await?;
    let notes = NotesService::new(Repository::new(pool));
    let app = router(AppState::new(notes));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
