mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config.database_url).await?;
    startup::seed_database(&db, &config).await?;

    let app = router::router(config.api_docs_enabled).with_state(AppState::new(db));

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("Listening on http://{}", config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
