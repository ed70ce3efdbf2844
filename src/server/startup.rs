use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::seed::SeedService};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the configured connection string, then runs all
/// pending SeaORM migrations so the schema is up-to-date before any query runs.
///
/// # Arguments
/// - `database_url` - SQLite connection string, e.g. `sqlite://taskboard.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds fake data unless disabled in configuration.
///
/// Runs before the listener is bound, so no request can observe a half-seeded database.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_enabled {
        tracing::info!("Seeding disabled, skipping");
        return Ok(());
    }

    let summary = SeedService::new(db).seed(&config.seed).await?;

    if summary.skipped {
        tracing::info!("Database already contains users, skipping seed");
    } else {
        tracing::info!(
            users = summary.users,
            tasks = summary.tasks,
            comments = summary.comments,
            friendship_pairs = summary.friendship_pairs,
            "Seeded database"
        );
    }

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
