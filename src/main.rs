//! Reserva server entry point
//!
//! REST API for the single-restaurant reservation manager. Reads
//! configuration from a TOML file (~/.config/reserva/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use reserva::application::ReservationService;
use reserva::domain::{RepositoryProvider, Table};
use reserva::infrastructure::database::migrator::Migrator;
use reserva::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RESERVA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Reserva reservation manager...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Initialize repository provider and core service
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Seed the dining room on first start
    seed_default_tables(repos.as_ref()).await;

    let service = Arc::new(ReservationService::new(repos));

    // ── REST API server ────────────────────────────────────────
    let app = create_api_router(service, prometheus_handle);
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs", addr);
    info!("Prometheus metrics at http://{}/metrics", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Insert the default dining-room layout when the tables table is empty.
async fn seed_default_tables(repos: &dyn RepositoryProvider) {
    match repos.tables().count().await {
        Ok(0) => {
            for (number, capacity, location) in [
                (1, 4, "Window"),
                (2, 2, "Bar"),
                (3, 6, "Garden"),
                (4, 8, "Private area"),
                (5, 4, "Main area"),
            ] {
                if let Err(e) = repos
                    .tables()
                    .save(Table::new(0, number, capacity, location))
                    .await
                {
                    error!("Failed to seed table #{}: {}", number, e);
                }
            }
            info!("Seeded default dining-room tables");
        }
        Ok(n) => info!("Found {} tables, skipping seed", n),
        Err(e) => error!("Failed to count tables: {}", e),
    }
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
