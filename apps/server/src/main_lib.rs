use std::sync::Arc;

use crate::{
    config::{Config, LogFormat},
    metrics,
};
use goals_core::{
    goals::{GoalService, GoalServiceTrait},
    health::{HealthService, HealthServiceTrait},
};
use goals_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    health::SqliteProbe,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
    pub metrics: PrometheusHandle,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer));
    let goal_service = Arc::new(GoalService::new(goal_repository));

    let probe = Arc::new(SqliteProbe::new(pool));
    let health_service = Arc::new(HealthService::new(probe));

    Ok(Arc::new(AppState {
        goal_service,
        health_service,
        metrics: metrics::install_recorder(),
    }))
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, draining connections");
}
