//! Prometheus metrics for the goals API.
//!
//! Metric names follow the Prometheus conventions (`_total` for counters,
//! `_seconds` for durations). Paths are recorded as matched route templates
//! so ids never explode label cardinality.

use std::sync::OnceLock;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const GOALS_CREATED_TOTAL: &str = "goals_created_total";
pub const GOALS_DELETED_TOTAL: &str = "goals_deleted_total";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the process-wide Prometheus recorder on first use and returns
/// a handle for rendering it.
pub fn install_recorder() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if let Err(e) = metrics::set_global_recorder(recorder) {
                tracing::warn!("Metrics recorder already installed: {}", e);
            }
            tracing::info!("Metrics system initialized");
            handle
        })
        .clone()
}

/// Route-level middleware recording request counts and latency.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => method, "path" => path)
        .record(latency);

    response
}

pub fn record_goal_created() {
    metrics::counter!(GOALS_CREATED_TOTAL).increment(1);
}

pub fn record_goal_deleted() {
    metrics::counter!(GOALS_DELETED_TOTAL).increment(1);
}
