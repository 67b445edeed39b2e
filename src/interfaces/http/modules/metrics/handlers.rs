//! Prometheus metrics handler
//!
//! Exposes `GET /metrics` in Prometheus text format, read from the
//! process-wide `metrics-exporter-prometheus` recorder.

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global recorder on first call and hand out its handle.
///
/// The recorder can only be installed once per process; later calls
/// (a server restarted inside the same process, tests) reuse it.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = PROM_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(PROM_HANDLE.get_or_init(|| handle).clone())
}

/// Shared state for the metrics endpoint
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// `GET /metrics`: Prometheus scrape endpoint
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.handle.render(),
    )
}
