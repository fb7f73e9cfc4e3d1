//! Prometheus metrics middleware exposing `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build the metrics middleware under the `leaderboard` namespace.
///
/// # Errors
/// Returns a message when the Prometheus registry rejects the collectors.
pub(crate) fn make_metrics() -> Result<PrometheusMetrics, String> {
    PrometheusMetricsBuilder::new("leaderboard")
        .endpoint("/metrics")
        .build()
        .map_err(|error| format!("configure Prometheus metrics: {error}"))
}
