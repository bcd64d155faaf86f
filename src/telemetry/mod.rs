//! Telemetry module
//!
//! Logging and metrics

mod logging;
mod metrics;

pub use self::logging::{init_logging, LogFormat};
pub use self::metrics::{record_latency, record_load_outcome, LatencyMetric, LOAD_TOTAL};

use crate::config::TelemetryConfig;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Keeps the metrics exporter alive; stops it on drop
pub struct TelemetryGuard {
    exporter: Option<JoinHandle<()>>,
}

impl TelemetryGuard {
    /// Whether a Prometheus exporter was started
    pub fn metrics_exporter_running(&self) -> bool {
        self.exporter
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(task) = self.exporter.take() {
            task.abort();
            tracing::debug!("Stopped metrics exporter");
        }
    }
}

/// Initialize all telemetry subsystems
///
/// Must be called from within a tokio runtime when a metrics port is set.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    let exporter = config.metrics_port.map(start_metrics_exporter).transpose()?;

    Ok(TelemetryGuard { exporter })
}

/// Install the Prometheus recorder and serve it on `port`
fn start_metrics_exporter(port: u16) -> anyhow::Result<JoinHandle<()>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let (recorder, exporter) = PrometheusBuilder::new()
        .with_http_listener(addr)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build metrics exporter: {}", e))?;

    ::metrics::set_global_recorder(recorder)
        .map_err(|_| anyhow::anyhow!("A metrics recorder is already installed"))?;

    let task = tokio::spawn(async move {
        if let Err(e) = exporter.await {
            tracing::error!(error = ?e, "Metrics exporter failed");
        }
    });

    tracing::info!(%addr, "Prometheus metrics exporter listening");

    Ok(task)
}
