//! Load metrics

use std::time::Duration;

/// Counter of emitted load results, labelled by outcome
pub const LOAD_TOTAL: &str = "cryptofeed_load_total";

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Round trip of the feed HTTP request
    HttpRequest,
}

impl LatencyMetric {
    fn name(&self) -> &'static str {
        match self {
            LatencyMetric::HttpRequest => "cryptofeed_http_latency_ms",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = metric.name();

    ::metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
    tracing::trace!(
        metric = metric_name,
        value_ms = duration.as_millis(),
        "Recording latency"
    );
}

/// Count one emitted load result
pub fn record_load_outcome(outcome: &'static str) {
    ::metrics::counter!(LOAD_TOTAL, "outcome" => outcome).increment(1);
}
