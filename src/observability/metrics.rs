//! Metrics collection and exposition.
//!
//! # Metrics
//! - `anagram_requests_total` (counter): requests by origin, algorithm, status
//! - `anagram_request_duration_seconds` (histogram): handler latency
//! - `anagram_words_total` (counter): words read from sources
//! - `anagram_groups_total` (counter): anagram groups returned
//!
//! Recording without an installed exporter is a no-op, so handlers call these
//! unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one finished `/anagram` request.
pub fn record_request(origin: &str, algorithm: &str, status: u16, start: Instant) {
    metrics::counter!(
        "anagram_requests_total",
        "origin" => origin.to_string(),
        "algorithm" => algorithm.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "anagram_request_duration_seconds",
        "origin" => origin.to_string(),
        "algorithm" => algorithm.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the size of one grouping run.
pub fn record_grouping(origin: &str, words: usize, groups: usize) {
    metrics::counter!("anagram_words_total", "origin" => origin.to_string()).increment(words as u64);
    metrics::counter!("anagram_groups_total", "origin" => origin.to_string()).increment(groups as u64);
}
