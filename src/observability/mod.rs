//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Transport and startup code produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to every request span
//! - The grouping core stays silent; only the HTTP layer reports

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
