//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader, decision gate, server
//!     → logging.rs (tracing events to stdout)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - The shared secret never appears in a log field
//! - Request ID from tower-http flows through the trace spans

pub mod logging;
pub mod metrics;
