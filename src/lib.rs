//! Nginx access log analyzer: parse the newest access log, aggregate
//! per-URL latency statistics and render a static HTML report.

pub mod config;
pub mod discovery;
pub mod error;
pub mod log;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod render;

pub use error::AnalyzeError;
pub use model::ReportRow;

pub type Result<T> = anyhow::Result<T>;
