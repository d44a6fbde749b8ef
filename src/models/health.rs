use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// RFC3339, second precision.
    pub time: String,
    pub products: usize,
}

impl HealthStatus {
    pub fn healthy(now: DateTime<Utc>, products: usize) -> Self {
        Self {
            status: "healthy",
            time: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            products,
        }
    }
}
