use std::time::Duration;

use chrono::{DateTime, Utc};

use super::Target;

pub const STATUS_UP: &str = "UP";
pub const STATUS_DOWN: &str = "DOWN";
pub const ERROR_PREFIX: &str = "Error: ";

/// Outcome of a single probe. Built once by the prober and handed to the result logger by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Moment the result was constructed, after the probe resolved.
    pub timestamp: DateTime<Utc>,
    pub target: Target,
    /// HTTP status line, `UP`/`DOWN`, or an `Error: ...` description.
    pub status: String,
    pub latency: Duration,
}

impl ProbeResult {
    pub fn new(target: Target, status: String, latency: Duration) -> Self {
        ProbeResult {
            timestamp: Utc::now(),
            target,
            status,
            latency,
        }
    }
}
