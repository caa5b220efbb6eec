use std::fmt::Write;
use std::time::Duration;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::probe::ProbeResult;

pub const HEADER: [&str; 4] = ["Timestamp", "Target", "Status", "Latency"];

/// One CSV row, in `HEADER` column order.
#[derive(Debug, Serialize)]
pub struct LogRecord<'a> {
    pub timestamp: String,
    pub target: &'a str,
    pub status: &'a str,
    pub latency: String,
}

impl<'a> From<&'a ProbeResult> for LogRecord<'a> {
    fn from(result: &'a ProbeResult) -> Self {
        LogRecord {
            timestamp: result.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            target: result.target.as_str(),
            status: &result.status,
            latency: format_latency(result.latency),
        }
    }
}

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;

/// Render a duration the way Go's `time.Duration` prints:
/// `850ns`, `12.5µs`, `123.456ms`, `2m3.5s`.
pub fn format_latency(latency: Duration) -> String {
    let nanos = latency.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return decimal(nanos, NANOS_PER_MICRO, "µs");
    }
    if nanos < NANOS_PER_SEC {
        return decimal(nanos, NANOS_PER_MILLI, "ms");
    }

    let minutes = nanos / NANOS_PER_MIN;
    let mut out = String::new();
    if minutes >= 60 {
        let _ = write!(out, "{}h{}m", minutes / 60, minutes % 60);
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&decimal(nanos % NANOS_PER_MIN, NANOS_PER_SEC, "s"));
    out
}

/// `value / unit` with the remainder as a fraction, trailing zeros trimmed.
fn decimal(value: u128, unit: u128, suffix: &str) -> String {
    let whole = value / unit;
    let fraction = value % unit;
    if fraction == 0 {
        return format!("{whole}{suffix}");
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}{suffix}", digits.trim_end_matches('0'))
}
