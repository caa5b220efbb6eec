use std::fmt::Write;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};

use super::result::ERROR_PREFIX;

/// Issue a GET against `url` and describe the outcome.
/// The body is never read; dropping the response releases the connection.
pub(super) async fn probe_url(client: &Client, url: &str) -> (String, Duration) {
    let start = Instant::now();
    let response = client.get(url).send().await;
    let latency = start.elapsed();

    let status = match response {
        Ok(resp) => status_line(resp.status()),
        Err(err) => format!("{ERROR_PREFIX}{}", report(&err)),
    };

    (status, latency)
}

/// `"<code> <reason>"`, or just the code when the status has no canonical reason.
pub(super) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    }
}

/// Flatten an error and its source chain into a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Leaf;

    impl std::fmt::Display for Leaf {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl std::error::Error for Leaf {}

    #[derive(Debug)]
    struct Outer(Leaf);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_report_joins_source_chain() {
        assert_eq!(report(&Outer(Leaf)), "error sending request: connection refused");
        assert_eq!(report(&Leaf), "connection refused");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(StatusCode::OK), "200 OK");
        assert_eq!(status_line(StatusCode::NOT_FOUND), "404 Not Found");
        assert_eq!(
            status_line(StatusCode::SERVICE_UNAVAILABLE),
            "503 Service Unavailable"
        );
        let unknown = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_line(unknown), "599");
    }
}
