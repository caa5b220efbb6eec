use std::time::{Duration, Instant};

use tokio::{net::TcpStream, time::timeout};

use super::result::{STATUS_DOWN, STATUS_UP};

/// Attempt a TCP handshake with `host:port`, name resolution included in `connect_timeout`.
pub(super) async fn probe_address(
    host: &str,
    port: u16,
    connect_timeout: Duration,
) -> (String, Duration) {
    let start = Instant::now();
    let outcome = timeout(connect_timeout, TcpStream::connect((host, port))).await;
    let latency = start.elapsed();

    let status = match outcome {
        Ok(Ok(_stream)) => STATUS_UP,
        Ok(Err(err)) => {
            log::debug!("tcp connect to {host}:{port} failed: {err}");
            STATUS_DOWN
        }
        Err(_) => {
            log::debug!("tcp connect to {host}:{port} timed out after {connect_timeout:?}");
            STATUS_DOWN
        }
    };

    (status.to_string(), latency)
}
