pub mod http;
pub mod result;
pub mod tcp;

use std::fmt;
use std::time::Duration;

use reqwest::Client;

pub use result::ProbeResult;

/// A host to check, either an `http(s)://` URL or a bare address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Probed with an HTTP GET.
    Http,
    /// Probed with a TCP handshake on the default port.
    Address,
}

impl Target {
    pub fn new(target: impl Into<String>) -> Self {
        Target(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classification is by literal prefix only; anything else is treated as a host name.
    pub fn kind(&self) -> TargetKind {
        if self.0.starts_with("http://") || self.0.starts_with("https://") {
            TargetKind::Http
        } else {
            TargetKind::Address
        }
    }
}

impl From<&str> for Target {
    fn from(target: &str) -> Self {
        Target::new(target)
    }
}

impl From<String> for Target {
    fn from(target: String) -> Self {
        Target(target)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub default_port: u16,
    pub user_agent: String,
}

/// Performs single reachability checks. Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    connect_timeout: Duration,
    default_port: u16,
}

impl Prober {
    /// HTTP probes get no overall timeout, only the transport defaults apply.
    pub fn new(settings: &ProbeSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Prober {
            client,
            connect_timeout: settings.connect_timeout,
            default_port: settings.default_port,
        })
    }

    /// Check `target` once. Every failure is reported through the result's status.
    pub async fn probe(&self, target: &Target) -> ProbeResult {
        let (status, latency) = match target.kind() {
            TargetKind::Http => http::probe_url(&self.client, target.as_str()).await,
            TargetKind::Address => {
                tcp::probe_address(target.as_str(), self.default_port, self.connect_timeout).await
            }
        };

        log::debug!("{target}: {status} ({latency:?})");
        ProbeResult::new(target.clone(), status, latency)
    }
}
