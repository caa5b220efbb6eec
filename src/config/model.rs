use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_TARGETS_FILE: &str = "targets.txt";
pub const DEFAULT_LOG_FILE: &str = "network_log.csv";
pub const DEFAULT_POLLING_INTERVAL_SECONDS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_PORT: u16 = 80;

/// The on-disk configuration for the monitor.
/// Every field is optional; a missing file or an empty document yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Text file listing one target per line. Re-read at the start of every round.
    pub targets_file: PathBuf,

    /// CSV file every probe result is appended to.
    pub log_file: PathBuf,

    /// Seconds between the start of two rounds.
    pub polling_interval_seconds: u64,

    /// Timeout for the TCP handshake of bare-address targets.
    pub connect_timeout_seconds: u64,

    /// Port dialled for bare-address targets.
    pub default_port: u16,

    /// Overrides the `User-Agent` header sent with HTTP(S) probes.
    pub user_agent: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            targets_file: PathBuf::from(DEFAULT_TARGETS_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            polling_interval_seconds: DEFAULT_POLLING_INTERVAL_SECONDS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
            default_port: DEFAULT_PORT,
            user_agent: None,
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.targets_file, PathBuf::from("targets.txt"));
        assert_eq!(config.log_file, PathBuf::from("network_log.csv"));
        assert_eq!(config.polling_interval_seconds, 30);
        assert_eq!(config.connect_timeout_seconds, 5);
        assert_eq!(config.default_port, 80);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
                    targets_file: /etc/netwatch/targets.txt
                    polling_interval_seconds: 10
                    "#;

        let config: MonitorConfig = serde_yaml::from_str(yaml).expect("Invalid YAML");
        assert_eq!(config.targets_file, PathBuf::from("/etc/netwatch/targets.txt"));
        assert_eq!(config.polling_interval_seconds, 10);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.connect_timeout_seconds, DEFAULT_CONNECT_TIMEOUT_SECONDS);
        assert_eq!(config.default_port, DEFAULT_PORT);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
                    targets_file: hosts.txt
                    log_file: out.csv
                    polling_interval_seconds: 60
                    connect_timeout_seconds: 2
                    default_port: 8080
                    user_agent: netwatch-test/1.0
                    "#;

        let config: MonitorConfig = serde_yaml::from_str(yaml).expect("Invalid YAML");
        assert_eq!(
            config,
            MonitorConfig {
                targets_file: PathBuf::from("hosts.txt"),
                log_file: PathBuf::from("out.csv"),
                polling_interval_seconds: 60,
                connect_timeout_seconds: 2,
                default_port: 8080,
                user_agent: Some("netwatch-test/1.0".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let yaml = "default_port: not-a-port";
        assert!(serde_yaml::from_str::<MonitorConfig>(yaml).is_err());
    }
}
