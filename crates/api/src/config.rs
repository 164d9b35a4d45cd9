use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to the data file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8050`).
    pub port: u16,
    /// Backing CSV file (default: `boat_data.csv`).
    pub data_file: PathBuf,
    /// Standalone chart file rewritten on every render (default: `plot.html`).
    pub plot_file: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `HOST`                 | `0.0.0.0`        |
    /// | `PORT`                 | `8050`           |
    /// | `DATA_FILE`            | `boat_data.csv`  |
    /// | `PLOT_FILE`            | `plot.html`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", "0.0.0.0", "an IP address")?;
        let port = parse_var(&lookup, "PORT", "8050", "a valid u16")?;
        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "a valid u64")?;

        let data_file: PathBuf = lookup("DATA_FILE")
            .unwrap_or_else(|| "boat_data.csv".into())
            .into();
        let plot_file: PathBuf = lookup("PLOT_FILE")
            .unwrap_or_else(|| "plot.html".into())
            .into();

        Ok(Self {
            host,
            port,
            data_file,
            plot_file,
            request_timeout_secs,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8050");
        assert_eq!(config.data_file, PathBuf::from("boat_data.csv"));
        assert_eq!(config.plot_file, PathBuf::from("plot.html"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATA_FILE", "/tmp/boats.csv"),
            ("PLOT_FILE", "/tmp/boats.html"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.data_file, PathBuf::from("/tmp/boats.csv"));
        assert_eq!(config.plot_file, PathBuf::from("/tmp/boats.html"));
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(load(&[("HOST", "not-an-ip")]).is_err());
    }
}
