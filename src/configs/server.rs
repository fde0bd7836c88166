use serde::{Deserialize, Serialize};

/// Embedded HTTP selection API settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// When false the daemon runs attract-only, with no network interface.
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Human-usable base URL for log output. A wildcard bind address is
    /// rendered as localhost.
    pub fn public_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_maps_wildcard_to_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.public_url(), "http://localhost:8080");
    }

    #[test]
    fn public_url_keeps_explicit_host() {
        let config = ServerConfig {
            host: "192.168.1.20".into(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.public_url(), "http://192.168.1.20:9000");
    }
}
