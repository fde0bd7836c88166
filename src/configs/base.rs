use serde::{Deserialize, Serialize};

use crate::common::types::AnyResult;
use crate::configs::*;

/// Top-level daemon configuration.
///
/// Every section carries serde defaults, so a missing or partial
/// `config.toml` always yields a complete, working configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub display: DisplayConfig,
    pub attract: AttractConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn load() -> AnyResult<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> AnyResult<Self> {
        // Called before logging is up, so a missing file is silently the
        // default configuration; a file that exists but fails to parse is
        // still an error.
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kiosk_expectations() {
        let config = Config::default();
        assert!(config.server.enabled);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.attract.volume, 80);
        assert_eq!(config.attract.pre_roll_ms, 1000);
        assert_eq!(config.attract.poll_interval_ms, 500);
        assert!(!config.display.fullscreen);
        assert!(config.logging.is_none());
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9090

            [attract]
            volume = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.attract.volume, 40);
        assert_eq!(config.attract.flash_interval_ms, 800);
        assert_eq!(config.display.width, 1920);
    }

    #[test]
    fn logging_section_parses() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"

            [logging.file]
            path = "logs/karalink.log"
            "#,
        )
        .unwrap();

        let logging = config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        let file = logging.file.unwrap();
        assert_eq!(file.path, "logs/karalink.log");
        assert_eq!(file.max_lines, 10_000);
    }
}
