use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WORKERS, MAX_WORKERS};
use crate::domain::model::{Shape, ShapeLimits};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_limits, validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub circle: Option<LimitsConfig>,
    pub dome: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
}

/// Per-shape overrides; unset fields keep the built-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub min_radius: Option<u32>,
    pub max_radius: Option<u32>,
    pub default_radius: Option<u32>,
    pub max_thickness: Option<u32>,
    pub default_thickness: Option<u32>,
}

impl LimitsConfig {
    pub fn resolve(&self, base: ShapeLimits) -> ShapeLimits {
        ShapeLimits {
            min_radius: self.min_radius.unwrap_or(base.min_radius),
            max_radius: self.max_radius.unwrap_or(base.max_radius),
            default_radius: self.default_radius.unwrap_or(base.default_radius),
            max_thickness: self.max_thickness.unwrap_or(base.max_thickness),
            default_thickness: self.default_thickness.unwrap_or(base.default_thickness),
        }
    }
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command line values win over the file when given.
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(host) = &cli.host {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = cli.port {
            self.server.port = Some(port);
        }
        if let Some(workers) = cli.workers {
            self.server.workers = Some(workers);
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("server.host", self.host())?;
        validate_range("server.workers", self.workers(), 1, MAX_WORKERS)?;
        validate_limits(Shape::Circle, &self.limits(Shape::Circle))?;
        validate_limits(Shape::Dome, &self.limits(Shape::Dome))?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    fn workers(&self) -> usize {
        self.server.workers.unwrap_or(DEFAULT_WORKERS)
    }

    fn limits(&self, shape: Shape) -> ShapeLimits {
        let section = match shape {
            Shape::Circle => self.circle.as_ref(),
            Shape::Dome => self.dome.as_ref(),
        };
        let base = ShapeLimits::builtin(shape);
        section.map(|s| s.resolve(base)).unwrap_or(base)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080
workers = 2

[circle]
max_radius = 120
default_radius = 16

[dome]
max_thickness = 4
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.workers(), 2);

        let circle = config.limits(Shape::Circle);
        assert_eq!(circle.max_radius, 120);
        assert_eq!(circle.default_radius, 16);
        assert_eq!(circle.min_radius, 1);

        let dome = config.limits(Shape::Dome);
        assert_eq!(dome.max_thickness, 4);
        assert_eq!(dome.max_radius, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_builtins() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.limits(Shape::Circle), ShapeLimits::CIRCLE);
        assert_eq!(config.limits(Shape::Dome), ShapeLimits::DOME);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VOXEL_DOME_TEST_HOST", "10.1.2.3");

        let toml_content = r#"
[server]
host = "${VOXEL_DOME_TEST_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.host(), "10.1.2.3");

        std::env::remove_var("VOXEL_DOME_TEST_HOST");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
[server]
host = "${VOXEL_DOME_SURELY_UNSET}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.host(), "${VOXEL_DOME_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[dome]
max_radius = 500
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[server]\nworkers = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
port = 6001
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 6001);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str("[server]\nport = 6001\nworkers = 8\n").unwrap();
        let cli = crate::config::CliConfig::parse_from(["voxel-dome", "--port", "7000"]);
        config.apply_overrides(&cli);

        assert_eq!(config.port(), 7000);
        assert_eq!(config.workers(), 8);
    }
}
