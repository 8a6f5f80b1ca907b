use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{DemoSettings, TrainingConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

/// Where to look for model files, and how to build the demo fallback
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_network_path")]
    pub network_path: String,
    #[serde(default = "default_linear_path")]
    pub linear_path: String,
    #[serde(default = "default_demo_enabled")]
    pub demo_enabled: bool,
    #[serde(default = "default_demo_seed")]
    pub demo_seed: u64,
    #[serde(default = "default_demo_samples")]
    pub demo_samples: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            network_path: default_network_path(),
            linear_path: default_linear_path(),
            demo_enabled: default_demo_enabled(),
            demo_seed: default_demo_seed(),
            demo_samples: default_demo_samples(),
        }
    }
}

impl ModelSettings {
    /// Demo model parameters, or `None` when the fallback is disabled
    pub fn demo(&self) -> Option<DemoSettings> {
        self.demo_enabled.then(|| DemoSettings {
            seed: self.demo_seed,
            samples: self.demo_samples,
            training: TrainingConfig::default(),
        })
    }
}

fn default_network_path() -> String { "model_breast_cancer.json".to_string() }
fn default_linear_path() -> String { "model_breast_cancer.toml".to_string() }
fn default_demo_enabled() -> bool { true }
fn default_demo_seed() -> u64 { 42 }
fn default_demo_samples() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROSE)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROSE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_model_settings() {
        let model = ModelSettings::default();
        assert_eq!(model.network_path, "model_breast_cancer.json");
        assert_eq!(model.linear_path, "model_breast_cancer.toml");
        assert!(model.demo_enabled);

        let demo = model.demo().unwrap();
        assert_eq!(demo.seed, 42);
        assert_eq!(demo.samples, 100);
    }

    #[test]
    fn test_demo_disabled() {
        let model = ModelSettings {
            demo_enabled: false,
            ..ModelSettings::default()
        };
        assert!(model.demo().is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 8081\n\n[model]\ndemo_seed = 7").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.port, 8081);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.model.demo_seed, 7);
        assert_eq!(settings.model.demo_samples, 100);
        assert_eq!(settings.logging.level, "info");
    }
}
