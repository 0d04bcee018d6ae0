//! Configuration file support for Starling.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/starling/config.toml`.

use crate::curve::MAX_CURVE_STEPS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// EDV range and curve resolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_min_edv")]
    pub min_edv: f64,

    #[serde(default = "default_max_edv")]
    pub max_edv: f64,

    #[serde(default = "default_initial_edv")]
    pub initial_edv: f64,

    #[serde(default = "default_curve_steps")]
    pub curve_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_edv: default_min_edv(),
            max_edv: default_max_edv(),
            initial_edv: default_initial_edv(),
            curve_steps: default_curve_steps(),
        }
    }
}

/// Report export configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

// Default value functions
fn default_min_edv() -> f64 {
    50.0
}

fn default_max_edv() -> f64 {
    280.0
}

fn default_initial_edv() -> f64 {
    120.0
}

fn default_curve_steps() -> usize {
    100
}

fn default_output_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(std::env::temp_dir);
    base.join("starling").join("reports")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("starling").join("config.toml")
    }

    /// Check that the simulation range is usable
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        for (name, value) in [
            ("min_edv", sim.min_edv),
            ("max_edv", sim.max_edv),
            ("initial_edv", sim.initial_edv),
        ] {
            if !value.is_finite() {
                return Err(Error::Config(format!("{} must be finite", name)));
            }
        }
        if sim.min_edv >= sim.max_edv {
            return Err(Error::Config(format!(
                "min_edv ({}) must be below max_edv ({})",
                sim.min_edv, sim.max_edv
            )));
        }
        if sim.curve_steps == 0 {
            return Err(Error::Config("curve_steps must be at least 1".into()));
        }
        if sim.curve_steps > MAX_CURVE_STEPS {
            return Err(Error::Config(format!(
                "curve_steps must not exceed {}",
                MAX_CURVE_STEPS
            )));
        }
        Ok(())
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.min_edv, 50.0);
        assert_eq!(config.simulation.max_edv, 280.0);
        assert_eq!(config.simulation.initial_edv, 120.0);
        assert_eq!(config.simulation.curve_steps, 100);
        assert!(config.export.output_dir.ends_with("starling/reports"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[simulation]
curve_steps = 50
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.curve_steps, 50);
        assert_eq!(config.simulation.max_edv, 280.0); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.simulation.initial_edv = 150.0;
        config.export.output_dir = temp_dir.path().join("out");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.simulation.initial_edv, 150.0);
        assert_eq!(loaded.export.output_dir, temp_dir.path().join("out"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[simulation]\nmin_edv = 300.0\nmax_edv = 100.0\n",
        )
        .unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut config = Config::default();
        config.simulation.curve_steps = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_excessive_steps_rejected() {
        let mut config = Config::default();
        config.simulation.curve_steps = MAX_CURVE_STEPS + 1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.simulation.curve_steps = MAX_CURVE_STEPS;
        assert!(config.validate().is_ok());
    }
}
