use crate::easing::Easing;
use crate::tween::TweenOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_easing")]
    pub easing: Easing,

    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,

    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: i64,

    #[serde(default)]
    pub initial_throttle: bool,

    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            easing: default_easing(),
            duration_ms: default_duration_ms(),
            throttle_ms: default_throttle_ms(),
            initial_throttle: false,
            bar_width: default_bar_width(),
        }
    }
}

fn default_easing() -> Easing {
    Easing::OutElastic
}

fn default_duration_ms() -> i64 {
    1000
}

fn default_throttle_ms() -> i64 {
    16 // ~60 samples per second
}

fn default_bar_width() -> u32 {
    40
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("tweener").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_toml_str(&contents)
                .with_context(|| format!("Invalid config in {}", config_path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::path()?;
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(config_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_ms < 0 {
            anyhow::bail!("duration_ms must not be negative, got {}", self.duration_ms);
        }
        if self.throttle_ms < 0 {
            anyhow::bail!("throttle_ms must not be negative, got {}", self.throttle_ms);
        }
        if self.bar_width == 0 {
            anyhow::bail!("bar_width must be at least 1");
        }
        Ok(())
    }

    pub fn tween_options(&self) -> TweenOptions {
        TweenOptions {
            throttle_ms: self.throttle_ms,
            initial_throttle: self.initial_throttle,
        }
    }
}
