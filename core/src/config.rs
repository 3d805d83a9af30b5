//! Page configuration loaded from TOML.
//!
//! Every key is optional; missing sections fall back to the values used for
//! the published page.

use crate::counter::CounterConfig;
use crate::error::ConfigError;
use crate::fixtures::assets;
use crate::score::Score;
use crate::visibility::Threshold;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Full page configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Results dialog count-up.
    pub counter: CounterSettings,
    /// Substrate bar reveal.
    pub reveal: RevealSettings,
    /// External asset URLs.
    pub assets: AssetUrls,
}

/// `[counter]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    /// Final score.
    pub target: f64,
    /// Step per tick.
    pub increment: f64,
    /// Delay before ticking starts, in milliseconds.
    pub initial_delay_ms: u64,
    /// Tick period in milliseconds.
    pub tick_period_ms: u64,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            target: 8.5,
            increment: 0.1,
            initial_delay_ms: 300,
            tick_period_ms: 20,
        }
    }
}

/// `[reveal]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction that triggers the bars.
    pub threshold: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: Threshold::default().get(),
        }
    }
}

/// `[assets]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetUrls {
    /// Map iframe source.
    pub map_embed: String,
    /// Lab photo.
    pub lab_photo: String,
    /// Efemerotteri dialog picture.
    pub efemerottero_image: String,
    /// Agency website linked from the acknowledgements dialog.
    pub arpa_site: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self {
            map_embed: assets::MAP_EMBED.to_string(),
            lab_photo: assets::LAB_PHOTO.to_string(),
            efemerottero_image: assets::EFEMEROTTERO_IMAGE.to_string(),
            arpa_site: assets::ARPA_SITE.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded page config");
        Ok(config)
    }

    /// Check ranges without building runtime types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.threshold()?;
        self.counter_config()?;
        Ok(())
    }

    /// Reveal threshold.
    pub fn threshold(&self) -> Result<Threshold, ConfigError> {
        Threshold::new(self.reveal.threshold)
    }

    /// Counter timings with values converted to tenths.
    pub fn counter_config(&self) -> Result<CounterConfig, ConfigError> {
        let settings = &self.counter;
        if !(settings.target.is_finite() && settings.target >= 0.0) {
            return Err(ConfigError::InvalidTarget(settings.target));
        }
        let increment = Score::from_f64(settings.increment);
        if !settings.increment.is_finite() || increment == Score::ZERO {
            return Err(ConfigError::InvalidIncrement(settings.increment));
        }
        if settings.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(CounterConfig {
            target: Score::from_f64(settings.target),
            increment,
            initial_delay: Duration::from_millis(settings.initial_delay_ms),
            tick_period: Duration::from_millis(settings.tick_period_ms),
        })
    }
}
