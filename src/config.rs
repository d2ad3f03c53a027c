//! Site configuration.
//!
//! Every field has a default, so an empty `{}` file (or no file at all)
//! yields a working configuration. `FOLIO_CONFIG` names the JSON file;
//! `FOLIO_STORE_DIR` overrides the preference directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::state::ScrollConfig;

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
pub const STORE_DIR_ENV: &str = "FOLIO_STORE_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub store_dir: PathBuf,
    pub export_path: PathBuf,
    pub header_scroll_threshold: f32,
    pub scroll_spy_offset: f32,
    pub header_height: f32,
    pub particles: ParticleConfig,
    pub notification_ttl_ms: u64,
    pub typing_interval_ms: u64,
    pub typing_delay_ms: u64,
    pub counter_steps: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("./.folio"),
            export_path: PathBuf::from("./folio.html"),
            header_scroll_threshold: 100.0,
            scroll_spy_offset: 100.0,
            header_height: 80.0,
            particles: ParticleConfig::default(),
            notification_ttl_ms: 5000,
            typing_interval_ms: 150,
            typing_delay_ms: 1000,
            counter_steps: 50,
        }
    }
}

/// Background particle tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Canvas area (px²) per particle.
    pub area_per_particle: f32,
    pub max_particles: usize,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub link_distance: f32,
    pub max_velocity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            max_particles: 100,
            pointer_radius: 150.0,
            pointer_strength: 0.0005,
            link_distance: 120.0,
            max_velocity: 2.0,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "config {}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for ConfigError {}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let err = |message: String| ConfigError {
            path: path.to_path_buf(),
            message,
        };
        let text = std::fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        let config: SiteConfig = serde_json::from_str(&text).map_err(|e| err(e.to_string()))?;
        config.validate().map_err(err)?;
        Ok(config)
    }

    /// Load from `FOLIO_CONFIG` if set, else defaults. Never fails: a bad
    /// file is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(STORE_DIR_ENV) {
            config.store_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn scroll(&self) -> ScrollConfig {
        ScrollConfig {
            header_threshold: self.header_scroll_threshold,
            spy_offset: self.scroll_spy_offset,
            header_height: self.header_height,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.particles.area_per_particle > 0.0) {
            return Err("particles.area_per_particle must be positive".into());
        }
        let p = &self.particles;
        for (name, value) in [
            ("max_velocity", p.max_velocity),
            ("pointer_radius", p.pointer_radius),
            ("link_distance", p.link_distance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("particles.{} must be a finite, non-negative number", name));
            }
        }
        if self.counter_steps == 0 {
            return Err("counter_steps must be at least 1".into());
        }
        Ok(())
    }
}
