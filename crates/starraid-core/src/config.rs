//! Field configuration: seed and tuning parameters.
//!
//! Defaults come from `constants`. A TOML file may override any subset of
//! the keys; anything it leaves out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range.
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration for a field engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// RNG seed for star placement and debris. Same seed = same simulation.
    pub seed: u64,
    pub size_factor: f64,
    /// Radians per second.
    pub turn_rate: f64,
    pub missile_speed: f64,
    /// Seconds.
    pub missile_lifetime: f64,
    pub speed_factor: f64,
    pub observer_distance: f64,
    pub max_view_depth: f64,
    pub field_half_width: f64,
    pub field_depth: f64,
    pub scan_distance: f64,
    pub scan_size: f64,
    pub debris_speed: f64,
    /// Seconds.
    pub debris_duration: f64,
    pub debris_size_scale: f64,
    pub missile_radius: f64,
    pub bogey_radius: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            size_factor: SIZE_FACTOR,
            turn_rate: TURN_RATE,
            missile_speed: MISSILE_SPEED,
            missile_lifetime: MISSILE_LIFETIME,
            speed_factor: SPEED_FACTOR,
            observer_distance: OBSERVER_DISTANCE,
            max_view_depth: MAX_VIEW_DEPTH,
            field_half_width: FIELD_HALF_WIDTH,
            field_depth: FIELD_DEPTH,
            scan_distance: SCAN_DISTANCE,
            scan_size: SCAN_SIZE,
            debris_speed: DEBRIS_SPEED,
            debris_duration: DEBRIS_DURATION,
            debris_size_scale: DEBRIS_SIZE_SCALE,
            missile_radius: MISSILE_RADIUS,
            bogey_radius: BOGEY_RADIUS,
        }
    }
}

impl FieldConfig {
    /// Default configuration with a different seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain number, so serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every tunable is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("size_factor", self.size_factor),
            ("turn_rate", self.turn_rate),
            ("missile_speed", self.missile_speed),
            ("missile_lifetime", self.missile_lifetime),
            ("speed_factor", self.speed_factor),
            ("observer_distance", self.observer_distance),
            ("max_view_depth", self.max_view_depth),
            ("field_half_width", self.field_half_width),
            ("field_depth", self.field_depth),
            ("scan_distance", self.scan_distance),
            ("scan_size", self.scan_size),
            ("debris_speed", self.debris_speed),
            ("debris_duration", self.debris_duration),
            ("debris_size_scale", self.debris_size_scale),
            ("missile_radius", self.missile_radius),
            ("bogey_radius", self.bogey_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive finite number, got {value}"),
                });
            }
        }

        if self.field_depth <= FIELD_NEAR {
            return Err(ConfigError::Invalid {
                field: "field_depth",
                reason: format!("must exceed the near gap {FIELD_NEAR}"),
            });
        }
        if self.max_view_depth > self.field_depth {
            return Err(ConfigError::Invalid {
                field: "max_view_depth",
                reason: format!(
                    "{} is deeper than the star volume ({})",
                    self.max_view_depth, self.field_depth
                ),
            });
        }
        Ok(())
    }
}
