//! Game settings and preferences
//!
//! Read once at startup from an inline JSON block on the page. Nothing is
//! written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FIELD_HALF;
use crate::tuning::Tuning;

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
    #[error("{field} must be below {limit}, got {value}")]
    NotBelow {
        field: &'static str,
        limit: f32,
        value: f32,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all tones
    pub muted: bool,

    // === Simulation ===
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Largest frame delta fed to the simulation (seconds)
    pub max_frame_dt: f32,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            seed: None,
            max_frame_dt: 0.1,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Element id of the inline `application/json` settings block
    pub const ELEMENT_ID: &'static str = "game-config";

    /// Parse and validate a settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Effective tone volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        check_range("master_volume", self.master_volume, 0.0, 1.0)?;
        check_range("max_frame_dt", self.max_frame_dt, f32::EPSILON, 1.0)?;
        check_range("tuning.spawn_margin", self.tuning.spawn_margin, 0.0, FIELD_HALF)?;
        // Spawns need a non-empty span to land in
        if self.tuning.spawn_margin >= FIELD_HALF {
            return Err(SettingsError::NotBelow {
                field: "tuning.spawn_margin",
                limit: FIELD_HALF,
                value: self.tuning.spawn_margin,
            });
        }

        let t = &self.tuning;
        for (field, value) in [
            ("tuning.move_speed", t.move_speed),
            ("tuning.acceleration", t.acceleration),
            ("tuning.friction", t.friction),
            ("tuning.turn_rate", t.turn_rate),
            ("tuning.pickup_radius", t.pickup_radius),
            ("tuning.obstacle_hit_factor", t.obstacle_hit_factor),
            ("tuning.knockback", t.knockback),
        ] {
            check_range(field, value, 0.0, f32::MAX)?;
        }
        Ok(())
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }

    /// Native builds have no page to read from
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), SettingsError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}
