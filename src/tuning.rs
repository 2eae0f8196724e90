//! Device-tier game tuning
//!
//! The responsive build picks its constants from the viewport class once at
//! startup. Classification itself (viewport width -> tier) belongs to the
//! driver; the sim only ever sees a resolved `Tuning`.
//!
//! Overrides persist separately from game state in LocalStorage.

use serde::{Deserialize, Serialize};

/// Viewport class the driver resolved at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceTier {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceTier::Mobile => "mobile",
            DeviceTier::Tablet => "tablet",
            DeviceTier::Desktop => "desktop",
        }
    }
}

/// Resolved gameplay constants for one device tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Player paddle speed (px/s)
    pub player_speed: f32,
    /// Bot paddle tracking speed (px/s)
    pub bot_speed: f32,
    /// Player paddle width (px); the bot centers on this width too
    pub paddle_width: f32,
    /// Bot paddle width as a fraction of `paddle_width`
    pub bot_width_scale: f32,
    /// Speed accumulator value right after a ball reset
    pub base_ball_speed: f32,
    /// Accumulator growth per second of rally
    pub speed_growth_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_tier(DeviceTier::Desktop)
    }
}

impl Tuning {
    /// Constants for a viewport tier
    pub fn for_tier(tier: DeviceTier) -> Self {
        match tier {
            DeviceTier::Mobile => Self {
                player_speed: 400.0,
                bot_speed: 320.0,
                paddle_width: 100.0,
                bot_width_scale: 0.85,
                base_ball_speed: 30.0,
                speed_growth_rate: 35.0,
            },
            DeviceTier::Tablet => Self {
                player_speed: 500.0,
                bot_speed: 480.0,
                paddle_width: 140.0,
                bot_width_scale: 1.0,
                base_ball_speed: 50.0,
                speed_growth_rate: 50.0,
            },
            DeviceTier::Desktop => Self {
                player_speed: 600.0,
                bot_speed: 600.0,
                paddle_width: 140.0,
                bot_width_scale: 1.0,
                base_ball_speed: 50.0,
                speed_growth_rate: 50.0,
            },
        }
    }

    /// Bot paddle width in pixels
    pub fn bot_paddle_width(&self) -> f32 {
        self.paddle_width * self.bot_width_scale
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "canvas_pong_tuning";

    /// Load tier constants, honoring a stored override if one exists (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(tier: DeviceTier) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning override from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using {} tuning", tier.as_str());
        Self::for_tier(tier)
    }

    /// Save a tuning override to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning override saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(tier: DeviceTier) -> Self {
        Self::for_tier(tier)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
