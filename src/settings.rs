//! Demo scan settings
//!
//! Persisted as JSON next to the binary. Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Bullet density preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DensityPreset {
    Light,
    #[default]
    Normal,
    Hell,
}

impl DensityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityPreset::Light => "Light",
            DensityPreset::Normal => "Normal",
            DensityPreset::Hell => "Hell",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(DensityPreset::Light),
            "normal" | "norm" => Some(DensityPreset::Normal),
            "hell" => Some(DensityPreset::Hell),
            _ => None,
        }
    }

    /// Bullets fired per ring by each emitter
    pub fn bullets_per_ring(&self) -> u32 {
        match self {
            DensityPreset::Light => 12,
            DensityPreset::Normal => 36,
            DensityPreset::Hell => 120,
        }
    }

    /// Frames between rings
    pub fn ring_interval(&self) -> u32 {
        match self {
            DensityPreset::Light => 30,
            DensityPreset::Normal => 12,
            DensityPreset::Hell => 4,
        }
    }
}

/// Settings for a simulated barrage scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// RNG seed for emitter placement and ring phase
    pub seed: u64,
    /// Density preset the counts below were derived from
    pub preset: DensityPreset,
    /// Frames to simulate
    pub frames: u32,

    // === Emitters ===
    /// Number of emitters placed around the arena rim
    pub emitters: u32,
    pub bullets_per_ring: u32,
    /// Frames between rings
    pub ring_interval: u32,

    // === Bodies ===
    /// Bullet speed (units per frame)
    pub bullet_speed: f64,
    pub bullet_radius: f64,
    pub target_radius: f64,
    /// Target orbit speed (units per frame)
    pub target_speed: f64,

    /// Bullets leaving this radius are culled
    pub arena_radius: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        let preset = DensityPreset::default();
        Self {
            seed: 12345,
            preset,
            frames: 600,

            emitters: 3,
            bullets_per_ring: preset.bullets_per_ring(),
            ring_interval: preset.ring_interval(),

            bullet_speed: 4.0,
            bullet_radius: 3.0,
            target_radius: crate::consts::DEFAULT_RADIUS,
            target_speed: 2.5,

            arena_radius: 400.0,
        }
    }
}

impl ScanSettings {
    /// Create settings from a density preset (applies preset defaults)
    pub fn from_preset(preset: DensityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a density preset (updates density-dependent settings)
    pub fn apply_preset(&mut self, preset: DensityPreset) {
        self.preset = preset;
        self.bullets_per_ring = preset.bullets_per_ring();
        self.ring_interval = preset.ring_interval();

        // Hell preset also speeds bullets up
        if preset == DensityPreset::Hell {
            self.bullet_speed *= 1.5;
        }
    }

    /// Rough upper bound on simultaneously live bullets
    pub fn peak_bullets(&self) -> usize {
        // Stalled or reversed bullets saturate instead of overflowing
        let lifetime =
            (self.arena_radius * 2.0 / self.bullet_speed.max(f64::EPSILON)).ceil() as usize;
        let rings_alive = (lifetime / self.ring_interval.max(1) as usize).saturating_add(1);
        rings_alive
            .saturating_mul(self.emitters as usize)
            .saturating_mul(self.bullets_per_ring as usize)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
