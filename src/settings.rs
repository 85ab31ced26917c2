//! Visual settings
//!
//! Fixed at startup; the toy has no persistence layer, so nothing is saved.

use serde::{Deserialize, Serialize};

use crate::consts::TRAIL_FADE_ALPHA;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Triangle-fan tessellation used for each circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Rendering preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub quality: QualityPreset,
    /// Motion trails: fade the previous frame instead of erasing it
    pub trails: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            trails: true,
        }
    }
}

impl Settings {
    /// Alpha of the per-frame overlay; opaque when trails are disabled
    pub fn fade_alpha(&self) -> f32 {
        if self.trails { TRAIL_FADE_ALPHA } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_match_variants() {
        assert_eq!(QualityPreset::Low.as_str(), "Low");
        assert_eq!(QualityPreset::Medium.as_str(), "Medium");
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn disabling_trails_makes_the_overlay_opaque() {
        let mut settings = Settings::default();
        assert!(settings.fade_alpha() < 1.0);
        settings.trails = false;
        assert_eq!(settings.fade_alpha(), 1.0);
    }
}
