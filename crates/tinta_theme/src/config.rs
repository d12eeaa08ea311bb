//! Palette configuration (`[palette]` tables in TOML)

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Contrast thresholds and interpolation factors used by the palette.
///
/// Every field has a default, so a TOML document only needs to name the
/// values it changes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PaletteConfig {
    /// Minimum contrast ratio in standard contrast mode
    #[serde(default = "default_standard_ratio")]
    pub standard_ratio: f64,
    /// Minimum contrast ratio in high contrast mode
    #[serde(default = "default_high_ratio")]
    pub high_ratio: f64,
    /// Below this ratio an any-contrast role falls back to auto
    #[serde(default = "default_any_contrast_ratio")]
    pub any_contrast_ratio: f64,
    /// Elevation level at which the overlay stops growing
    #[serde(default = "default_elevation_cutoff")]
    pub elevation_cutoff: u32,
    /// Shade applied to derive the dark variant of a seed
    #[serde(default = "default_variant_factor")]
    pub variant_factor: f32,
    /// Largest tint or shade applied while nudging for contrast
    #[serde(default = "default_max_nudge")]
    pub max_nudge: f32,
    /// Alpha of stroke colors relative to their on-surface color
    #[serde(default = "default_stroke_alpha")]
    pub stroke_alpha: f32,
    /// Weight of primary text blended over its background for secondary text
    #[serde(default = "default_secondary_text_alpha")]
    pub secondary_text_alpha: f32,
    /// Factor used to derive darker and lighter seed sets
    #[serde(default = "default_mutate_factor")]
    pub mutate_factor: f32,
}

fn default_standard_ratio() -> f64 {
    3.0
}

fn default_high_ratio() -> f64 {
    4.5
}

fn default_any_contrast_ratio() -> f64 {
    1.5
}

fn default_elevation_cutoff() -> u32 {
    24
}

fn default_variant_factor() -> f32 {
    0.2
}

fn default_max_nudge() -> f32 {
    0.9
}

fn default_stroke_alpha() -> f32 {
    0.12
}

fn default_secondary_text_alpha() -> f32 {
    0.7
}

fn default_mutate_factor() -> f32 {
    0.8
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            standard_ratio: default_standard_ratio(),
            high_ratio: default_high_ratio(),
            any_contrast_ratio: default_any_contrast_ratio(),
            elevation_cutoff: default_elevation_cutoff(),
            variant_factor: default_variant_factor(),
            max_nudge: default_max_nudge(),
            stroke_alpha: default_stroke_alpha(),
            secondary_text_alpha: default_secondary_text_alpha(),
            mutate_factor: default_mutate_factor(),
        }
    }
}

impl PaletteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PaletteConfig =
            toml::from_str(content).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Ratios must be finite and at least 1; factors and alphas must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("standard_ratio", self.standard_ratio),
            ("high_ratio", self.high_ratio),
            ("any_contrast_ratio", self.any_contrast_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value < 1.0 {
                return Err(ThemeError::Config(format!(
                    "{name} must be a finite ratio >= 1, got {value}"
                )));
            }
        }

        let units = [
            ("variant_factor", self.variant_factor),
            ("max_nudge", self.max_nudge),
            ("stroke_alpha", self.stroke_alpha),
            ("secondary_text_alpha", self.secondary_text_alpha),
            ("mutate_factor", self.mutate_factor),
        ];
        for (name, value) in units {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThemeError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
