//! Built-in seed presets.

use std::fmt::{Display, Formatter};

use tinta_core::Color;

use crate::model::ThemeModel;
use crate::tokens::{AttributeKey, AttributeValue, Slot, ThemeKind};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Contract defaults: indigo and pink on a light grey background.
    Dynamic,
    /// Violet and teal on a near-black background.
    Night,
    /// Teal and orange on a pale cyan background.
    Ocean,
    /// Deep orange and amber on blue grey.
    Ember,
}

#[derive(Clone, Copy)]
struct Seeds {
    background: Color,
    primary: Color,
    accent: Color,
    corner_radius: i32,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Night => "night",
            Self::Ocean => "ocean",
            Self::Ember => "ember",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Night => "Night",
            Self::Ocean => "Ocean",
            Self::Ember => "Ember",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Dynamic,
            ThemePreset::Night,
            ThemePreset::Ocean,
            ThemePreset::Ember,
        ];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    fn seeds(self) -> Seeds {
        match self {
            Self::Dynamic => Seeds {
                background: Color::from_argb(0xFFF5_F5F5),
                primary: Color::from_argb(0xFF3F_51B5),
                accent: Color::from_argb(0xFFE9_1E63),
                corner_radius: 2,
            },
            Self::Night => Seeds {
                background: Color::from_argb(0xFF12_1212),
                primary: Color::from_argb(0xFFBB_86FC),
                accent: Color::from_argb(0xFF03_DAC6),
                corner_radius: 8,
            },
            Self::Ocean => Seeds {
                background: Color::from_argb(0xFFE0_F7FA),
                primary: Color::from_argb(0xFF00_838F),
                accent: Color::from_argb(0xFFFF_6F00),
                corner_radius: 16,
            },
            Self::Ember => Seeds {
                background: Color::from_argb(0xFF26_3238),
                primary: Color::from_argb(0xFFFF_5722),
                accent: Color::from_argb(0xFFFF_C107),
                corner_radius: 12,
            },
        }
    }

    /// Build a theme of `kind` from this preset.
    ///
    /// Only the seeds and the corner radius are explicit; everything else
    /// is derived.
    pub fn model(self, kind: ThemeKind) -> ThemeModel {
        let seeds = self.seeds();
        let mut model = ThemeModel::new(kind);
        model.put(AttributeKey::Background, Slot::Value(seeds.background.into()));
        model.put(AttributeKey::Primary, Slot::Value(seeds.primary.into()));
        model.put(AttributeKey::Accent, Slot::Value(seeds.accent.into()));
        let radius = AttributeValue::Int(seeds.corner_radius);
        model.put(AttributeKey::CornerRadius, Slot::Value(radius));
        model.put(AttributeKey::Surface, Slot::Auto);
        model.auto_generate(true, true);
        model
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_model(preset: ThemePreset, kind: ThemeKind) -> ThemeModel {
    preset.model(kind)
}
