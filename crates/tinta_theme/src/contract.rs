//! The fixed theme vocabulary.
//!
//! Everything here is data: the attribute table (short code, long name,
//! group, value kind, default, derivable and exclusion flags, version
//! introduced), the current schema version and the ordered migration table.
//! Changes are additive except at a deliberate version bump.

use tinta_core::Color;

use crate::error::Result;
use crate::migrate::{self, RawTheme};
use crate::tokens::{
    AttributeGroup, AttributeKey, AttributeValue, BackgroundAware, ContrastMode, CornerStyle,
    ValueKind, Visibility,
};

/// Schema version written by the encoder
pub const CURRENT_VERSION: u32 = 3;

/// Short code of the theme kind header
pub const KIND_CODE: &str = "24";

/// Long name of the theme kind header
pub const KIND_NAME: &str = "type";

/// Token marking an explicitly auto-derived slot
pub const AUTO_TOKEN: &str = "auto";

/// Floats are encoded with this many steps per unit (four decimals)
pub const FLOAT_SCALE: f32 = 10_000.0;

/// Smallest radius (dp) drawn with round corners
pub const CORNER_MIN_ROUND: i32 = 8;

/// Smallest radius (dp) drawn with oval corners
pub const CORNER_MIN_OVAL: i32 = 16;

pub const CORNER_MAX: i32 = 28;

pub const ELEVATION_MAX: i32 = 24;

pub const STROKE_MAX: i32 = 8;

/// Light candidate for derived text colors
pub const TEXT_LIGHT: Color = Color::WHITE;

/// Dark candidate for derived text colors
pub const TEXT_DARK: Color = Color::from_argb(0xFF21_2121);

/// One row of the attribute table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttributeSpec {
    pub key: AttributeKey,
    pub code: &'static str,
    pub name: &'static str,
    pub group: AttributeGroup,
    pub kind: ValueKind,
    pub default: AttributeValue,
    /// May resolve through derivation when set to auto or left unset
    pub derivable: bool,
    /// Never written by the encoder
    pub excluded: bool,
    /// Schema version that introduced the attribute
    pub since: u32,
}

const fn color(
    key: AttributeKey,
    code: &'static str,
    name: &'static str,
    group: AttributeGroup,
    default: u32,
    derivable: bool,
) -> AttributeSpec {
    AttributeSpec {
        key,
        code,
        name,
        group,
        kind: ValueKind::Color,
        default: AttributeValue::Color(Color::from_argb(default)),
        derivable,
        excluded: false,
        since: 1,
    }
}

/// The attribute table, indexed by `AttributeKey as usize`
#[rustfmt::skip]
pub static ATTRIBUTES: [AttributeSpec; 28] = [
    color(AttributeKey::Background, "0", "backgroundColor", AttributeGroup::BACKGROUND, 0xFFF5_F5F5, false),
    color(AttributeKey::TintBackground, "1", "tintBackgroundColor", AttributeGroup::BACKGROUND, 0xFF00_0000, true),
    color(AttributeKey::Surface, "2", "surfaceColor", AttributeGroup::SURFACE, 0xFFFF_FFFF, true),
    color(AttributeKey::TintSurface, "3", "tintSurfaceColor", AttributeGroup::SURFACE, 0xFF00_0000, true),
    color(AttributeKey::Primary, "4", "primaryColor", AttributeGroup::PRIMARY, 0xFF3F_51B5, false),
    color(AttributeKey::TintPrimary, "5", "tintPrimaryColor", AttributeGroup::PRIMARY, 0xFFFF_FFFF, true),
    color(AttributeKey::PrimaryDark, "6", "primaryColorDark", AttributeGroup::PRIMARY, 0xFF30_3F9F, true),
    color(AttributeKey::TintPrimaryDark, "7", "tintPrimaryColorDark", AttributeGroup::PRIMARY, 0xFFFF_FFFF, true),
    color(AttributeKey::Accent, "8", "accentColor", AttributeGroup::ACCENT, 0xFFE9_1E63, false),
    color(AttributeKey::TintAccent, "9", "tintAccentColor", AttributeGroup::ACCENT, 0xFFFF_FFFF, true),
    color(AttributeKey::AccentDark, "10", "accentColorDark", AttributeGroup::ACCENT, 0xFFC2_185B, true),
    color(AttributeKey::TintAccentDark, "11", "tintAccentColorDark", AttributeGroup::ACCENT, 0xFFFF_FFFF, true),
    color(AttributeKey::TextPrimary, "12", "textPrimaryColor", AttributeGroup::TEXT, 0xFF21_2121, true),
    color(AttributeKey::TextPrimaryInverse, "13", "textPrimaryColorInverse", AttributeGroup::TEXT, 0xFFFF_FFFF, true),
    color(AttributeKey::TextSecondary, "14", "textSecondaryColor", AttributeGroup::TEXT, 0xFF75_7575, true),
    color(AttributeKey::TextSecondaryInverse, "15", "textSecondaryColorInverse", AttributeGroup::TEXT, 0xFFB3_B3B3, true),
    AttributeSpec {
        key: AttributeKey::FontScale,
        code: "16",
        name: "fontScale",
        group: AttributeGroup::FONT,
        kind: ValueKind::Float { min: 0.5, max: 1.5 },
        default: AttributeValue::Float(1.0),
        derivable: false,
        excluded: false,
        since: 1,
    },
    AttributeSpec {
        key: AttributeKey::CornerRadius,
        code: "17",
        name: "cornerRadius",
        group: AttributeGroup::CORNER,
        kind: ValueKind::Int { min: 0, max: CORNER_MAX },
        default: AttributeValue::Int(2),
        derivable: false,
        excluded: false,
        since: 1,
    },
    AttributeSpec {
        key: AttributeKey::BackgroundAware,
        code: "18",
        name: "backgroundAware",
        group: AttributeGroup::BACKGROUND_AWARE,
        kind: ValueKind::BackgroundAware,
        default: AttributeValue::BackgroundAware(BackgroundAware::Auto),
        derivable: false,
        excluded: false,
        since: 1,
    },
    AttributeSpec {
        key: AttributeKey::Header,
        code: "19",
        name: "header",
        group: AttributeGroup::WIDGET,
        kind: ValueKind::Visibility,
        default: AttributeValue::Visibility(Visibility::Auto),
        derivable: false,
        excluded: false,
        since: 1,
    },
    AttributeSpec {
        key: AttributeKey::Opacity,
        code: "20",
        name: "opacity",
        group: AttributeGroup::OPACITY,
        kind: ValueKind::Float { min: 0.0, max: 1.0 },
        default: AttributeValue::Float(1.0),
        derivable: false,
        excluded: false,
        since: 1,
    },
    color(AttributeKey::Error, "21", "errorColor", AttributeGroup::ERROR, 0xFFF4_4336, false),
    color(AttributeKey::TintError, "22", "tintErrorColor", AttributeGroup::ERROR, 0xFFFF_FFFF, true),
    AttributeSpec {
        key: AttributeKey::CornerStyle,
        code: "23",
        name: "style",
        group: AttributeGroup::CORNER,
        kind: ValueKind::CornerStyle,
        default: AttributeValue::CornerStyle(CornerStyle::Round),
        derivable: true,
        excluded: false,
        since: 3,
    },
    AttributeSpec {
        key: AttributeKey::Contrast,
        code: "25",
        name: "contrast",
        group: AttributeGroup::BACKGROUND_AWARE,
        kind: ValueKind::Contrast,
        default: AttributeValue::Contrast(ContrastMode::Standard),
        derivable: false,
        excluded: false,
        since: 2,
    },
    AttributeSpec {
        key: AttributeKey::Elevation,
        code: "26",
        name: "elevation",
        group: AttributeGroup::ELEVATION,
        kind: ValueKind::Int { min: 0, max: ELEVATION_MAX },
        default: AttributeValue::Int(1),
        derivable: false,
        excluded: false,
        since: 2,
    },
    AttributeSpec {
        key: AttributeKey::StrokeWidth,
        code: "27",
        name: "strokeWidth",
        group: AttributeGroup::STROKE,
        kind: ValueKind::Int { min: 0, max: STROKE_MAX },
        default: AttributeValue::Int(1),
        derivable: false,
        excluded: false,
        since: 3,
    },
    AttributeSpec {
        key: AttributeKey::WidgetId,
        code: "28",
        name: "widgetId",
        group: AttributeGroup::WIDGET,
        kind: ValueKind::Int { min: 0, max: i32::MAX },
        default: AttributeValue::Int(0),
        derivable: false,
        excluded: true,
        since: 1,
    },
];

/// Alternative dark/inverse short codes and the codes they stand for.
///
/// The v1 → v2 step renames them; later versions accept them as aliases.
pub const LEGACY_RENAMES: [(&str, &str); 4] =
    [("4Z", "6"), ("8Z", "10"), ("12Z", "13"), ("14Z", "15")];

/// A forward migration over the raw key/value entries of an encoded theme
#[derive(Clone, Copy)]
pub struct Migration {
    /// Version this step reads; it produces `from + 1`
    pub from: u32,
    pub summary: &'static str,
    pub apply: fn(&mut RawTheme) -> Result<()>,
}

impl std::fmt::Debug for Migration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migration")
            .field("from", &self.from)
            .field("summary", &self.summary)
            .finish()
    }
}

/// Ordered migration table; step `i` upgrades version `i + 1`
pub static MIGRATIONS: [Migration; 2] = [
    Migration {
        from: 1,
        summary: "rename legacy dark codes, font scale to multiplier, add contrast and elevation",
        apply: migrate::v1_to_v2,
    },
    Migration {
        from: 2,
        summary: "opacity to unit float, add corner style and stroke width",
        apply: migrate::v2_to_v3,
    },
];
