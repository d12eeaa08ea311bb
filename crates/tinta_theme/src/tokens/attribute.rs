//! Attribute keys, capability groups and theme kinds

use std::fmt::{self, Display, Formatter};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::contract::{self, AttributeSpec};

bitflags! {
    /// Attribute groups a theme participates in.
    ///
    /// Every [`AttributeKey`] belongs to exactly one group; a theme's
    /// [`ThemeKind`] fixes which groups it may read or write.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeGroup: u16 {
        const BACKGROUND       = 1 << 0;
        const SURFACE          = 1 << 1;
        const PRIMARY          = 1 << 2;
        const ACCENT           = 1 << 3;
        const ERROR            = 1 << 4;
        const TEXT             = 1 << 5;
        const FONT             = 1 << 6;
        const CORNER           = 1 << 7;
        const BACKGROUND_AWARE = 1 << 8;
        const ELEVATION        = 1 << 9;
        const OPACITY          = 1 << 10;
        const STROKE           = 1 << 11;
        const WIDGET           = 1 << 12;

        /// Everything an application theme carries.
        const APP = Self::BACKGROUND.bits()
            | Self::SURFACE.bits()
            | Self::PRIMARY.bits()
            | Self::ACCENT.bits()
            | Self::ERROR.bits()
            | Self::TEXT.bits()
            | Self::FONT.bits()
            | Self::CORNER.bits()
            | Self::BACKGROUND_AWARE.bits()
            | Self::ELEVATION.bits()
            | Self::OPACITY.bits()
            | Self::STROKE.bits();
    }
}

/// Theme kind, fixing the capability set at construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// An application theme
    #[default]
    App,
    /// An application theme plus home-screen widget attributes
    Widget,
    /// Supplies values for attributes left unset elsewhere
    Fallback,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::App, ThemeKind::Widget, ThemeKind::Fallback];

    pub fn capabilities(self) -> AttributeGroup {
        match self {
            Self::App => AttributeGroup::APP,
            Self::Widget | Self::Fallback => AttributeGroup::all(),
        }
    }

    /// Stable token used by the encoded form
    pub fn token(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Widget => "widget",
            Self::Fallback => "fallback",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Widget => "Widget",
            Self::Fallback => "Fallback",
        }
    }
}

impl Display for ThemeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of theme attributes.
///
/// Variant order is the order of the contract table and the order in which
/// attributes are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    Background,
    TintBackground,
    Surface,
    TintSurface,
    Primary,
    TintPrimary,
    PrimaryDark,
    TintPrimaryDark,
    Accent,
    TintAccent,
    AccentDark,
    TintAccentDark,
    TextPrimary,
    TextPrimaryInverse,
    TextSecondary,
    TextSecondaryInverse,
    FontScale,
    CornerRadius,
    BackgroundAware,
    Header,
    Opacity,
    Error,
    TintError,
    CornerStyle,
    Contrast,
    Elevation,
    StrokeWidth,
    WidgetId,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 28] = [
        AttributeKey::Background,
        AttributeKey::TintBackground,
        AttributeKey::Surface,
        AttributeKey::TintSurface,
        AttributeKey::Primary,
        AttributeKey::TintPrimary,
        AttributeKey::PrimaryDark,
        AttributeKey::TintPrimaryDark,
        AttributeKey::Accent,
        AttributeKey::TintAccent,
        AttributeKey::AccentDark,
        AttributeKey::TintAccentDark,
        AttributeKey::TextPrimary,
        AttributeKey::TextPrimaryInverse,
        AttributeKey::TextSecondary,
        AttributeKey::TextSecondaryInverse,
        AttributeKey::FontScale,
        AttributeKey::CornerRadius,
        AttributeKey::BackgroundAware,
        AttributeKey::Header,
        AttributeKey::Opacity,
        AttributeKey::Error,
        AttributeKey::TintError,
        AttributeKey::CornerStyle,
        AttributeKey::Contrast,
        AttributeKey::Elevation,
        AttributeKey::StrokeWidth,
        AttributeKey::WidgetId,
    ];

    /// Contract row for this key
    pub fn spec(self) -> &'static AttributeSpec {
        &contract::ATTRIBUTES[self as usize]
    }

    /// Stable short code used on the wire
    pub fn code(self) -> &'static str {
        self.spec().code
    }

    /// Long attribute name, also accepted on decode
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn group(self) -> AttributeGroup {
        self.spec().group
    }

    pub fn is_derivable(self) -> bool {
        self.spec().derivable
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Look up by an alternative dark/inverse short code such as `4Z`
    pub fn from_alias(alias: &str) -> Option<Self> {
        contract::LEGACY_RENAMES
            .iter()
            .find(|(legacy, _)| *legacy == alias)
            .and_then(|(_, code)| Self::from_code(code))
    }

    /// Look up by short code, then long name, then short-code alias
    pub fn lookup(code_or_name: &str) -> Option<Self> {
        Self::from_code(code_or_name)
            .or_else(|| Self::from_name(code_or_name))
            .or_else(|| Self::from_alias(code_or_name))
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
