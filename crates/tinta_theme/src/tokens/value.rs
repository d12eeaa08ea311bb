//! Attribute values and the small policy enums they carry

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tinta_core::Color;

use crate::contract::{CORNER_MIN_OVAL, CORNER_MIN_ROUND, FLOAT_SCALE};

/// Declares a closed policy enum with a stable wire token and a label.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($token:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase token used by the encoded form
            pub fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Human-readable name
            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

token_enum! {
    /// How role colors react to the current background
    pub enum BackgroundAware {
        /// Seeds are used verbatim
        Disable => ("disable", "Disabled"),
        /// Seeds are nudged until they reach the contrast target
        Auto => ("auto", "Auto"),
        /// Seeds pass unless they nearly vanish into the background
        AnyContrast => ("any", "Any contrast"),
    }
}

token_enum! {
    /// Contrast policy selecting the minimum ratio
    pub enum ContrastMode {
        Standard => ("std", "Standard"),
        High => ("high", "High"),
    }
}

token_enum! {
    pub enum CornerStyle {
        Square => ("square", "Square"),
        Round => ("round", "Round"),
        Oval => ("oval", "Oval"),
    }
}

token_enum! {
    /// Visibility of an optional element such as the widget header
    pub enum Visibility {
        Auto => ("auto", "Auto"),
        Hide => ("hide", "Hide"),
        Show => ("show", "Show"),
    }
}

impl Default for BackgroundAware {
    fn default() -> Self {
        Self::Auto
    }
}

impl Default for ContrastMode {
    fn default() -> Self {
        Self::Standard
    }
}

impl CornerStyle {
    /// Style implied by a corner radius in dp
    pub fn from_radius(radius: i32) -> Self {
        if radius < CORNER_MIN_ROUND {
            Self::Square
        } else if radius < CORNER_MIN_OVAL {
            Self::Round
        } else {
            Self::Oval
        }
    }
}

/// Value type and range accepted by an attribute
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueKind {
    Color,
    Int { min: i32, max: i32 },
    Float { min: f32, max: f32 },
    BackgroundAware,
    Contrast,
    CornerStyle,
    Visibility,
}

impl ValueKind {
    /// Parse a wire token into a value of this kind. Range is not checked.
    pub fn parse(self, token: &str) -> Result<AttributeValue, String> {
        let unknown = || format!("unknown token `{token}`");
        match self {
            Self::Color => Color::from_hex(token)
                .map(AttributeValue::Color)
                .map_err(|e| e.to_string()),
            Self::Int { .. } => token
                .parse::<i32>()
                .map(AttributeValue::Int)
                .map_err(|e| format!("`{token}`: {e}")),
            Self::Float { .. } => token
                .parse::<f32>()
                .map(AttributeValue::Float)
                .map_err(|e| format!("`{token}`: {e}")),
            Self::BackgroundAware => BackgroundAware::from_token(token)
                .map(AttributeValue::BackgroundAware)
                .ok_or_else(unknown),
            Self::Contrast => ContrastMode::from_token(token)
                .map(AttributeValue::Contrast)
                .ok_or_else(unknown),
            Self::CornerStyle => CornerStyle::from_token(token)
                .map(AttributeValue::CornerStyle)
                .ok_or_else(unknown),
            Self::Visibility => Visibility::from_token(token)
                .map(AttributeValue::Visibility)
                .ok_or_else(unknown),
        }
    }

    /// Check that `value` has this kind and lies in range
    pub fn check(self, value: &AttributeValue) -> Result<(), String> {
        match (self, value) {
            (Self::Color, AttributeValue::Color(_))
            | (Self::BackgroundAware, AttributeValue::BackgroundAware(_))
            | (Self::Contrast, AttributeValue::Contrast(_))
            | (Self::CornerStyle, AttributeValue::CornerStyle(_))
            | (Self::Visibility, AttributeValue::Visibility(_)) => Ok(()),
            (Self::Int { min, max }, AttributeValue::Int(v)) => {
                if (min..=max).contains(v) {
                    Ok(())
                } else {
                    Err(format!("{v} is outside {min}..={max}"))
                }
            }
            (Self::Float { min, max }, AttributeValue::Float(v)) => {
                if v.is_finite() && (min..=max).contains(v) {
                    Ok(())
                } else {
                    Err(format!("{v} is outside {min}..={max}"))
                }
            }
            (expected, found) => Err(format!(
                "expected {}, found {}",
                expected.label(),
                found.kind_label()
            )),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Int { .. } => "integer",
            Self::Float { .. } => "float",
            Self::BackgroundAware => "background-aware mode",
            Self::Contrast => "contrast mode",
            Self::CornerStyle => "corner style",
            Self::Visibility => "visibility",
        }
    }
}

/// A concrete attribute value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeValue {
    Color(Color),
    Int(i32),
    Float(f32),
    BackgroundAware(BackgroundAware),
    Contrast(ContrastMode),
    CornerStyle(CornerStyle),
    Visibility(Visibility),
}

impl AttributeValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_background_aware(&self) -> Option<BackgroundAware> {
        match self {
            Self::BackgroundAware(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_contrast(&self) -> Option<ContrastMode> {
        match self {
            Self::Contrast(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_corner_style(&self) -> Option<CornerStyle> {
        match self {
            Self::CornerStyle(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_visibility(&self) -> Option<Visibility> {
        match self {
            Self::Visibility(v) => Some(*v),
            _ => None,
        }
    }

    /// Snap floats to the four decimals the encoded form carries.
    ///
    /// Stored floats are always quantized so that encoding and decoding
    /// reproduce them exactly.
    pub fn quantized(self) -> Self {
        match self {
            Self::Float(v) => Self::Float((v * FLOAT_SCALE).round() / FLOAT_SCALE),
            other => other,
        }
    }

    /// Wire token for this value
    pub fn to_token(&self) -> String {
        match self {
            Self::Color(c) => c.to_hex(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{v:.4}"),
            Self::BackgroundAware(v) => v.token().to_string(),
            Self::Contrast(v) => v.token().to_string(),
            Self::CornerStyle(v) => v.token().to_string(),
            Self::Visibility(v) => v.token().to_string(),
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::BackgroundAware(_) => "background-aware mode",
            Self::Contrast(_) => "contrast mode",
            Self::CornerStyle(_) => "corner style",
            Self::Visibility(_) => "visibility",
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.4}"),
            Self::BackgroundAware(v) => write!(f, "{v}"),
            Self::Contrast(v) => write!(f, "{v}"),
            Self::CornerStyle(v) => write!(f, "{v}"),
            Self::Visibility(v) => write!(f, "{v}"),
        }
    }
}

impl From<Color> for AttributeValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<BackgroundAware> for AttributeValue {
    fn from(v: BackgroundAware) -> Self {
        Self::BackgroundAware(v)
    }
}

impl From<ContrastMode> for AttributeValue {
    fn from(v: ContrastMode) -> Self {
        Self::Contrast(v)
    }
}

impl From<CornerStyle> for AttributeValue {
    fn from(v: CornerStyle) -> Self {
        Self::CornerStyle(v)
    }
}

impl From<Visibility> for AttributeValue {
    fn from(v: Visibility) -> Self {
        Self::Visibility(v)
    }
}

/// An explicitly set attribute slot.
///
/// An attribute with no slot is unset and resolves through the fallback
/// chain; `Auto` pins it to derivation in the owning theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot {
    Auto,
    Value(AttributeValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_round_trip() {
        for mode in BackgroundAware::ALL {
            assert_eq!(BackgroundAware::from_token(mode.token()), Some(*mode));
        }
        for vis in Visibility::ALL {
            assert_eq!(Visibility::from_token(vis.token()), Some(*vis));
        }
        assert_eq!(ContrastMode::from_token("high"), Some(ContrastMode::High));
        assert_eq!(CornerStyle::from_token("circle"), None);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(BackgroundAware::AnyContrast.to_string(), "Any contrast");
        assert_eq!(ContrastMode::Standard.label(), "Standard");
    }

    #[test]
    fn corner_style_thresholds() {
        assert_eq!(CornerStyle::from_radius(0), CornerStyle::Square);
        assert_eq!(CornerStyle::from_radius(7), CornerStyle::Square);
        assert_eq!(CornerStyle::from_radius(8), CornerStyle::Round);
        assert_eq!(CornerStyle::from_radius(15), CornerStyle::Round);
        assert_eq!(CornerStyle::from_radius(16), CornerStyle::Oval);
        assert_eq!(CornerStyle::from_radius(28), CornerStyle::Oval);
    }

    #[test]
    fn check_enforces_range_and_type() {
        let radius = ValueKind::Int { min: 0, max: 28 };
        assert_eq!(radius.check(&AttributeValue::Int(28)), Ok(()));
        assert!(radius.check(&AttributeValue::Int(29)).is_err());
        assert!(radius.check(&AttributeValue::Float(2.0)).is_err());

        let opacity = ValueKind::Float { min: 0.0, max: 1.0 };
        assert!(opacity.check(&AttributeValue::Float(f32::NAN)).is_err());
        assert!(opacity.check(&AttributeValue::Float(1.5)).is_err());
    }

    #[test]
    fn parse_reports_bad_tokens() {
        assert_eq!(
            ValueKind::Color.parse("#FF3F51B5"),
            Ok(AttributeValue::Color(Color::from_argb(0xFF3F_51B5)))
        );
        assert!(ValueKind::Int { min: 0, max: 28 }.parse("8.5").is_err());
        assert!(ValueKind::Contrast.parse("medium").is_err());
    }

    #[test]
    fn floats_quantize_to_four_decimals() {
        let v = AttributeValue::Float(0.123_456).quantized();
        assert_eq!(v.to_token(), "0.1235");
        assert_eq!(ValueKind::Float { min: 0.0, max: 1.0 }.parse("0.1235"), Ok(v));
    }
}
