//! 32-bit ARGB color value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseColorError;

/// An immutable color packed as `0xAARRGGBB`.
///
/// Every operation that derives a color returns a new value; channels are
/// always in `0..=255` by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Create from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create an opaque color from a packed `0xRRGGBB` value
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(0xFF, r, g, b)
    }

    /// Create from wide channel values, clamping each into `0..=255`.
    ///
    /// Hosts that compute channels in signed arithmetic can hand the raw
    /// results over without pre-validating them.
    pub fn from_channels_clamped(a: i32, r: i32, g: i32, b: i32) -> Self {
        Self::from_argb8(clamp_channel(a), clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Replace the alpha channel only
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Same color with the alpha channel forced to fully opaque
    pub const fn opaque(self) -> Self {
        self.with_alpha(0xFF)
    }

    /// Channel-wise linear interpolation (alpha included)
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            clamp_unit_channel(v)
        };
        Color::from_argb8(
            mix(self.alpha(), other.alpha()),
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }

    /// Canonical `#AARRGGBB` form (uppercase)
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }

    /// Parse `#AARRGGBB` or `#RRGGBB` (the latter is opaque)
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash(s.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(digits.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(digits.to_string()))?;
        match digits.len() {
            8 => Ok(Self::from_argb(value)),
            6 => Ok(Self::from_rgb_hex(value)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

/// Round and clamp a float channel into `0..=255`; NaN maps to 0.
pub(crate) fn clamp_unit_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.argb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channels_unpack() {
        let c = Color::from_argb(0x803F_51B5);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x3F, 0x51, 0xB5));
    }

    #[test]
    fn hex_is_canonical_uppercase() {
        assert_eq!(Color::from_argb(0xff3f_51b5).to_hex(), "#FF3F51B5");
        assert_eq!(Color::from_rgb8(1, 2, 3).to_string(), "#FF010203");
    }

    #[test]
    fn parse_short_form_is_opaque() {
        assert_eq!(Color::from_hex("#3F51B5"), Ok(Color::from_argb(0xFF3F_51B5)));
        assert_eq!("#00FFFFFF".parse::<Color>(), Ok(Color::from_argb(0x00FF_FFFF)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Color::from_hex(""), Err(ParseColorError::Empty));
        assert!(matches!(Color::from_hex("FF3F51B5"), Err(ParseColorError::MissingHash(_))));
        assert_eq!(Color::from_hex("#FF3F5"), Err(ParseColorError::InvalidLength(5)));
        assert!(matches!(Color::from_hex("#GG3F51B5"), Err(ParseColorError::InvalidDigit(_))));
        assert!(matches!(Color::from_hex("#+F3F51B5"), Err(ParseColorError::InvalidDigit(_))));
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_argb(0xFF12_3456).with_alpha(0x40);
        assert_eq!(c.argb(), 0x4012_3456);
        assert!(!c.is_opaque());
        assert!(c.opaque().is_opaque());
    }

    #[test]
    fn clamped_channels() {
        let c = Color::from_channels_clamped(300, -5, 128, 255);
        assert_eq!(c.argb(), 0xFF00_80FF);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, f32::NAN), a);
    }
}
