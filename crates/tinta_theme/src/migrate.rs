//! Schema migrations over raw encoded entries
//!
//! Migrations run before any value is typed: each step reads the raw
//! key/value pairs of version N and rewrites them into version N + 1.
//! Steps only move forward and fail only with a decode error.

use indexmap::IndexMap;
use tracing::debug;

use crate::contract::{self, AUTO_TOKEN, CURRENT_VERSION, LEGACY_RENAMES, MIGRATIONS};
use crate::error::{Result, ThemeError};
use crate::tokens::{AttributeKey, BackgroundAware, ContrastMode};

/// Key/value entries of an encoded theme, in input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTheme {
    pub version: u32,
    pub entries: IndexMap<String, String>,
}

impl RawTheme {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            entries: IndexMap::new(),
        }
    }

    /// Entry key under which `key` is stored, by short code or long name
    fn find_key(&self, key: AttributeKey) -> Option<String> {
        [key.code(), key.name()]
            .into_iter()
            .find(|k| self.entries.contains_key(*k))
            .map(str::to_string)
    }

    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.entries
            .get(key.code())
            .or_else(|| self.entries.get(key.name()))
            .map(String::as_str)
    }

    pub fn contains(&self, key: AttributeKey) -> bool {
        self.get(key).is_some()
    }

    /// Replace the value of `key` wherever it is stored
    fn replace(&mut self, key: AttributeKey, value: String) {
        if let Some(k) = self.find_key(key) {
            self.entries.insert(k, value);
        }
    }

    /// Insert `key` with `value` unless present under either spelling
    fn introduce(&mut self, key: AttributeKey, value: &str) {
        if !self.contains(key) {
            self.entries.insert(key.code().to_string(), value.to_string());
        }
    }

    /// Apply every migration from the current version up to [`CURRENT_VERSION`]
    pub fn migrate(&mut self) -> Result<()> {
        let start = self.version;
        for step in MIGRATIONS.iter().filter(|step| step.from >= start) {
            (step.apply)(self)?;
            self.version = step.from + 1;
            debug!(to = self.version, summary = step.summary, "migrated theme");
        }
        debug_assert_eq!(self.version, CURRENT_VERSION);
        Ok(())
    }
}

/// Format a float with the four decimals of the encoded form
fn four_decimals(value: f32) -> String {
    format!("{:.4}", (value * contract::FLOAT_SCALE).round() / contract::FLOAT_SCALE)
}

fn parse_int(raw: &RawTheme, key: AttributeKey) -> Result<Option<i32>> {
    raw.get(key)
        .map(|v| {
            v.trim().parse::<i32>().map_err(|e| {
                ThemeError::decode(key.code(), format!("`{v}` is not an integer: {e}"))
            })
        })
        .transpose()
}

/// v1 → v2.
///
/// Legacy dark/inverse codes are renamed, font scale moves from integer
/// percent to a multiplier, the `enable` background-aware token becomes
/// `auto`, and contrast and elevation are introduced.
pub fn v1_to_v2(raw: &mut RawTheme) -> Result<()> {
    for (legacy, code) in LEGACY_RENAMES {
        if let Some(value) = raw.entries.shift_remove(legacy) {
            if raw.entries.contains_key(code) {
                debug!(legacy, code, "legacy code shadowed by current code");
            } else {
                raw.entries.insert(code.to_string(), value);
            }
        }
    }

    if let Some(percent) = parse_int(raw, AttributeKey::FontScale)? {
        raw.replace(AttributeKey::FontScale, four_decimals(percent as f32 / 100.0));
    }

    if raw.get(AttributeKey::BackgroundAware) == Some("enable") {
        raw.replace(AttributeKey::BackgroundAware, BackgroundAware::Auto.token().to_string());
    }

    raw.introduce(AttributeKey::Contrast, ContrastMode::Standard.token());
    raw.introduce(AttributeKey::Elevation, "1");
    Ok(())
}

/// v2 → v3.
///
/// Opacity moves from an integer alpha to a unit float; corner style
/// (derived from the radius) and stroke width are introduced.
pub fn v2_to_v3(raw: &mut RawTheme) -> Result<()> {
    if let Some(alpha) = parse_int(raw, AttributeKey::Opacity)? {
        if !(0..=255).contains(&alpha) {
            return Err(ThemeError::decode(
                AttributeKey::Opacity.code(),
                format!("alpha {alpha} is outside 0..=255"),
            ));
        }
        raw.replace(AttributeKey::Opacity, four_decimals(alpha as f32 / 255.0));
    }

    raw.introduce(AttributeKey::CornerStyle, AUTO_TOKEN);
    raw.introduce(AttributeKey::StrokeWidth, "1");
    Ok(())
}
