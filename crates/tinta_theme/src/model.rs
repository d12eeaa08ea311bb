//! Theme attribute model and resolution
//!
//! A [`ThemeModel`] is an ordered map from [`AttributeKey`] to [`Slot`].
//! Reading an attribute walks a resolution chain:
//!
//! 1. the first theme in the chain (the model itself, then its fallbacks)
//!    whose kind supports the key and holds a slot decides: a value is
//!    returned as is, an auto slot is derived
//! 2. with no slot anywhere, derivable keys are derived
//! 3. everything else resolves to the contract default
//!
//! Derivation always happens in the context of the first theme, with its
//! palette, so a fallback's auto slot follows the child's seeds.

use std::collections::BTreeMap;

use tinta_core::{math, Color};

use crate::config::PaletteConfig;
use crate::contract::CURRENT_VERSION;
use crate::error::{Result, ThemeError};
use crate::palette::{
    ColorRole, DerivedColors, DynamicSeeds, MutatedSeeds, Palette, RoleColors, SeedColors,
};
use crate::tokens::{
    AttributeGroup, AttributeKey, AttributeValue, BackgroundAware, ContrastMode, CornerStyle, Slot,
    ThemeKind,
};

/// A theme: typed attribute slots, a kind and a schema version
#[derive(Clone, Debug)]
pub struct ThemeModel {
    kind: ThemeKind,
    slots: BTreeMap<AttributeKey, Slot>,
    version: u32,
    palette: Palette,
}

impl ThemeModel {
    /// Empty theme of `kind`: every attribute resolves by derivation or default
    pub fn new(kind: ThemeKind) -> Self {
        Self::with_palette(kind, Palette::default())
    }

    pub fn with_config(kind: ThemeKind, config: PaletteConfig) -> Result<Self> {
        Ok(Self::with_palette(kind, Palette::new(config)?))
    }

    fn with_palette(kind: ThemeKind, palette: Palette) -> Self {
        Self {
            kind,
            slots: BTreeMap::new(),
            version: CURRENT_VERSION,
            palette,
        }
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn capabilities(&self) -> AttributeGroup {
        self.kind.capabilities()
    }

    pub fn supports(&self, key: AttributeKey) -> bool {
        self.capabilities().contains(key.group())
    }

    /// Schema version; always the current one for live models
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn check(&self, key: AttributeKey) -> Result<()> {
        if self.supports(key) {
            Ok(())
        } else {
            Err(ThemeError::UnsupportedAttribute { key, kind: self.kind })
        }
    }

    /// Resolved value of `key`
    pub fn get(&self, key: AttributeKey) -> Result<AttributeValue> {
        self.check(key)?;
        Ok(resolve(&[self], key))
    }

    /// Resolved value of a color attribute
    pub fn color(&self, key: AttributeKey) -> Result<Color> {
        self.get(key)?.as_color().ok_or_else(|| ThemeError::Validation {
            key,
            reason: "not a color attribute".to_string(),
        })
    }

    /// Explicit slot, without resolution
    pub fn slot(&self, key: AttributeKey) -> Option<&Slot> {
        self.slots.get(&key)
    }

    /// Explicit slots in contract order
    pub fn slots(&self) -> impl Iterator<Item = (AttributeKey, &Slot)> + '_ {
        self.slots.iter().map(|(key, slot)| (*key, slot))
    }

    /// Set an explicit value after validating its type and range
    pub fn set(&mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Result<()> {
        self.check(key)?;
        let value = value.into();
        key.spec()
            .kind
            .check(&value)
            .map_err(|reason| ThemeError::Validation { key, reason })?;
        self.slots.insert(key, Slot::Value(value.quantized()));
        Ok(())
    }

    /// Pin `key` to derivation in this theme
    pub fn set_auto(&mut self, key: AttributeKey) -> Result<()> {
        self.check(key)?;
        if !key.is_derivable() {
            return Err(ThemeError::Validation {
                key,
                reason: "attribute cannot be derived".to_string(),
            });
        }
        self.slots.insert(key, Slot::Auto);
        Ok(())
    }

    /// Revert `key` to unset
    pub fn clear(&mut self, key: AttributeKey) -> Result<()> {
        self.check(key)?;
        self.slots.remove(&key);
        Ok(())
    }

    /// Store a slot that is already known to be valid
    pub(crate) fn put(&mut self, key: AttributeKey, slot: Slot) {
        self.slots.insert(key, slot);
    }

    /// Mark on-colors (`tint`) and inverse text colors (`inverse`) as auto.
    pub fn auto_generate(&mut self, tint: bool, inverse: bool) {
        if tint {
            for role in ColorRole::ALL {
                self.put(role.tint_key(), Slot::Auto);
            }
        }
        if inverse {
            self.put(AttributeKey::TextPrimaryInverse, Slot::Auto);
            self.put(AttributeKey::TextSecondaryInverse, Slot::Auto);
        }
    }

    /// Take background, primary and accent from a mutated seed set and
    /// derive the surface and dark variants from them.
    pub fn apply_seeds(&mut self, seeds: &MutatedSeeds) {
        self.put(AttributeKey::Background, Slot::Value(seeds.background.into()));
        self.put(AttributeKey::Primary, Slot::Value(seeds.primary.into()));
        self.put(AttributeKey::Accent, Slot::Value(seeds.accent.into()));
        for key in [AttributeKey::Surface, AttributeKey::PrimaryDark, AttributeKey::AccentDark] {
            self.put(key, Slot::Auto);
        }
    }

    /// Darker and lighter sets mutated from the resolved background,
    /// primary and accent
    pub fn dynamic_seeds(&self) -> DynamicSeeds {
        let chain = [self];
        self.palette.mutate(
            color(&chain, AttributeKey::Background),
            Some(color(&chain, AttributeKey::Primary)),
            Some(color(&chain, AttributeKey::Accent)),
        )
    }

    /// Resolved seed color of every role
    pub fn seed_colors(&self) -> SeedColors {
        seed_colors(&[self])
    }

    /// Working color set derived from the resolved seeds and policies
    pub fn derived_colors(&self) -> DerivedColors {
        let chain = [self];
        self.palette.derive(
            &seed_colors(&chain),
            background_aware(&chain),
            contrast(&chain),
            elevation(&chain),
        )
    }

    pub fn role_colors(&self, role: ColorRole) -> RoleColors {
        role_colors(&[self], role)
    }

    /// True when the resolved background is dark
    pub fn is_dark(&self) -> bool {
        math::is_dark(color(&[self], AttributeKey::Background))
    }
}

impl Default for ThemeModel {
    fn default() -> Self {
        Self::new(ThemeKind::App)
    }
}

/// Models compare by kind, version and explicit slots; palette caches are ignored.
impl PartialEq for ThemeModel {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.version == other.version && self.slots == other.slots
    }
}

/// Resolve `key` through `chain`, head first.
pub(crate) fn resolve(chain: &[&ThemeModel], key: AttributeKey) -> AttributeValue {
    for model in chain {
        if !model.supports(key) {
            continue;
        }
        match model.slots.get(&key) {
            Some(Slot::Value(value)) => return *value,
            Some(Slot::Auto) => return derive(chain, key),
            None => {}
        }
    }

    if key.is_derivable() {
        derive(chain, key)
    } else {
        key.spec().default
    }
}

fn color(chain: &[&ThemeModel], key: AttributeKey) -> Color {
    resolve(chain, key).as_color().unwrap_or_default()
}

fn background_aware(chain: &[&ThemeModel]) -> BackgroundAware {
    resolve(chain, AttributeKey::BackgroundAware)
        .as_background_aware()
        .unwrap_or_default()
}

fn contrast(chain: &[&ThemeModel]) -> ContrastMode {
    resolve(chain, AttributeKey::Contrast).as_contrast().unwrap_or_default()
}

fn elevation(chain: &[&ThemeModel]) -> u32 {
    let level = resolve(chain, AttributeKey::Elevation).as_int().unwrap_or_default();
    u32::try_from(level).unwrap_or(0)
}

fn seed_colors(chain: &[&ThemeModel]) -> SeedColors {
    SeedColors {
        background: color(chain, AttributeKey::Background),
        surface: color(chain, AttributeKey::Surface),
        primary: color(chain, AttributeKey::Primary),
        primary_dark: color(chain, AttributeKey::PrimaryDark),
        accent: color(chain, AttributeKey::Accent),
        accent_dark: color(chain, AttributeKey::AccentDark),
        error: color(chain, AttributeKey::Error),
    }
}

fn role_colors(chain: &[&ThemeModel], role: ColorRole) -> RoleColors {
    let palette = match chain.first() {
        Some(head) => &head.palette,
        None => return RoleColors::default(),
    };
    let background = color(chain, AttributeKey::Background);
    let mut seed = color(chain, role.seed_key());
    if role == ColorRole::Surface {
        seed = palette.elevated(seed, elevation(chain));
    }
    let aware = if role.is_background_aware() {
        background_aware(chain)
    } else {
        BackgroundAware::Disable
    };
    palette.role(seed, background, aware, contrast(chain))
}

fn derive(chain: &[&ThemeModel], key: AttributeKey) -> AttributeValue {
    let Some(head) = chain.first() else {
        return key.spec().default;
    };
    let palette = &head.palette;

    let derived = match key {
        AttributeKey::Surface => color(chain, AttributeKey::Background),
        AttributeKey::PrimaryDark => palette.variant(color(chain, AttributeKey::Primary)),
        AttributeKey::AccentDark => palette.variant(color(chain, AttributeKey::Accent)),
        AttributeKey::TextPrimary => {
            palette.text_on(color(chain, AttributeKey::Background), contrast(chain))
        }
        AttributeKey::TextPrimaryInverse => {
            palette.text_on(color(chain, AttributeKey::TextPrimary), contrast(chain))
        }
        AttributeKey::TextSecondary => palette.secondary_text(
            color(chain, AttributeKey::Background),
            color(chain, AttributeKey::TextPrimary),
        ),
        AttributeKey::TextSecondaryInverse => palette.secondary_text(
            color(chain, AttributeKey::TextPrimary),
            color(chain, AttributeKey::TextPrimaryInverse),
        ),
        AttributeKey::CornerStyle => {
            let radius = resolve(chain, AttributeKey::CornerRadius).as_int().unwrap_or_default();
            return AttributeValue::CornerStyle(CornerStyle::from_radius(radius));
        }
        other => match ColorRole::for_tint_key(other) {
            Some(role) => role_colors(chain, role).on_surface,
            None => return other.spec().default,
        },
    };
    AttributeValue::Color(derived)
}
