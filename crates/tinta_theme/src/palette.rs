//! Dynamic color derivation
//!
//! A [`Palette`] turns seed colors into the working color set of a theme:
//! for every color role it resolves a background-aware surface color, a
//! readable on-surface color and a stroke color. Results are memoized per
//! `(seed, background, background-aware mode, contrast mode)` in a bounded
//! LRU cache; the cache is owned by a single theme and never serialized.
//!
//! ```rust
//! use tinta_core::{math, Color};
//! use tinta_theme::{BackgroundAware, ContrastMode, Palette, PaletteConfig};
//!
//! let palette = Palette::new(PaletteConfig::default())?;
//! let primary = palette.role(
//!     Color::from_argb(0xFF3F51B5),
//!     Color::WHITE,
//!     BackgroundAware::Auto,
//!     ContrastMode::Standard,
//! );
//! assert!(math::contrast_ratio(primary.on_surface, primary.surface) >= 4.5);
//! # Ok::<(), tinta_theme::ThemeError>(())
//! ```

use std::cell::RefCell;
use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxBuildHasher;
use tinta_core::{math, Color};
use tracing::{trace, warn};

use crate::config::PaletteConfig;
use crate::contract::{TEXT_DARK, TEXT_LIGHT};
use crate::error::Result;
use crate::tokens::{elevation, AttributeKey, BackgroundAware, ContrastMode};

/// A color role with a seed and an on-color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Surface,
    Primary,
    PrimaryDark,
    Accent,
    AccentDark,
    Error,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Primary,
        ColorRole::PrimaryDark,
        ColorRole::Accent,
        ColorRole::AccentDark,
        ColorRole::Error,
    ];

    /// Attribute holding the seed color
    pub fn seed_key(self) -> AttributeKey {
        match self {
            Self::Background => AttributeKey::Background,
            Self::Surface => AttributeKey::Surface,
            Self::Primary => AttributeKey::Primary,
            Self::PrimaryDark => AttributeKey::PrimaryDark,
            Self::Accent => AttributeKey::Accent,
            Self::AccentDark => AttributeKey::AccentDark,
            Self::Error => AttributeKey::Error,
        }
    }

    /// Attribute holding the on-color
    pub fn tint_key(self) -> AttributeKey {
        match self {
            Self::Background => AttributeKey::TintBackground,
            Self::Surface => AttributeKey::TintSurface,
            Self::Primary => AttributeKey::TintPrimary,
            Self::PrimaryDark => AttributeKey::TintPrimaryDark,
            Self::Accent => AttributeKey::TintAccent,
            Self::AccentDark => AttributeKey::TintAccentDark,
            Self::Error => AttributeKey::TintError,
        }
    }

    /// Role whose on-color is stored under `key`
    pub fn for_tint_key(key: AttributeKey) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.tint_key() == key)
    }

    /// Background-like roles are never nudged against the background.
    pub fn is_background_aware(self) -> bool {
        !matches!(self, Self::Background | Self::Surface)
    }
}

/// Resolved colors for one role
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoleColors {
    /// Seed after background-awareness adjustment
    pub surface: Color,
    /// Readable color drawn on `surface`
    pub on_surface: Color,
    /// Translucent on-color for outlines
    pub stroke: Color,
}

/// Seed colors for every role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedColors {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub primary_dark: Color,
    pub accent: Color,
    pub accent_dark: Color,
    pub error: Color,
}

impl SeedColors {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::Accent => self.accent,
            ColorRole::AccentDark => self.accent_dark,
            ColorRole::Error => self.error,
        }
    }
}

/// The full working color set derived from a [`SeedColors`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DerivedColors {
    pub background: RoleColors,
    pub surface: RoleColors,
    pub primary: RoleColors,
    pub primary_dark: RoleColors,
    pub accent: RoleColors,
    pub accent_dark: RoleColors,
    pub error: RoleColors,
    pub text_primary: Color,
    pub text_primary_inverse: Color,
    pub text_secondary: Color,
    pub text_secondary_inverse: Color,
}

impl DerivedColors {
    pub fn role(&self, role: ColorRole) -> RoleColors {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::Accent => self.accent,
            ColorRole::AccentDark => self.accent_dark,
            ColorRole::Error => self.error,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct RoleKey {
    seed: Color,
    background: Color,
    aware: BackgroundAware,
    contrast: ContrastMode,
}

/// Role entries kept per palette; enough for several full derivations.
pub const ROLE_CACHE_CAPACITY: usize = 64;

type RoleCache = LruCache<RoleKey, RoleColors, FxBuildHasher>;

fn role_cache() -> RoleCache {
    const CAPACITY: NonZeroUsize = match NonZeroUsize::new(ROLE_CACHE_CAPACITY) {
        Some(capacity) => capacity,
        None => panic!("role cache capacity must be non-zero"),
    };
    LruCache::with_hasher(CAPACITY, FxBuildHasher)
}

/// Memoizing color deriver owned by one theme.
///
/// Interior mutability makes a palette (and the theme that owns it) `Send`
/// but not `Sync`.
pub struct Palette {
    config: PaletteConfig,
    cache: RefCell<RoleCache>,
}

impl Palette {
    /// Palette over a validated `config`
    pub fn new(config: PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PaletteConfig) -> Self {
        Self {
            config,
            cache: RefCell::new(role_cache()),
        }
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Minimum contrast ratio for a contrast mode
    pub fn min_ratio(&self, contrast: ContrastMode) -> f64 {
        match contrast {
            ContrastMode::Standard => self.config.standard_ratio,
            ContrastMode::High => self.config.high_ratio,
        }
    }

    pub fn overlay_alpha(&self, level: u32) -> f32 {
        elevation::overlay_alpha(level, self.config.elevation_cutoff)
    }

    /// `surface` with the elevation overlay for `level` applied
    pub fn elevated(&self, surface: Color, level: u32) -> Color {
        elevation::elevate(surface, level, self.config.elevation_cutoff)
    }

    /// Dark variant of a seed
    pub fn variant(&self, seed: Color) -> Color {
        math::shade(seed, self.config.variant_factor)
    }

    /// Resolve a role's colors against `background`
    pub fn role(
        &self,
        seed: Color,
        background: Color,
        aware: BackgroundAware,
        contrast: ContrastMode,
    ) -> RoleColors {
        let key = RoleKey {
            seed,
            background,
            aware,
            contrast,
        };
        if let Some(hit) = self.cache.borrow_mut().get(&key).copied() {
            return hit;
        }

        trace!(seed = %seed, background = %background, ?aware, ?contrast, "palette cache miss");
        let colors = self.compute_role(key);
        self.cache.borrow_mut().put(key, colors);
        colors
    }

    fn compute_role(&self, key: RoleKey) -> RoleColors {
        let min_ratio = self.min_ratio(key.contrast);
        let surface = match key.aware {
            BackgroundAware::Disable => key.seed,
            BackgroundAware::Auto => self.nudge(key.seed, key.background, min_ratio),
            BackgroundAware::AnyContrast => {
                let ratio = math::contrast_ratio(key.seed, key.background);
                if ratio >= self.config.any_contrast_ratio {
                    key.seed
                } else {
                    self.nudge(key.seed, key.background, min_ratio)
                }
            }
        };

        let on_surface =
            math::contrast_safe_foreground(surface, Color::WHITE, Color::BLACK, min_ratio);
        RoleColors {
            surface,
            on_surface,
            stroke: math::with_alpha(on_surface, self.config.stroke_alpha),
        }
    }

    fn nudge(&self, seed: Color, background: Color, min_ratio: f64) -> Color {
        let nudged = math::ensure_contrast(seed, background, min_ratio, self.config.max_nudge);
        let reached = math::contrast_ratio(nudged, background);
        if reached < min_ratio {
            warn!(
                seed = %seed,
                background = %background,
                reached,
                min_ratio,
                "contrast target not reachable within nudge cap"
            );
        }
        nudged
    }

    /// Readable primary text color on `background`
    pub fn text_on(&self, background: Color, contrast: ContrastMode) -> Color {
        math::contrast_safe_foreground(background, TEXT_LIGHT, TEXT_DARK, self.min_ratio(contrast))
    }

    /// Secondary text: `text` blended over `background`
    pub fn secondary_text(&self, background: Color, text: Color) -> Color {
        math::blend_overlay(background, text, self.config.secondary_text_alpha)
    }

    /// Derive the full working color set.
    ///
    /// The surface role is elevated before it is resolved. Background and
    /// surface roles ignore `aware`.
    pub fn derive(
        &self,
        seeds: &SeedColors,
        aware: BackgroundAware,
        contrast: ContrastMode,
        elevation: u32,
    ) -> DerivedColors {
        let background = seeds.background;
        let resolve = |role: ColorRole| {
            let mut seed = seeds.get(role);
            if role == ColorRole::Surface {
                seed = self.elevated(seed, elevation);
            }
            let aware = if role.is_background_aware() {
                aware
            } else {
                BackgroundAware::Disable
            };
            self.role(seed, background, aware, contrast)
        };

        let text_primary = self.text_on(background, contrast);
        let text_primary_inverse = self.text_on(text_primary, contrast);
        DerivedColors {
            background: resolve(ColorRole::Background),
            surface: resolve(ColorRole::Surface),
            primary: resolve(ColorRole::Primary),
            primary_dark: resolve(ColorRole::PrimaryDark),
            accent: resolve(ColorRole::Accent),
            accent_dark: resolve(ColorRole::AccentDark),
            error: resolve(ColorRole::Error),
            text_primary,
            text_primary_inverse,
            text_secondary: self.secondary_text(background, text_primary),
            text_secondary_inverse: self.secondary_text(text_primary, text_primary_inverse),
        }
    }

    /// Darker and lighter seed sets, mutated by the configured factor
    pub fn mutate(
        &self,
        background: Color,
        primary: Option<Color>,
        accent: Option<Color>,
    ) -> DynamicSeeds {
        DynamicSeeds::mutate(background, primary, accent, self.config.mutate_factor)
    }

    /// Number of memoized role entries, at most [`ROLE_CACHE_CAPACITY`]
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_valid(PaletteConfig::default())
    }
}

impl Clone for Palette {
    fn clone(&self) -> Self {
        let mut cache = role_cache();
        // Oldest first, so recency carries over.
        for (key, colors) in self.cache.borrow().iter().rev() {
            cache.put(*key, *colors);
        }
        Self {
            config: self.config.clone(),
            cache: RefCell::new(cache),
        }
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("config", &self.config)
            .field("cached", &self.cached())
            .finish()
    }
}

/// Background, primary and accent seeds of a mutated set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MutatedSeeds {
    pub background: Color,
    pub primary: Color,
    pub accent: Color,
}

/// Original seeds plus darker and lighter sets derived from them.
///
/// Used to follow a host's light or dark mode with one set of user colors.
/// Roles not named here (surface, dark variants) are left to derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynamicSeeds {
    pub original: MutatedSeeds,
    pub darker: MutatedSeeds,
    pub lighter: MutatedSeeds,
}

impl DynamicSeeds {
    /// Derive darker and lighter sets from original seeds.
    ///
    /// A missing primary or accent falls back to the background. Background
    /// and primary are shaded or tinted by `factor`; the accent is kept.
    pub fn mutate(
        background: Color,
        primary: Option<Color>,
        accent: Option<Color>,
        factor: f32,
    ) -> Self {
        let primary = primary.unwrap_or(background);
        let accent = accent.unwrap_or(background);
        Self {
            original: MutatedSeeds {
                background,
                primary,
                accent,
            },
            darker: MutatedSeeds {
                background: math::shade(background, factor),
                primary: math::shade(primary, factor),
                accent,
            },
            lighter: MutatedSeeds {
                background: math::tint(background, factor),
                primary: math::tint(primary, factor),
                accent,
            },
        }
    }

    /// Mutated set for a theme: darker for dark themes, lighter otherwise,
    /// swapped when `inverse` is set.
    pub fn for_theme(&self, is_dark: bool, inverse: bool) -> &MutatedSeeds {
        if is_dark != inverse {
            &self.darker
        } else {
            &self.lighter
        }
    }
}
