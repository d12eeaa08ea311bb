//! Tinta Theme Engine
//!
//! Versioned, serializable theme descriptions with dynamic color derivation.
//!
//! # Overview
//!
//! - **Tokens**: attribute keys, capability groups, theme kinds and policy enums
//! - **Model**: typed attribute slots resolved through auto derivation,
//!   fallback themes and contract defaults
//! - **Palette**: background- and elevation-aware colors derived from a few seeds
//! - **Codec**: a compact `v<version>;<code>=<value>;...` text form with
//!   field exclusion and forward schema migration
//! - **Store**: themes linked into acyclic fallback chains
//!
//! # Quick Start
//!
//! ```rust
//! use tinta_core::Color;
//! use tinta_theme::{codec, AttributeKey, AttributeValue, ThemeKind, ThemeModel};
//!
//! let mut theme = ThemeModel::new(ThemeKind::App);
//! theme.set(AttributeKey::Background, Color::WHITE)?;
//! theme.set(AttributeKey::Primary, Color::from_argb(0xFF3F51B5))?;
//!
//! // On-colors are derived unless set explicitly
//! let on_primary = theme.color(AttributeKey::TintPrimary)?;
//! assert_eq!(on_primary, Color::WHITE);
//!
//! // Encode, leaving the corner radius out
//! let text = codec::encode(&theme, &[AttributeKey::CornerRadius]);
//! let restored = codec::decode(&text)?;
//! assert_eq!(restored.get(AttributeKey::CornerRadius)?, AttributeValue::Int(2));
//! # Ok::<(), tinta_theme::ThemeError>(())
//! ```
//!
//! # Configuration
//!
//! Contrast thresholds and interpolation factors live in [`PaletteConfig`],
//! which reads partial TOML documents:
//!
//! ```rust
//! use tinta_theme::PaletteConfig;
//!
//! let config = PaletteConfig::from_toml_str("high_ratio = 7.0")?;
//! assert_eq!(config.standard_ratio, 3.0);
//! # Ok::<(), tinta_theme::ThemeError>(())
//! ```

pub mod codec;
pub mod config;
pub mod contract;
pub mod error;
pub mod migrate;
pub mod model;
pub mod palette;
pub mod presets;
pub mod store;
pub mod tokens;

// Re-export commonly used types
pub use codec::{decode, decode_with_config, encode};
pub use config::PaletteConfig;
pub use contract::{AttributeSpec, CURRENT_VERSION};
pub use error::{Result, ThemeError};
pub use model::ThemeModel;
pub use palette::{
    ColorRole, DerivedColors, DynamicSeeds, MutatedSeeds, Palette, RoleColors, SeedColors,
};
pub use presets::{preset_model, ThemePreset};
pub use store::{ThemeId, ThemeStore};
pub use tokens::{
    AttributeGroup, AttributeKey, AttributeValue, BackgroundAware, ContrastMode, CornerStyle, Slot,
    ThemeKind, ValueKind, Visibility,
};
