//! Tinta Core
//!
//! Color primitives shared by the Tinta theming crates:
//!
//! - **Color**: an immutable 32-bit ARGB value with canonical `#AARRGGBB` text form
//! - **Math**: WCAG luminance and contrast, tints, shades and alpha compositing
//!
//! # Example
//!
//! ```rust
//! use tinta_core::{math, Color};
//!
//! let primary: Color = "#3F51B5".parse().unwrap();
//! assert_eq!(primary.to_hex(), "#FF3F51B5");
//!
//! // White text on indigo clears the WCAG AA threshold
//! assert!(math::contrast_ratio(primary, Color::WHITE) >= 4.5);
//! ```

pub mod color;
pub mod error;
pub mod math;

pub use color::Color;
pub use error::ParseColorError;
pub use math::{
    blend_overlay, contrast_ratio, contrast_safe_foreground, ensure_contrast, is_dark,
    relative_luminance, shade, tint,
};
