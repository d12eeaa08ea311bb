//! Theme tokens
//!
//! The vocabulary a theme is built from:
//! - Attribute keys, capability groups and theme kinds
//! - Attribute values and policy enums (background awareness, contrast,
//!   corner style, visibility)
//! - Elevation overlays

mod attribute;
pub mod elevation;
mod value;

pub use attribute::*;
pub use value::*;
