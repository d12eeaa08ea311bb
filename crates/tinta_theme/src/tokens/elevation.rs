//! Elevation overlay tokens
//!
//! Raised surfaces are lightened with a white overlay whose alpha grows
//! logarithmically with the elevation level and stops growing at a cutoff.

use tinta_core::{math, Color};

/// Overlay color blended over elevated surfaces
pub const OVERLAY_COLOR: Color = Color::WHITE;

/// Overlay alpha for `level`, saturating at `cutoff`.
///
/// Level 0 (and any level with a zero cutoff) has no overlay.
pub fn overlay_alpha(level: u32, cutoff: u32) -> f32 {
    let level = level.min(cutoff);
    if level == 0 {
        return 0.0;
    }
    let n = level as f32;
    (4.5 * (n + 1.0).ln() + 2.0) / 100.0
}

/// Blend the elevation overlay for `level` over `surface`
pub fn elevate(surface: Color, level: u32, cutoff: u32) -> Color {
    let alpha = overlay_alpha(level, cutoff);
    if alpha == 0.0 {
        return surface;
    }
    math::blend_overlay(surface, OVERLAY_COLOR, alpha)
}
