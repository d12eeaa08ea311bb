//! Color math: luminance, contrast, tints, shades and compositing.
//!
//! Everything here is a pure function over [`Color`] values. Factors and
//! alphas are sanitized on the way in (NaN becomes 0, values are clamped to
//! `[0, 1]`) and channels are clamped on the way out, so no function in this
//! module can fail, panic or produce an out-of-range channel.
//!
//! Contrast follows the WCAG 2.1 definition: relative luminance from
//! linearized sRGB channels, and `(L_lighter + 0.05) / (L_darker + 0.05)`.

use crate::color::{clamp_unit_channel, Color};

/// Luminance at which white and black text are equally readable.
const EQUAL_CONTRAST_LUMINANCE: f64 = 0.179_129;

/// Binary search iterations for [`ensure_contrast`]; 2^-24 is far below one channel step.
const SEARCH_STEPS: usize = 24;

/// Clamp a factor or alpha into `[0, 1]`, mapping NaN to 0.
pub fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linearize one sRGB channel.
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`. Alpha is ignored.
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(color.red());
    let g = srgb_to_linear(color.green());
    let b = srgb_to_linear(color.blue());
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio in `[1, 21]`, symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True when white text reads better than black text on `color`.
pub fn is_dark(color: Color) -> bool {
    relative_luminance(color) < EQUAL_CONTRAST_LUMINANCE
}

/// Move every color channel toward white by `factor`. Alpha is preserved.
pub fn tint(color: Color, factor: f32) -> Color {
    let f = unit(factor);
    let up = |c: u8| clamp_unit_channel(f32::from(c) + (255.0 - f32::from(c)) * f);
    Color::from_argb8(color.alpha(), up(color.red()), up(color.green()), up(color.blue()))
}

/// Move every color channel toward black by `factor`. Alpha is preserved.
pub fn shade(color: Color, factor: f32) -> Color {
    let f = unit(factor);
    let down = |c: u8| clamp_unit_channel(f32::from(c) * (1.0 - f));
    Color::from_argb8(color.alpha(), down(color.red()), down(color.green()), down(color.blue()))
}

/// Replace the alpha channel with `alpha` in `[0, 1]`.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    color.with_alpha(clamp_unit_channel(unit(alpha) * 255.0))
}

/// Composite `overlay` at `overlay_alpha` over `base` (Porter-Duff source-over).
///
/// The overlay's own alpha channel scales `overlay_alpha`. An opaque base
/// always yields an opaque result.
pub fn blend_overlay(base: Color, overlay: Color, overlay_alpha: f32) -> Color {
    let a_o = unit(overlay_alpha) * f32::from(overlay.alpha()) / 255.0;
    let a_b = f32::from(base.alpha()) / 255.0;
    let out_a = a_o + a_b * (1.0 - a_o);
    if out_a <= f32::EPSILON {
        return Color::TRANSPARENT;
    }

    let mix = |o: u8, b: u8| {
        let v = (f32::from(o) * a_o + f32::from(b) * a_b * (1.0 - a_o)) / out_a;
        clamp_unit_channel(v)
    };
    Color::from_argb8(
        clamp_unit_channel(out_a * 255.0),
        mix(overlay.red(), base.red()),
        mix(overlay.green(), base.green()),
        mix(overlay.blue(), base.blue()),
    )
}

/// Pick a readable foreground for `background`.
///
/// `light` is tried first, then `dark`; the first one reaching `min_ratio`
/// wins. When neither does, the one with the higher ratio is returned.
pub fn contrast_safe_foreground(
    background: Color,
    light: Color,
    dark: Color,
    min_ratio: f64,
) -> Color {
    let light_ratio = contrast_ratio(background, light);
    if light_ratio >= min_ratio {
        return light;
    }
    let dark_ratio = contrast_ratio(background, dark);
    if dark_ratio >= min_ratio {
        return dark;
    }
    if light_ratio >= dark_ratio {
        light
    } else {
        dark
    }
}

/// Nudge `color` along the luminance axis until it reaches `min_ratio`
/// against `background`.
///
/// On light backgrounds the color is shaded, on dark ones tinted, by the
/// smallest factor up to `max_factor` that meets the target. When even
/// `max_factor` falls short the color at `max_factor` is returned.
pub fn ensure_contrast(color: Color, background: Color, min_ratio: f64, max_factor: f32) -> Color {
    if contrast_ratio(color, background) >= min_ratio {
        return color;
    }

    let step = |f: f32| {
        if is_dark(background) {
            tint(color, f)
        } else {
            shade(color, f)
        }
    };

    let max_factor = unit(max_factor);
    let farthest = step(max_factor);
    if contrast_ratio(farthest, background) < min_ratio {
        return farthest;
    }

    let (mut lo, mut hi) = (0.0f32, max_factor);
    let mut best = farthest;
    for _ in 0..SEARCH_STEPS {
        let mid = (lo + hi) * 0.5;
        let candidate = step(mid);
        if contrast_ratio(candidate, background) >= min_ratio {
            best = candidate;
            hi = mid;
        } else {
            lo = mid;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Luminance & contrast ───────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Color::from_rgb8(0, 255, 0));
        assert!(approx_eq(lum, 0.7152, 1e-4), "green luminance: {lum}");
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-6), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric_and_at_least_one() {
        let a = Color::from_argb(0xFF3F_51B5);
        let b = Color::from_argb(0xFFE9_1E63);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
        assert!(approx_eq(contrast_ratio(a, a), 1.0, 1e-12));
    }

    #[test]
    fn indigo_is_dark() {
        assert!(is_dark(Color::from_argb(0xFF3F_51B5)));
        assert!(!is_dark(Color::from_argb(0xFFFF_EB3B)));
    }

    // ── Tint / shade ───────────────────────────────────────────────

    #[test]
    fn tint_and_shade_endpoints() {
        let c = Color::from_argb(0x803F_51B5);
        assert_eq!(tint(c, 0.0), c);
        assert_eq!(shade(c, 0.0), c);
        assert_eq!(tint(c, 1.0), Color::from_argb(0x80FF_FFFF));
        assert_eq!(shade(c, 1.0), Color::from_argb(0x8000_0000));
    }

    #[test]
    fn tint_halfway() {
        assert_eq!(tint(Color::from_rgb8(0, 100, 255), 0.5), Color::from_rgb8(128, 178, 255));
    }

    #[test]
    fn factors_are_sanitized() {
        let c = Color::from_argb(0xFF3F_51B5);
        assert_eq!(tint(c, f32::NAN), c);
        assert_eq!(shade(c, -3.0), c);
        assert_eq!(shade(c, 7.5), Color::BLACK);
        assert_eq!(tint(c, f32::INFINITY), Color::WHITE);
    }

    #[test]
    fn with_alpha_maps_unit_range() {
        let c = Color::from_argb(0xFF12_3456);
        assert_eq!(with_alpha(c, 0.0).argb(), 0x0012_3456);
        assert_eq!(with_alpha(c, 0.5).argb(), 0x8012_3456);
        assert_eq!(with_alpha(c, 2.0).argb(), 0xFF12_3456);
    }

    // ── Compositing ────────────────────────────────────────────────

    #[test]
    fn overlay_zero_alpha_is_identity() {
        let base = Color::from_argb(0xFF12_1212);
        assert_eq!(blend_overlay(base, Color::WHITE, 0.0), base);
    }

    #[test]
    fn overlay_full_alpha_is_overlay() {
        let base = Color::from_argb(0xFF12_1212);
        assert_eq!(blend_overlay(base, Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn overlay_on_opaque_base_stays_opaque() {
        let out = blend_overlay(Color::from_argb(0xFF00_0000), Color::WHITE, 0.5);
        assert_eq!(out, Color::from_rgb8(128, 128, 128));
    }

    #[test]
    fn overlay_on_transparent_base() {
        let out = blend_overlay(Color::TRANSPARENT, Color::from_argb(0xFF10_2030), 0.5);
        assert_eq!(out.alpha(), 128);
        assert_eq!((out.red(), out.green(), out.blue()), (0x10, 0x20, 0x30));
        assert_eq!(blend_overlay(Color::TRANSPARENT, Color::WHITE, 0.0), Color::TRANSPARENT);
    }

    // ── Foreground selection ───────────────────────────────────────

    #[test]
    fn foreground_prefers_light_when_it_passes() {
        let background = Color::from_argb(0xFF3F_51B5);
        let fg = contrast_safe_foreground(background, Color::WHITE, Color::BLACK, 4.5);
        assert_eq!(fg, Color::WHITE);
    }

    #[test]
    fn foreground_falls_back_to_dark() {
        let background = Color::from_argb(0xFFFF_EB3B);
        let fg = contrast_safe_foreground(background, Color::WHITE, Color::BLACK, 4.5);
        assert_eq!(fg, Color::BLACK);
    }

    #[test]
    fn foreground_picks_higher_ratio_when_neither_passes() {
        let bg = Color::from_rgb8(0x76, 0x76, 0x76);
        let light = Color::from_rgb8(0xA0, 0xA0, 0xA0);
        let dark = Color::from_rgb8(0x20, 0x20, 0x20);
        let fg = contrast_safe_foreground(bg, light, dark, 15.0);
        let other = if fg == light { dark } else { light };
        assert!(contrast_ratio(bg, fg) >= contrast_ratio(bg, other));
    }

    // ── ensure_contrast ────────────────────────────────────────────

    #[test]
    fn ensure_contrast_keeps_passing_color() {
        let c = Color::from_argb(0xFF3F_51B5);
        assert_eq!(ensure_contrast(c, Color::WHITE, 3.0, 0.9), c);
    }

    #[test]
    fn ensure_contrast_shades_on_light_background() {
        let yellow = Color::from_argb(0xFFFF_EB3B);
        let out = ensure_contrast(yellow, Color::WHITE, 3.0, 0.9);
        assert!(contrast_ratio(out, Color::WHITE) >= 3.0);
        assert!(relative_luminance(out) < relative_luminance(yellow));
    }

    #[test]
    fn ensure_contrast_tints_on_dark_background() {
        let navy = Color::from_argb(0xFF1A_237E);
        let bg = Color::from_argb(0xFF12_1212);
        let out = ensure_contrast(navy, bg, 3.0, 0.9);
        assert!(contrast_ratio(out, bg) >= 3.0);
        assert!(relative_luminance(out) > relative_luminance(navy));
    }

    #[test]
    fn ensure_contrast_respects_cap() {
        let c = Color::from_argb(0xFFF5_F5F5);
        let out = ensure_contrast(c, Color::WHITE, 21.0, 0.5);
        assert_eq!(out, shade(c, 0.5));
    }
}
