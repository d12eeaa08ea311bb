//! End-to-end encoding, migration and fallback scenarios.

use pretty_assertions::assert_eq;
use tinta_core::{math, Color};
use tinta_theme::{
    codec, AttributeKey, AttributeValue, BackgroundAware, ContrastMode, CornerStyle, Palette, Slot,
    ThemeError, ThemeKind, ThemeModel, ThemeStore, CURRENT_VERSION,
};

const INDIGO: Color = Color::from_argb(0xFF3F_51B5);

// ── Derivation scenarios ───────────────────────────────────────────

#[test]
fn on_primary_passes_aa_on_white_background() {
    let mut theme = ThemeModel::new(ThemeKind::App);
    theme.set(AttributeKey::Primary, INDIGO).unwrap();
    theme.set(AttributeKey::Background, Color::WHITE).unwrap();
    theme.set(AttributeKey::BackgroundAware, BackgroundAware::Auto).unwrap();

    let on_primary = theme.color(AttributeKey::TintPrimary).unwrap();
    assert!(math::contrast_ratio(on_primary, INDIGO) >= 4.5);
}

#[test]
fn elevation_overlay_is_zero_at_ground_and_saturates() {
    let palette = Palette::default();
    assert_eq!(palette.overlay_alpha(0), 0.0);
    assert_eq!(palette.overlay_alpha(25), palette.overlay_alpha(24));
    assert_eq!(palette.overlay_alpha(96), palette.overlay_alpha(24));
    assert!(palette.overlay_alpha(24) > palette.overlay_alpha(23));

    let surface = Color::from_argb(0xFF12_1212);
    assert_eq!(palette.elevated(surface, 0), surface);
}

// ── Encoding scenarios ─────────────────────────────────────────────

#[test]
fn excluded_corner_radius_decodes_to_default() {
    let mut theme = ThemeModel::new(ThemeKind::App);
    theme.set(AttributeKey::CornerRadius, AttributeValue::Int(8)).unwrap();

    let text = codec::encode(&theme, &[AttributeKey::CornerRadius]);
    assert!(!text.contains(";17="));

    let decoded = codec::decode(&text).unwrap();
    assert_eq!(decoded.get(AttributeKey::CornerRadius), Ok(AttributeValue::Int(2)));
}

#[test]
fn round_trip_with_every_value_kind() {
    let mut theme = ThemeModel::new(ThemeKind::Widget);
    theme.set(AttributeKey::Background, Color::from_argb(0xFF26_3238)).unwrap();
    theme.set(AttributeKey::Accent, Color::from_argb(0x80FF_C107)).unwrap();
    theme.set(AttributeKey::FontScale, AttributeValue::Float(0.9)).unwrap();
    theme.set(AttributeKey::Opacity, AttributeValue::Float(0.6667)).unwrap();
    theme.set(AttributeKey::Contrast, ContrastMode::High).unwrap();
    theme.set(AttributeKey::CornerStyle, CornerStyle::Oval).unwrap();
    theme.set(AttributeKey::Header, tinta_theme::Visibility::Show).unwrap();
    theme.set(AttributeKey::StrokeWidth, AttributeValue::Int(3)).unwrap();
    theme.set_auto(AttributeKey::TintAccent).unwrap();

    let decoded = codec::decode(&codec::encode(&theme, &[])).unwrap();
    for key in AttributeKey::ALL {
        if key.spec().excluded {
            continue;
        }
        assert_eq!(decoded.get(key), theme.get(key), "{key}");
    }
    assert_eq!(decoded.slot(AttributeKey::TintAccent), Some(&Slot::Auto));
}

#[test]
fn reencoding_is_stable() {
    let mut theme = ThemeModel::new(ThemeKind::App);
    theme.set(AttributeKey::Primary, Color::from_argb(0xFF00_9688)).unwrap();
    let once = codec::encode(&theme, &[]);
    let twice = codec::encode(&codec::decode(&once).unwrap(), &[]);
    assert_eq!(once, twice);
}

#[test]
fn unknown_codes_are_skipped() {
    let theme = codec::decode("v3;4=#FF009688;99=whatever;futureKey=1").unwrap();
    assert_eq!(theme.color(AttributeKey::Primary), Ok(Color::from_argb(0xFF00_9688)));
    assert_eq!(theme.slots().count(), 1);
}

// ── Versions and migrations ────────────────────────────────────────

#[test]
fn v1_theme_migrates_to_current() {
    let v1 = "v1;0=#FF121212;4=#FF3F51B5;4Z=#FF1A237E;14Z=#FFB0B0B0;16=110;17=12;18=enable;20=128";
    let theme = codec::decode(v1).unwrap();
    assert_eq!(theme.version(), CURRENT_VERSION);

    // v1 attributes are preserved, reinterpreted where the format changed
    assert_eq!(theme.color(AttributeKey::Background), Ok(Color::from_argb(0xFF12_1212)));
    assert_eq!(theme.color(AttributeKey::Primary), Ok(INDIGO));
    assert_eq!(theme.color(AttributeKey::PrimaryDark), Ok(Color::from_argb(0xFF1A_237E)));
    assert_eq!(theme.color(AttributeKey::TextSecondaryInverse), Ok(Color::from_argb(0xFFB0_B0B0)));
    assert_eq!(theme.get(AttributeKey::FontScale), Ok(AttributeValue::Float(1.1)));
    assert_eq!(theme.get(AttributeKey::CornerRadius), Ok(AttributeValue::Int(12)));
    assert_eq!(
        theme.get(AttributeKey::BackgroundAware),
        Ok(AttributeValue::BackgroundAware(BackgroundAware::Auto))
    );
    assert_eq!(theme.get(AttributeKey::Opacity), Ok(AttributeValue::Float(0.502)));

    // v2 and v3 attributes sit at their documented defaults
    assert_eq!(
        theme.get(AttributeKey::Contrast),
        Ok(AttributeValue::Contrast(ContrastMode::Standard))
    );
    assert_eq!(theme.get(AttributeKey::Elevation), Ok(AttributeValue::Int(1)));
    assert_eq!(theme.get(AttributeKey::StrokeWidth), Ok(AttributeValue::Int(1)));
    assert_eq!(theme.slot(AttributeKey::CornerStyle), Some(&Slot::Auto));
    assert_eq!(
        theme.get(AttributeKey::CornerStyle),
        Ok(AttributeValue::CornerStyle(CornerStyle::Round))
    );
}

#[test]
fn v2_theme_keeps_its_contrast() {
    let theme = codec::decode("v2;25=high;26=4;20=255").unwrap();
    assert_eq!(theme.get(AttributeKey::Contrast), Ok(AttributeValue::Contrast(ContrastMode::High)));
    assert_eq!(theme.get(AttributeKey::Elevation), Ok(AttributeValue::Int(4)));
    assert_eq!(theme.get(AttributeKey::Opacity), Ok(AttributeValue::Float(1.0)));
}

#[test]
fn migrated_theme_encodes_at_current_version() {
    let theme = codec::decode("v1;16=100").unwrap();
    assert!(codec::encode(&theme, &[]).starts_with("v3;"));
}

#[test]
fn newer_versions_are_rejected() {
    assert_eq!(
        codec::decode("v4;4=#FF3F51B5").unwrap_err(),
        ThemeError::UnsupportedVersion {
            found: 4,
            supported: CURRENT_VERSION,
        }
    );
}

#[test]
fn migration_errors_name_the_field() {
    let err = codec::decode("v1;16=1.5").unwrap_err();
    assert!(matches!(err, ThemeError::Decode { ref field, .. } if field == "16"));
}

// ── Fallback chains ────────────────────────────────────────────────

#[test]
fn cyclic_fallback_is_rejected() {
    let mut store = ThemeStore::new();
    let a = store.insert(ThemeModel::new(ThemeKind::App));
    let b = store.insert(ThemeModel::new(ThemeKind::Fallback));
    store.set_fallback(a, b).unwrap();

    assert_eq!(store.set_fallback(b, a), Err(ThemeError::InvalidChain { theme: b }));
    assert_eq!(store.chain(a), Ok(vec![a, b]));
}

#[test]
fn store_encoding_inlines_fallback_values() {
    let mut store = ThemeStore::new();
    let mut base = ThemeModel::new(ThemeKind::Fallback);
    base.set(AttributeKey::Accent, Color::from_argb(0xFFFF_5722)).unwrap();
    let base = store.insert(base);
    let app = store.insert(ThemeModel::new(ThemeKind::App));
    store.set_fallback(app, base).unwrap();

    let text = store.encode(app, &[]).unwrap();
    assert!(text.contains(";8=#FFFF5722;"));
    let decoded = codec::decode(&text).unwrap();
    assert_eq!(decoded.color(AttributeKey::Accent), Ok(Color::from_argb(0xFFFF_5722)));
}
