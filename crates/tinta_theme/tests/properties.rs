//! Property tests for theme resolution and encoding.
//!
//! 1. decode(encode(m)) resolves every carried attribute like m
//! 2. Re-encoding a decoded theme reproduces the text
//! 3. get() is idempotent
//! 4. Foreground selection never picks the worse candidate

use proptest::prelude::*;
use tinta_core::{math, Color};
use tinta_theme::{
    codec, AttributeKey, AttributeValue, BackgroundAware, ContrastMode, CornerStyle, ThemeKind,
    ThemeModel, ValueKind, Visibility,
};

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Set(AttributeKey, AttributeValue),
    Auto(AttributeKey),
    Clear(AttributeKey),
}

fn value_strategy(kind: ValueKind) -> BoxedStrategy<AttributeValue> {
    match kind {
        ValueKind::Color => any::<u32>()
            .prop_map(|argb| AttributeValue::Color(Color::from_argb(argb)))
            .boxed(),
        ValueKind::Int { min, max } => (min..=max).prop_map(AttributeValue::Int).boxed(),
        ValueKind::Float { min, max } => (min..=max).prop_map(AttributeValue::Float).boxed(),
        ValueKind::BackgroundAware => prop::sample::select(BackgroundAware::ALL.to_vec())
            .prop_map(AttributeValue::BackgroundAware)
            .boxed(),
        ValueKind::Contrast => prop::sample::select(ContrastMode::ALL.to_vec())
            .prop_map(AttributeValue::Contrast)
            .boxed(),
        ValueKind::CornerStyle => prop::sample::select(CornerStyle::ALL.to_vec())
            .prop_map(AttributeValue::CornerStyle)
            .boxed(),
        ValueKind::Visibility => prop::sample::select(Visibility::ALL.to_vec())
            .prop_map(AttributeValue::Visibility)
            .boxed(),
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop::sample::select(AttributeKey::ALL.to_vec()).prop_flat_map(|key| {
        prop_oneof![
            3 => value_strategy(key.spec().kind).prop_map(move |v| Op::Set(key, v)),
            1 => Just(Op::Auto(key)),
            1 => Just(Op::Clear(key)),
        ]
    })
}

fn kind_strategy() -> impl Strategy<Value = ThemeKind> {
    prop::sample::select(ThemeKind::ALL.to_vec())
}

/// Build a theme by applying operations; invalid ones are rejected by the model.
fn build(kind: ThemeKind, ops: &[Op]) -> ThemeModel {
    let mut theme = ThemeModel::new(kind);
    for op in ops {
        let _ = match op {
            Op::Set(key, value) => theme.set(*key, *value),
            Op::Auto(key) => theme.set_auto(*key),
            Op::Clear(key) => theme.clear(*key),
        };
    }
    theme
}

fn carried(theme: &ThemeModel) -> Vec<AttributeKey> {
    AttributeKey::ALL
        .into_iter()
        .filter(|key| theme.supports(*key) && !key.spec().excluded)
        .collect()
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let theme = build(kind, &ops);
        let decoded = codec::decode(&codec::encode(&theme, &[])).unwrap();
        prop_assert_eq!(decoded.kind(), theme.kind());
        for key in carried(&theme) {
            prop_assert_eq!(decoded.get(key), theme.get(key), "key {}", key);
        }
    }

    #[test]
    fn reencoding_is_a_fixed_point(
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let theme = build(kind, &ops);
        let once = codec::encode(&theme, &[]);
        let twice = codec::encode(&codec::decode(&once).unwrap(), &[]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn get_is_idempotent(
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let theme = build(kind, &ops);
        for key in carried(&theme) {
            let first = theme.get(key);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, theme.get(key));
        }
    }

    #[test]
    fn foreground_never_picks_the_worse_candidate(
        background in any::<u32>().prop_map(Color::from_argb),
        min_ratio in 1.0f64..=4.5,
    ) {
        let fg = math::contrast_safe_foreground(background, Color::WHITE, Color::BLACK, min_ratio);
        let ratio = math::contrast_ratio(background, fg);
        if ratio < min_ratio {
            let other = if fg == Color::WHITE { Color::BLACK } else { Color::WHITE };
            prop_assert!(ratio >= math::contrast_ratio(background, other));
        }
        // One of white and black always clears 4.5 against any background
        prop_assert!(ratio >= min_ratio);
    }
}
