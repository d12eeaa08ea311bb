//! Versioned text encoding of themes
//!
//! Format: `v<version>;<code>=<value>;<code>=<value>;...`
//!
//! - Codes are the stable short codes of the contract table; decode also
//!   accepts long attribute names.
//! - Colors are `#AARRGGBB`, enums are lowercase tokens, floats carry four
//!   decimals and `auto` marks a derived slot.
//! - Code `24` names the theme kind (`app` when absent).
//! - Older versions are migrated forward; newer versions are rejected.
//! - Unknown codes are skipped; decode is all-or-nothing otherwise.

use tracing::{debug, trace};

use crate::config::PaletteConfig;
use crate::contract::{AUTO_TOKEN, CURRENT_VERSION, KIND_CODE, KIND_NAME};
use crate::error::{Result, ThemeError};
use crate::migrate::RawTheme;
use crate::model::ThemeModel;
use crate::tokens::{AttributeKey, Slot, ThemeKind};

/// Upper bound on entries in one encoded theme
const MAX_ENTRIES: usize = 256;

/// Encode `model`, skipping contract-excluded keys and those in `excluded`.
///
/// Every other key in the model's capability set is written: explicit
/// values as themselves, auto slots and unset derivable keys as `auto`,
/// unset non-derivable keys as their resolved value.
pub fn encode(model: &ThemeModel, excluded: &[AttributeKey]) -> String {
    let mut out = format!("v{CURRENT_VERSION};{KIND_CODE}={}", model.kind().token());
    for key in AttributeKey::ALL {
        let spec = key.spec();
        if spec.excluded || excluded.contains(&key) || !model.supports(key) {
            continue;
        }

        let token = match model.slot(key) {
            Some(Slot::Value(value)) => value.to_token(),
            Some(Slot::Auto) => AUTO_TOKEN.to_string(),
            None if spec.derivable => AUTO_TOKEN.to_string(),
            None => match model.get(key) {
                Ok(value) => value.to_token(),
                Err(_) => continue,
            },
        };
        out.push(';');
        out.push_str(spec.code);
        out.push('=');
        out.push_str(&token);
    }
    trace!(bytes = out.len(), kind = %model.kind(), "encoded theme");
    out
}

/// Decode with the default palette configuration
pub fn decode(input: &str) -> Result<ThemeModel> {
    decode_with_config(input, PaletteConfig::default())
}

/// Decode, migrating older versions forward, into a model using `config`
pub fn decode_with_config(input: &str, config: PaletteConfig) -> Result<ThemeModel> {
    let mut raw = parse_raw(input)?;
    raw.migrate()?;

    let kind = match raw.entries.get(KIND_CODE).or_else(|| raw.entries.get(KIND_NAME)) {
        Some(token) => ThemeKind::from_token(token)
            .ok_or_else(|| ThemeError::decode(KIND_CODE, format!("unknown theme kind `{token}`")))?,
        None => ThemeKind::App,
    };

    let mut model = ThemeModel::with_config(kind, config)?;
    for (name, token) in &raw.entries {
        if name == KIND_CODE || name == KIND_NAME {
            continue;
        }
        let Some(key) = AttributeKey::lookup(name) else {
            debug!(code = %name, "skipping unknown attribute");
            continue;
        };
        let spec = key.spec();
        if spec.excluded || !model.supports(key) {
            debug!(%key, %kind, "skipping attribute not carried by this theme");
            continue;
        }

        let slot = if spec.derivable && token == AUTO_TOKEN {
            Slot::Auto
        } else {
            let value = spec
                .kind
                .parse(token)
                .map_err(|reason| ThemeError::decode(spec.code, reason))?;
            spec.kind
                .check(&value)
                .map_err(|reason| ThemeError::decode(spec.code, reason))?;
            Slot::Value(value.quantized())
        };
        model.put(key, slot);
    }
    Ok(model)
}

/// Split the version prefix and key/value segments
fn parse_raw(input: &str) -> Result<RawTheme> {
    let mut segments = input.trim().split(';');
    let prefix = segments.next().unwrap_or_default().trim();
    let version = prefix
        .strip_prefix('v')
        .and_then(|digits| digits.parse::<u32>().ok())
        .filter(|version| *version > 0)
        .ok_or_else(|| {
            ThemeError::decode("version", format!("expected `v<version>`, found `{prefix}`"))
        })?;
    if version > CURRENT_VERSION {
        return Err(ThemeError::UnsupportedVersion {
            found: version,
            supported: CURRENT_VERSION,
        });
    }

    let mut raw = RawTheme::new(version);
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some((name, value)) = segment.split_once('=') else {
            return Err(ThemeError::decode(segment, "missing `=`"));
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            return Err(ThemeError::decode(segment, "missing attribute code"));
        }
        if value.is_empty() {
            return Err(ThemeError::decode(name, "missing value"));
        }
        // Later duplicates win, whichever spelling they use.
        let name = canonical(name);
        raw.entries.shift_remove(name);
        raw.entries.insert(name.to_string(), value.to_string());
        if raw.entries.len() > MAX_ENTRIES {
            let reason = format!("too many entries (max {MAX_ENTRIES})");
            return Err(ThemeError::decode("entries", reason));
        }
    }
    Ok(raw)
}

/// Short code for a known code or long name; anything else stays as written
fn canonical(name: &str) -> &str {
    AttributeKey::from_code(name)
        .or_else(|| AttributeKey::from_name(name))
        .map_or(name, |key| key.code())
}
