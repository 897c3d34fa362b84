//! Merging a config's theme section onto a base theme

use serde_json::Value;
use tracing::debug;

use super::color::validate_palette;
use super::types::{Theme, ThemeExtension, ThemeSection};
use crate::error::Result;

/// Resolve `section` against `base`.
///
/// Colors are validated before anything is merged, so an invalid token
/// rejects the whole section. Categories set directly on the section replace
/// the base category; categories under `extend` are merged key by key with
/// the extension winning on collisions. Pure: equal inputs give equal output.
pub fn resolve_theme(base: &Theme, section: &ThemeSection) -> Result<Theme> {
    validate_section(section)?;

    let mut theme = base.clone();
    apply_overrides(&mut theme, &section.overrides);
    if let Some(extend) = &section.extend {
        apply_extension(&mut theme, extend);
    }

    debug!(
        colors = theme.colors.len(),
        animations = theme.animation.len(),
        keyframes = theme.keyframes.len(),
        other_categories = theme.other.len(),
        "Resolved theme"
    );
    Ok(theme)
}

fn validate_section(section: &ThemeSection) -> Result<()> {
    if let Some(colors) = &section.overrides.colors {
        validate_palette("theme.colors", colors)?;
    }
    if let Some(colors) = section.extend.as_ref().and_then(|e| e.colors.as_ref()) {
        validate_palette("theme.extend.colors", colors)?;
    }
    Ok(())
}

fn apply_overrides(theme: &mut Theme, overrides: &ThemeExtension) {
    if let Some(colors) = &overrides.colors {
        debug!(category = "colors", "Replacing default category");
        theme.colors = colors.clone();
    }
    if let Some(animation) = &overrides.animation {
        debug!(category = "animation", "Replacing default category");
        theme.animation = animation.clone();
    }
    if let Some(keyframes) = &overrides.keyframes {
        debug!(category = "keyframes", "Replacing default category");
        theme.keyframes = keyframes.clone();
    }
    for (category, value) in &overrides.other {
        debug!(category = %category, "Replacing default category");
        theme.other.insert(category.clone(), value.clone());
    }
}

// IndexMap::insert keeps an existing key at its original position, so
// overridden defaults stay where the base put them.
fn apply_extension(theme: &mut Theme, extend: &ThemeExtension) {
    if let Some(colors) = &extend.colors {
        for (name, value) in colors {
            theme.colors.insert(name.clone(), value.clone());
        }
    }
    if let Some(animation) = &extend.animation {
        for (name, value) in animation {
            theme.animation.insert(name.clone(), value.clone());
        }
    }
    if let Some(keyframes) = &extend.keyframes {
        for (name, value) in keyframes {
            theme.keyframes.insert(name.clone(), value.clone());
        }
    }
    for (category, value) in &extend.other {
        match (theme.other.get_mut(category), value) {
            (Some(Value::Object(existing)), Value::Object(additions)) => {
                for (key, token) in additions {
                    existing.insert(key.clone(), token.clone());
                }
            }
            _ => {
                theme.other.insert(category.clone(), value.clone());
            }
        }
    }
}
