//! Stylesheet generation for a resolved theme
//!
//! Only utilities that appear in scanned content are emitted:
//! - `animate-<name>` plus the `@keyframes` it references
//! - `bg-<color>`, `text-<color>`, `border-<color>`
//!
//! Keyframes are rendered from well-formed stops only. Stray declarations
//! and misplaced stops are left out here; `theme::lint` reports them.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::debug;

use crate::theme::lint::{is_stop_selector, keyframes_referenced};
use crate::theme::{KeyframeNode, Theme};

/// Class-name candidates found in source text
pub type Candidates = BTreeSet<String>;

static CANDIDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_\-]+").expect("Invalid regex"));

const COLOR_UTILITIES: &[(&str, &str)] = &[
    ("bg", "background-color"),
    ("text", "color"),
    ("border", "border-color"),
];

/// Pull class-like tokens out of arbitrary source text.
///
/// Tokens need a letter and a dash (`bg-amber`, `animate-shake`); this
/// over-collects harmlessly, since only tokens naming a theme utility render.
pub fn extract_candidates(text: &str) -> Candidates {
    CANDIDATE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| token.contains('-') && token.chars().any(|c| c.is_ascii_alphabetic()))
        .map(str::to_string)
        .collect()
}

/// Render CSS for the utilities in `candidates`.
///
/// Output order follows the theme, not the candidates, so equal inputs give
/// byte-identical output. No matching candidates gives an empty string.
pub fn render(theme: &Theme, candidates: &Candidates) -> String {
    let mut keyframes_needed: IndexSet<&str> = IndexSet::new();
    let mut animation_rules = String::new();

    for (name, shorthand) in &theme.animation {
        let class = format!("animate-{}", name);
        if !candidates.contains(&class) {
            continue;
        }
        keyframes_needed.extend(keyframes_referenced(shorthand));
        let _ = writeln!(
            animation_rules,
            ".{} {{\n  animation: {};\n}}",
            escape_class(&class),
            shorthand
        );
    }

    let mut css = String::new();
    for name in &keyframes_needed {
        if let Some(block) = render_keyframes(theme, name) {
            css.push_str(&block);
        }
    }
    css.push_str(&animation_rules);

    for (name, value) in theme.flat_colors() {
        for (prefix, property) in COLOR_UTILITIES {
            let class = format!("{}-{}", prefix, name);
            if candidates.contains(&class) {
                let _ = writeln!(
                    css,
                    ".{} {{\n  {}: {};\n}}",
                    escape_class(&class),
                    property,
                    value
                );
            }
        }
    }

    debug!(
        candidates = candidates.len(),
        keyframes = keyframes_needed.len(),
        bytes = css.len(),
        "Rendered stylesheet"
    );
    css
}

fn render_keyframes(theme: &Theme, name: &str) -> Option<String> {
    let stops = theme.keyframes.get(name)?.as_block()?;
    let mut out = String::new();
    let _ = writeln!(out, "@keyframes {} {{", name);

    for (selector, stop) in stops {
        let KeyframeNode::Block(declarations) = stop else {
            continue;
        };
        if !is_stop_selector(selector) {
            continue;
        }
        let _ = writeln!(out, "  {} {{", selector);
        for (property, value) in declarations {
            if let Some(value) = value.as_declaration() {
                let _ = writeln!(out, "    {}: {};", kebab_case(property), value);
            }
        }
        out.push_str("  }\n");
    }

    out.push_str("}\n");
    Some(out)
}

/// `animationTimingFunction` -> `animation-timing-function`
fn kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    for (i, ch) in class.chars().enumerate() {
        let needs_escape = !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
            || (i == 0 && ch.is_ascii_digit());
        if needs_escape {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "css_tests.rs"]
mod tests;
