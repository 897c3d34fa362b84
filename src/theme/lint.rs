//! Structural checks for keyframes and animations
//!
//! Lint never edits the theme. It reports shapes that are almost certainly
//! authoring mistakes, e.g. a declaration sitting beside stop selectors or a
//! stop selector used as an animation name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{KeyframeNode, Keyframes, Theme};

static STOP_SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:from|to|\d+(?:\.\d+)?%)(?:\s*,\s*(?:from|to|\d+(?:\.\d+)?%))*\s*$",
    )
    .expect("Invalid regex")
});

/// A likely authoring error found in a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeIssue {
    /// A declaration placed directly under an animation, beside its stops
    StrayDeclaration { animation: String, property: String },
    /// A stop selector used as a top-level keyframes name
    MisplacedStop { selector: String },
    /// A stop with no declarations
    EmptyStop { animation: String, selector: String },
    /// A block under an animation whose key is not a stop selector
    InvalidSelector { animation: String, selector: String },
    /// A keyframes entry that is a bare value instead of a block of stops
    NotABlock { animation: String },
    /// An animation shorthand naming keyframes the theme does not define
    UnknownKeyframes { animation: String, name: String },
}

impl fmt::Display for ThemeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrayDeclaration { animation, property } => write!(
                f,
                "keyframes.{animation}: '{property}' is a declaration at stop level; it belongs inside a stop"
            ),
            Self::MisplacedStop { selector } => write!(
                f,
                "keyframes: '{selector}' looks like a stop selector but is defined as an animation"
            ),
            Self::EmptyStop { animation, selector } => {
                write!(f, "keyframes.{animation}: stop '{selector}' has no declarations")
            }
            Self::InvalidSelector { animation, selector } => {
                write!(f, "keyframes.{animation}: '{selector}' is not a valid stop selector")
            }
            Self::NotABlock { animation } => {
                write!(f, "keyframes.{animation}: expected a block of stops")
            }
            Self::UnknownKeyframes { animation, name } => {
                write!(f, "animation.{animation}: no keyframes named '{name}'")
            }
        }
    }
}

/// True for `from`, `to`, `50%` and comma lists of those (`"10%, 90%"`)
pub fn is_stop_selector(key: &str) -> bool {
    STOP_SELECTOR_RE.is_match(key)
}

pub fn lint_keyframes(keyframes: &Keyframes) -> Vec<ThemeIssue> {
    let mut issues = Vec::new();

    for (name, node) in keyframes {
        if is_stop_selector(name) {
            issues.push(ThemeIssue::MisplacedStop {
                selector: name.clone(),
            });
            continue;
        }

        let Some(stops) = node.as_block() else {
            issues.push(ThemeIssue::NotABlock {
                animation: name.clone(),
            });
            continue;
        };

        for (selector, stop) in stops {
            match stop {
                KeyframeNode::Block(declarations) => {
                    if !is_stop_selector(selector) {
                        issues.push(ThemeIssue::InvalidSelector {
                            animation: name.clone(),
                            selector: selector.clone(),
                        });
                    } else if declarations.is_empty() {
                        issues.push(ThemeIssue::EmptyStop {
                            animation: name.clone(),
                            selector: selector.clone(),
                        });
                    }
                }
                KeyframeNode::Declaration(_) | KeyframeNode::Number(_) => {
                    issues.push(ThemeIssue::StrayDeclaration {
                        animation: name.clone(),
                        property: selector.clone(),
                    });
                }
            }
        }
    }

    issues
}

pub fn lint_animations(theme: &Theme) -> Vec<ThemeIssue> {
    let mut issues = Vec::new();

    for (animation, shorthand) in &theme.animation {
        for name in keyframes_referenced(shorthand) {
            if !theme.keyframes.contains_key(name) {
                issues.push(ThemeIssue::UnknownKeyframes {
                    animation: animation.clone(),
                    name: name.to_string(),
                });
            }
        }
    }

    issues
}

/// Run every check over a resolved theme
pub fn lint_theme(theme: &Theme) -> Vec<ThemeIssue> {
    let mut issues = lint_keyframes(&theme.keyframes);
    issues.extend(lint_animations(theme));
    issues
}

/// Keyframes names used by an animation shorthand.
///
/// Each comma-separated layer starts with its keyframes name; commas inside
/// `cubic-bezier(...)` do not split layers. `none` names nothing.
pub fn keyframes_referenced(shorthand: &str) -> Vec<&str> {
    split_top_level(shorthand)
        .into_iter()
        .filter_map(|layer| layer.split_whitespace().next())
        .filter(|name| *name != "none")
        .collect()
}

fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}
