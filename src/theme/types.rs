//! Theme type definitions
//!
//! Contains the shapes a theme section can take:
//! - ColorValue (single token or nested palette)
//! - KeyframeNode (declaration or block, recursive)
//! - ThemeExtension, ThemeSection (as written in the config)
//! - Theme (resolved, after merging onto defaults)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A color entry: either a single CSS color token or a nested palette
/// such as `blue: { 50: "#eff6ff", 500: "#3b82f6" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Token(String),
    Palette(IndexMap<String, ColorValue>),
}

impl ColorValue {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            ColorValue::Token(token) => Some(token),
            ColorValue::Palette(_) => None,
        }
    }
}

impl From<&str> for ColorValue {
    fn from(token: &str) -> Self {
        ColorValue::Token(token.to_string())
    }
}

pub type Palette = IndexMap<String, ColorValue>;

/// One node of a keyframes tree.
///
/// Nodes are kept exactly as written. A well-formed animation is a `Block`
/// of stop selectors, each a `Block` of declarations, but nothing stops a
/// config from putting a declaration where a stop belongs; that shape is
/// preserved here and reported by [`super::lint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyframeNode {
    Declaration(String),
    Number(serde_json::Number),
    Block(IndexMap<String, KeyframeNode>),
}

impl KeyframeNode {
    /// Declaration value as CSS text, `None` for blocks
    pub fn as_declaration(&self) -> Option<String> {
        match self {
            KeyframeNode::Declaration(value) => Some(value.clone()),
            KeyframeNode::Number(number) => Some(number.to_string()),
            KeyframeNode::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&IndexMap<String, KeyframeNode>> {
        match self {
            KeyframeNode::Block(children) => Some(children),
            _ => None,
        }
    }

    pub fn block<K: Into<String>>(entries: impl IntoIterator<Item = (K, KeyframeNode)>) -> Self {
        KeyframeNode::Block(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn decl(value: &str) -> Self {
        KeyframeNode::Declaration(value.to_string())
    }
}

pub type Keyframes = IndexMap<String, KeyframeNode>;

/// Theme categories as they appear either directly on `theme` or under
/// `theme.extend`.
///
/// `colors`, `animation` and `keyframes` are typed; every other category
/// (spacing, fontFamily, ...) is carried as raw JSON in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeExtension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Keyframes>,
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl ThemeExtension {
    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.animation.is_none()
            && self.keyframes.is_none()
            && self.other.is_empty()
    }
}

/// The `theme` key of a config file.
///
/// Categories set directly replace the defaults wholesale; categories under
/// `extend` are merged key by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<ThemeExtension>,
    #[serde(flatten)]
    pub overrides: ThemeExtension,
}

/// A fully resolved theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Palette,
    pub animation: IndexMap<String, String>,
    pub keyframes: Keyframes,
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl Default for Theme {
    fn default() -> Self {
        super::defaults::default_theme()
    }
}

impl Theme {
    /// Look up a color token by dotted path (`"amber"`, `"blue.500"`).
    ///
    /// A palette's `DEFAULT` entry answers for the palette name itself.
    pub fn color(&self, path: &str) -> Option<&str> {
        let mut parts = path.split('.');
        let mut current = self.colors.get(parts.next()?)?;
        for part in parts {
            match current {
                ColorValue::Palette(shades) => current = shades.get(part)?,
                ColorValue::Token(_) => return None,
            }
        }
        match current {
            ColorValue::Token(token) => Some(token),
            ColorValue::Palette(shades) => shades.get("DEFAULT").and_then(ColorValue::as_token),
        }
    }

    /// Flatten nested palettes into utility-style names (`blue-500`).
    ///
    /// `DEFAULT` keys collapse into their parent name, as in `border-primary`.
    pub fn flat_colors(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        flatten_palette(None, &self.colors, &mut out);
        out
    }
}

fn flatten_palette<'a>(prefix: Option<&str>, palette: &'a Palette, out: &mut Vec<(String, &'a str)>) {
    for (key, value) in palette {
        let name = match (prefix, key.as_str()) {
            (Some(prefix), "DEFAULT") => prefix.to_string(),
            (Some(prefix), key) => format!("{}-{}", prefix, key),
            (None, key) => key.to_string(),
        };
        match value {
            ColorValue::Token(token) => out.push((name, token)),
            ColorValue::Palette(shades) => flatten_palette(Some(&name), shades, out),
        }
    }
}
