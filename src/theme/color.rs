//! Color token validation
//!
//! A color token is accepted when it is a hex code, a CSS keyword, a CSS
//! named color, a color function with balanced parentheses, or a `var()`
//! reference.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{ColorValue, Palette};
use crate::error::{Result, ThemeConfigError};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("Invalid regex")
});

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:rgba?|hsla?|hwb|lab|lch|oklab|oklch|color)\(.+\)$").expect("Invalid regex")
});

static VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^var\(\s*--[A-Za-z0-9_-]+\s*(?:,.*)?\)$").expect("Invalid regex")
});

const KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit", "initial", "unset"];

/// CSS Color Module Level 4 named colors
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

/// Returns true if `value` is a recognized CSS color token
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value.starts_with('#') {
        return HEX_RE.is_match(value);
    }

    let lower = value.to_ascii_lowercase();
    if KEYWORDS.contains(&lower.as_str()) || NAMED_COLORS.binary_search(&lower.as_str()).is_ok() {
        return true;
    }

    (FUNCTION_RE.is_match(value) || VAR_RE.is_match(value)) && parens_balanced(value)
}

fn parens_balanced(value: &str) -> bool {
    let mut depth: usize = 0;
    for ch in value.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Validate every token of a palette, nested palettes included.
///
/// `prefix` is the dotted key path of the palette (`"colors"`,
/// `"extend.colors"`); the error names the full path of the first bad token.
pub fn validate_palette(prefix: &str, palette: &Palette) -> Result<()> {
    for (name, value) in palette {
        let key = format!("{}.{}", prefix, name);
        match value {
            ColorValue::Token(token) => {
                if !is_valid_color(token) {
                    return Err(ThemeConfigError::InvalidColor {
                        key,
                        value: token.clone(),
                    });
                }
            }
            ColorValue::Palette(shades) => validate_palette(&key, shades)?,
        }
    }
    Ok(())
}
