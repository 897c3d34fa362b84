//! Built-in default theme
//!
//! The base every config is merged onto. Values follow the stock Tailwind v3
//! theme for the categories this crate models; only a handful of palettes
//! are carried.

use indexmap::IndexMap;

use super::types::{ColorValue, KeyframeNode, Keyframes, Palette, Theme};

/// Single-token colors, in theme order
pub const DEFAULT_BASE_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000"),
    ("white", "#fff"),
];

const SLATE: &[(&str, &str)] = &[
    ("50", "#f8fafc"),
    ("100", "#f1f5f9"),
    ("200", "#e2e8f0"),
    ("300", "#cbd5e1"),
    ("400", "#94a3b8"),
    ("500", "#64748b"),
    ("600", "#475569"),
    ("700", "#334155"),
    ("800", "#1e293b"),
    ("900", "#0f172a"),
    ("950", "#020617"),
];

const GRAY: &[(&str, &str)] = &[
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

const RED: &[(&str, &str)] = &[
    ("50", "#fef2f2"),
    ("100", "#fee2e2"),
    ("200", "#fecaca"),
    ("300", "#fca5a5"),
    ("400", "#f87171"),
    ("500", "#ef4444"),
    ("600", "#dc2626"),
    ("700", "#b91c1c"),
    ("800", "#991b1b"),
    ("900", "#7f1d1d"),
    ("950", "#450a0a"),
];

const GREEN: &[(&str, &str)] = &[
    ("50", "#f0fdf4"),
    ("100", "#dcfce7"),
    ("200", "#bbf7d0"),
    ("300", "#86efac"),
    ("400", "#4ade80"),
    ("500", "#22c55e"),
    ("600", "#16a34a"),
    ("700", "#15803d"),
    ("800", "#166534"),
    ("900", "#14532d"),
    ("950", "#052e16"),
];

const BLUE: &[(&str, &str)] = &[
    ("50", "#eff6ff"),
    ("100", "#dbeafe"),
    ("200", "#bfdbfe"),
    ("300", "#93c5fd"),
    ("400", "#60a5fa"),
    ("500", "#3b82f6"),
    ("600", "#2563eb"),
    ("700", "#1d4ed8"),
    ("800", "#1e40af"),
    ("900", "#1e3a8a"),
    ("950", "#172554"),
];

/// Shaded palettes, in theme order
pub const DEFAULT_PALETTES: &[(&str, &[(&str, &str)])] = &[
    ("slate", SLATE),
    ("gray", GRAY),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
];

/// Default animation shorthands
pub const DEFAULT_ANIMATIONS: &[(&str, &str)] = &[
    ("none", "none"),
    ("spin", "spin 1s linear infinite"),
    ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
    ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
    ("bounce", "bounce 1s infinite"),
];

pub fn default_colors() -> Palette {
    let mut colors: Palette = DEFAULT_BASE_COLORS
        .iter()
        .map(|(name, value)| (name.to_string(), ColorValue::from(*value)))
        .collect();
    for (name, shades) in DEFAULT_PALETTES {
        let palette = shades
            .iter()
            .map(|(shade, value)| (shade.to_string(), ColorValue::from(*value)))
            .collect();
        colors.insert(name.to_string(), ColorValue::Palette(palette));
    }
    colors
}

pub fn default_animations() -> IndexMap<String, String> {
    DEFAULT_ANIMATIONS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn default_keyframes() -> Keyframes {
    use KeyframeNode as K;

    let mut keyframes = Keyframes::new();
    keyframes.insert(
        "spin".into(),
        K::block([("to", K::block([("transform", K::decl("rotate(360deg)"))]))]),
    );
    keyframes.insert(
        "ping".into(),
        K::block([(
            "75%, 100%",
            K::block([("transform", K::decl("scale(2)")), ("opacity", K::decl("0"))]),
        )]),
    );
    keyframes.insert(
        "pulse".into(),
        K::block([("50%", K::block([("opacity", K::decl(".5"))]))]),
    );
    keyframes.insert(
        "bounce".into(),
        K::block([
            (
                "0%, 100%",
                K::block([
                    ("transform", K::decl("translateY(-25%)")),
                    ("animationTimingFunction", K::decl("cubic-bezier(0.8,0,1,1)")),
                ]),
            ),
            (
                "50%",
                K::block([
                    ("transform", K::decl("none")),
                    ("animationTimingFunction", K::decl("cubic-bezier(0,0,0.2,1)")),
                ]),
            ),
        ]),
    );
    keyframes
}

pub fn default_theme() -> Theme {
    Theme {
        colors: default_colors(),
        animation: default_animations(),
        keyframes: default_keyframes(),
        other: IndexMap::new(),
    }
}
