use super::*;
use crate::error::ThemeConfigError;
use serde_json::json;

const FIXTURE: &str = include_str!("../../fixtures/tailwind.config.json");

fn fixture_section() -> ThemeSection {
    let config: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    serde_json::from_value(config["theme"].clone()).unwrap()
}

fn resolved_fixture() -> Theme {
    resolve_theme(&Theme::default(), &fixture_section()).unwrap()
}

#[test]
fn test_default_theme_has_no_amber() {
    let theme = Theme::default();
    assert!(theme.colors.get("amber").is_none());
    assert_eq!(theme.color("transparent"), Some("transparent"));
    assert_eq!(theme.color("current"), Some("currentColor"));
    assert_eq!(theme.color("blue.500"), Some("#3b82f6"));
}

#[test]
fn test_default_theme_tables_are_complete() {
    let theme = Theme::default();
    assert_eq!(
        theme.colors.len(),
        DEFAULT_BASE_COLORS.len() + DEFAULT_PALETTES.len()
    );
    assert_eq!(theme.animation.len(), DEFAULT_ANIMATIONS.len());
    for (name, _) in DEFAULT_PALETTES {
        assert!(matches!(theme.colors[*name], ColorValue::Palette(_)));
    }
}

#[test]
fn test_default_theme_is_clean() {
    assert!(lint_theme(&Theme::default()).is_empty());
}

#[test]
fn test_extend_adds_amber() {
    let theme = resolved_fixture();
    assert_eq!(theme.color("amber"), Some("#FFBF00"));
}

#[test]
fn test_extend_keeps_every_default_color() {
    let base = Theme::default();
    let theme = resolved_fixture();

    for (name, value) in &base.colors {
        if name == "transparent" || name == "current" {
            continue;
        }
        assert_eq!(theme.colors.get(name), Some(value), "lost default color {name}");
    }
    let section = fixture_section();
    for (name, value) in section.extend.unwrap().colors.unwrap() {
        assert_eq!(theme.colors.get(&name), Some(&value));
    }
}

#[test]
fn test_extend_overrides_conflicting_defaults() {
    let mut base = Theme::default();
    base.colors.insert("transparent".into(), ColorValue::from("#00000000"));
    base.colors.insert("current".into(), ColorValue::from("black"));

    let theme = resolve_theme(&base, &fixture_section()).unwrap();
    assert_eq!(theme.color("transparent"), Some("transparent"));
    assert_eq!(theme.color("current"), Some("currentColor"));
}

#[test]
fn test_overridden_default_keeps_its_position() {
    let theme = resolved_fixture();
    let base = Theme::default();
    let base_index = base.colors.get_index_of("transparent");
    assert_eq!(theme.colors.get_index_of("transparent"), base_index);
    assert_eq!(theme.colors.last().map(|(k, _)| k.as_str()), Some("amber"));
}

#[test]
fn test_shake_animation_value_exact() {
    let theme = resolved_fixture();
    assert_eq!(
        theme.animation.get("shake").map(String::as_str),
        Some("shake 0.15s cubic-bezier(.36,.07,.19,.97) 2")
    );
    assert_eq!(
        theme.animation.get("spin").map(String::as_str),
        Some("spin 1s linear infinite")
    );
}

#[test]
fn test_resolve_is_idempotent() {
    let section = fixture_section();
    let first = resolve_theme(&Theme::default(), &section).unwrap();
    let second = resolve_theme(&Theme::default(), &section).unwrap();
    assert_eq!(first, second);

    let reapplied = resolve_theme(&first, &section).unwrap();
    assert_eq!(first, reapplied);
}

#[test]
fn test_malformed_shake_is_preserved() {
    let theme = resolved_fixture();

    let shake = theme.keyframes["shake"].as_block().unwrap();
    let keys: Vec<&str> = shake.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["10%, 90%", "20%, 80%", "30%, 50%, 70%", "transform"]);
    assert_eq!(
        shake["transform"],
        KeyframeNode::decl("translate3d(-13px, 0, 0)")
    );
    assert_eq!(shake["30%, 50%, 70%"], KeyframeNode::Block(Default::default()));

    let misplaced = theme.keyframes["40%, 60%"].as_block().unwrap();
    assert_eq!(
        misplaced["transform"],
        KeyframeNode::decl("translate3d(4px, 0, 0)")
    );
}

#[test]
fn test_malformed_shake_is_flagged() {
    let issues = lint_theme(&resolved_fixture());
    assert_eq!(
        issues,
        vec![
            ThemeIssue::EmptyStop {
                animation: "shake".into(),
                selector: "30%, 50%, 70%".into(),
            },
            ThemeIssue::StrayDeclaration {
                animation: "shake".into(),
                property: "transform".into(),
            },
            ThemeIssue::MisplacedStop {
                selector: "40%, 60%".into(),
            },
        ]
    );
    assert!(issues[1].to_string().contains("keyframes.shake"));
}

#[test]
fn test_unknown_keyframes_flagged() {
    let section: ThemeSection = serde_json::from_value(json!({
        "extend": { "animation": { "wiggle": "wiggle 1s ease-in-out infinite" } }
    }))
    .unwrap();
    let theme = resolve_theme(&Theme::default(), &section).unwrap();
    assert_eq!(
        lint_theme(&theme),
        vec![ThemeIssue::UnknownKeyframes {
            animation: "wiggle".into(),
            name: "wiggle".into(),
        }]
    );
}

#[test]
fn test_direct_category_replaces_defaults() {
    let section: ThemeSection = serde_json::from_value(json!({
        "colors": { "brand": "#123456" },
        "extend": { "colors": { "accent": "tomato" } }
    }))
    .unwrap();
    let theme = resolve_theme(&Theme::default(), &section).unwrap();
    let names: Vec<&str> = theme.colors.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["brand", "accent"]);
    // untouched categories keep their defaults
    assert_eq!(theme.animation, Theme::default().animation);
}

#[test]
fn test_extend_replaces_whole_token() {
    let section: ThemeSection = serde_json::from_value(json!({
        "extend": { "colors": { "blue": { "950": "#0b1020" } } }
    }))
    .unwrap();
    let theme = resolve_theme(&Theme::default(), &section).unwrap();
    assert_eq!(theme.color("blue.950"), Some("#0b1020"));
    assert_eq!(theme.color("blue.500"), None);
}

#[test]
fn test_invalid_color_rejects_section() {
    let section: ThemeSection = serde_json::from_value(json!({
        "extend": { "colors": { "amber": "#FFBF0" } }
    }))
    .unwrap();
    let err = resolve_theme(&Theme::default(), &section).unwrap_err();
    match err {
        ThemeConfigError::InvalidColor { key, value } => {
            assert_eq!(key, "theme.extend.colors.amber");
            assert_eq!(value, "#FFBF0");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_other_categories_extend_and_replace() {
    let mut base = Theme::default();
    base.other.insert("spacing".into(), json!({ "1": "0.25rem", "2": "0.5rem" }));
    base.other.insert("fontFamily".into(), json!({ "sans": ["Inter"] }));

    let section: ThemeSection = serde_json::from_value(json!({
        "fontFamily": { "mono": ["Fira Code"] },
        "extend": { "spacing": { "2": "0.6rem", "128": "32rem" } }
    }))
    .unwrap();
    let theme = resolve_theme(&base, &section).unwrap();

    assert_eq!(
        theme.other["spacing"],
        json!({ "1": "0.25rem", "2": "0.6rem", "128": "32rem" })
    );
    assert_eq!(theme.other["fontFamily"], json!({ "mono": ["Fira Code"] }));
}

#[test]
fn test_numeric_keyframe_values() {
    let section: ThemeSection = serde_json::from_value(json!({
        "extend": { "keyframes": { "fade": { "from": { "opacity": 0 }, "to": { "opacity": 1 } } } }
    }))
    .unwrap();
    let theme = resolve_theme(&Theme::default(), &section).unwrap();
    let fade = theme.keyframes["fade"].as_block().unwrap();
    let from = fade["from"].as_block().unwrap();
    assert_eq!(from["opacity"].as_declaration().as_deref(), Some("0"));
}

#[test]
fn test_flat_colors_collapse_default_key() {
    let section: ThemeSection = serde_json::from_value(json!({
        "colors": {
            "primary": { "DEFAULT": "#111", "light": "#eee" },
            "amber": "#FFBF00"
        }
    }))
    .unwrap();
    let theme = resolve_theme(&Theme::default(), &section).unwrap();
    assert_eq!(
        theme.flat_colors(),
        vec![
            ("primary".to_string(), "#111"),
            ("primary-light".to_string(), "#eee"),
            ("amber".to_string(), "#FFBF00"),
        ]
    );
    assert_eq!(theme.color("primary"), Some("#111"));
}

#[test]
fn test_theme_serialization_keeps_order() {
    let theme = resolved_fixture();
    let json = serde_json::to_string(&theme).unwrap();
    let deserialized: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, theme);
}
