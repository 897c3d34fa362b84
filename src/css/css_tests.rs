use super::*;
use crate::config::parse_config;

const FIXTURE_JSON: &str = include_str!("../../fixtures/tailwind.config.json");

fn fixture_theme() -> Theme {
    parse_config(FIXTURE_JSON, "fixture")
        .unwrap()
        .resolved_theme()
        .unwrap()
}

#[test]
fn test_extract_candidates() {
    let candidates = extract_candidates(
        r#"view! { <button class="animate-shake bg-amber px-4">"Go"</button> }"#,
    );
    assert!(candidates.contains("animate-shake"));
    assert!(candidates.contains("bg-amber"));
    assert!(candidates.contains("px-4"));
    assert!(!candidates.contains("button"));
    assert!(!candidates.contains("Go"));
}

#[test]
fn test_extract_candidates_strips_variants() {
    let candidates = extract_candidates(r#"<p class="hover:text-red-500">"#);
    assert!(candidates.contains("text-red-500"));
}

#[test]
fn test_render_shake_and_colors() {
    let theme = fixture_theme();
    let candidates =
        extract_candidates(r#"<div class="animate-shake bg-amber text-transparent"></div>"#);

    let expected = "\
@keyframes shake {
  10%, 90% {
    transform: translate3d(-15px, 0, 0);
  }
  20%, 80% {
    transform: translate3d(9px, 0, 0);
  }
  30%, 50%, 70% {
  }
}
.animate-shake {
  animation: shake 0.15s cubic-bezier(.36,.07,.19,.97) 2;
}
.text-transparent {
  color: transparent;
}
.bg-amber {
  background-color: #FFBF00;
}
";
    assert_eq!(render(&theme, &candidates), expected);
}

#[test]
fn test_render_skips_misplaced_entries() {
    let theme = fixture_theme();
    let css = render(&theme, &extract_candidates("animate-shake"));
    assert!(!css.contains("-13px"));
    assert!(!css.contains("40%, 60%"));
}

#[test]
fn test_render_kebab_cases_properties() {
    let theme = Theme::default();
    let css = render(&theme, &extract_candidates("animate-bounce"));
    assert!(css.contains("@keyframes bounce {"));
    assert!(css.contains("animation-timing-function: cubic-bezier(0.8,0,1,1);"));
    assert!(css.contains(".animate-bounce {\n  animation: bounce 1s infinite;\n}"));
}

#[test]
fn test_render_nested_palette() {
    let theme = Theme::default();
    let css = render(&theme, &extract_candidates("border-blue-500"));
    assert_eq!(css, ".border-blue-500 {\n  border-color: #3b82f6;\n}\n");
}

#[test]
fn test_render_nothing_without_candidates() {
    let theme = fixture_theme();
    assert_eq!(render(&theme, &Candidates::new()), "");
    assert_eq!(render(&theme, &extract_candidates("animate-wobble bg-amber-500")), "");
}

#[test]
fn test_animate_none_renders_no_keyframes() {
    let theme = Theme::default();
    let css = render(&theme, &extract_candidates("animate-none"));
    assert_eq!(css, ".animate-none {\n  animation: none;\n}\n");
}

#[test]
fn test_kebab_case() {
    assert_eq!(kebab_case("transform"), "transform");
    assert_eq!(kebab_case("animationTimingFunction"), "animation-timing-function");
    assert_eq!(kebab_case("--tw-rotate"), "--tw-rotate");
}
