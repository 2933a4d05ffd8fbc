use super::*;
use crate::catalog::ThemeCatalog;

fn christmas() -> Theme {
    ThemeCatalog::new(["light", "dark", "christmas"])
        .expect("valid catalog")
        .coerce(Some("christmas"))
        .expect("member")
}

fn sources(override_theme: Option<Theme>, persisted: Option<Theme>, os: OsPreference) -> ThemeSources {
    ThemeSources { override_theme, persisted, os }
}

#[test]
fn override_beats_persisted_and_os() {
    let s = sources(Some(Theme::DARK), Some(Theme::LIGHT), OsPreference::Light);
    assert_eq!(resolve(&s), Theme::DARK);
}

#[test]
fn persisted_beats_os() {
    let s = sources(None, Some(Theme::LIGHT), OsPreference::Dark);
    assert_eq!(resolve(&s), Theme::LIGHT);
}

#[test]
fn os_used_when_nothing_chosen() {
    let s = sources(None, None, OsPreference::Dark);
    assert_eq!(resolve(&s), Theme::DARK);
}

#[test]
fn unknown_os_falls_back_to_light() {
    let s = sources(None, None, OsPreference::Unknown);
    assert_eq!(resolve(&s), Theme::LIGHT);
    assert_eq!(resolve(&ThemeSources::default()), FALLBACK_THEME);
}

#[test]
fn custom_theme_survives_resolution() {
    let s = sources(None, Some(christmas()), OsPreference::Dark);
    assert_eq!(resolve(&s), "christmas");
    let s = sources(Some(christmas()), Some(Theme::DARK), OsPreference::Dark);
    assert_eq!(resolve(&s), "christmas");
}

#[test]
fn resolve_always_lands_in_catalog() {
    let catalog = ThemeCatalog::new(["light", "dark", "christmas"]).expect("valid catalog");
    let choices: Vec<Option<Theme>> = std::iter::once(None)
        .chain(catalog.themes().iter().cloned().map(Some))
        .collect();
    let prefs = [OsPreference::Light, OsPreference::Dark, OsPreference::Unknown];

    for o in &choices {
        for p in &choices {
            for os in prefs {
                let resolved = resolve(&sources(o.clone(), p.clone(), os));
                assert!(catalog.contains(resolved.as_str()), "{resolved} not in catalog");
            }
        }
    }
}

#[test]
fn server_render_class_only_commits_to_persisted_choice() {
    assert_eq!(server_render_class(None), None);
    assert_eq!(server_render_class(Some(&Theme::DARK)), Some("dark"));
    let c = christmas();
    assert_eq!(server_render_class(Some(&c)), Some("christmas"));
}
