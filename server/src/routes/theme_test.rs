use super::*;
use crate::state::test_helpers;
use axum::http::header::{LOCATION, SET_COOKIE};

fn set_cookies(resp: &Response) -> Vec<Cookie<'static>> {
    resp.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|raw| Cookie::parse(raw.to_owned()).ok())
        .collect()
}

fn change(theme: Option<&str>, url: Option<&str>) -> ThemeChange {
    ThemeChange { theme: theme.map(str::to_owned), url: url.map(str::to_owned) }
}

// =============================================================================
// safe_return_path
// =============================================================================

#[test]
fn safe_return_path_accepts_local_paths() {
    assert_eq!(safe_return_path(Some("/")), "/");
    assert_eq!(safe_return_path(Some("/posts/themes?draft=1")), "/posts/themes?draft=1");
}

#[test]
fn safe_return_path_rejects_offsite_and_missing() {
    for raw in [
        "//evil.example",
        "/\\evil.example",
        "https://evil.example/",
        "posts",
        "",
        "/\t/evil.example/",
        "/\n/evil.example/",
        "/\r\n/evil.example/",
        "/posts\u{7f}",
    ] {
        assert_eq!(safe_return_path(Some(raw)), "/", "expected / for {raw:?}");
    }
    assert_eq!(safe_return_path(None), "/");
}

// =============================================================================
// theme_cookie
// =============================================================================

#[test]
fn theme_cookie_stores_identifier_for_a_year() {
    let cookie = theme_cookie(Some(&Theme::DARK), CookieSettings::default());
    assert_eq!(cookie.name(), THEME_COOKIE);
    assert_eq!(cookie.value(), "dark");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(31_536_000)));
    assert_ne!(cookie.http_only(), Some(true));
    assert_ne!(cookie.secure(), Some(true));
}

#[test]
fn theme_cookie_unset_expires_immediately() {
    let cookie = theme_cookie(None, CookieSettings::default());
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

#[test]
fn theme_cookie_honors_secure_setting() {
    let settings = CookieSettings { secure: true, ..CookieSettings::default() };
    assert_eq!(theme_cookie(Some(&Theme::LIGHT), settings).secure(), Some(true));
}

// =============================================================================
// persisted_from_jar
// =============================================================================

#[test]
fn persisted_from_jar_coerces_cookie_value() {
    let catalog = test_helpers::test_app_state().catalog;
    let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "christmas"));
    assert_eq!(persisted_from_jar(&jar, catalog).expect("member"), "christmas");

    let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "pink"));
    assert_eq!(persisted_from_jar(&jar, catalog), None);

    assert_eq!(persisted_from_jar(&CookieJar::new(), catalog), None);
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn submit_form_sets_cookie_and_redirects_back() {
    let resp = submit_form(
        State(test_helpers::test_app_state()),
        CookieJar::new(),
        Ok(Form(change(Some("dark"), Some("/posts?x=1")))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/posts?x=1");
    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name(), "theme");
    assert_eq!(cookies[0].value(), "dark");
}

#[tokio::test]
async fn submit_form_unknown_theme_clears_cookie() {
    let resp = submit_form(
        State(test_helpers::test_app_state()),
        CookieJar::new().add(Cookie::new(THEME_COOKIE, "dark")),
        Ok(Form(change(Some("pink"), None))),
    )
    .await;

    assert_eq!(resp.headers()[LOCATION], "/");
    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].value(), "");
    assert_eq!(cookies[0].max_age(), Some(Duration::ZERO));
}

#[tokio::test]
async fn submit_form_empty_theme_resets() {
    let resp = submit_form(
        State(test_helpers::test_app_state()),
        CookieJar::new(),
        Ok(Form(change(Some(""), Some("/")))),
    )
    .await;
    let cookies = set_cookies(&resp);
    assert_eq!(cookies[0].max_age(), Some(Duration::ZERO));
}

#[tokio::test]
async fn submit_form_never_redirects_offsite() {
    let resp = submit_form(
        State(test_helpers::test_app_state()),
        CookieJar::new(),
        Ok(Form(change(Some("light"), Some("//evil.example/")))),
    )
    .await;
    assert_eq!(resp.headers()[LOCATION], "/");
}

#[tokio::test]
async fn submit_form_rejects_control_characters_in_return_path() {
    let resp = submit_form(
        State(test_helpers::test_app_state()),
        CookieJar::new(),
        Ok(Form(change(Some("dark"), Some("/\t/evil.example/")))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");
}

#[tokio::test]
async fn submit_json_answers_no_content() {
    let resp = submit_json(
        State(test_helpers::secure_app_state()),
        CookieJar::new(),
        Ok(Json(change(Some("christmas"), Some("/")))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cookies = set_cookies(&resp);
    assert_eq!(cookies[0].value(), "christmas");
    assert_eq!(cookies[0].secure(), Some(true));
}

#[tokio::test]
async fn submit_json_null_theme_clears_cookie() {
    let resp = submit_json(State(test_helpers::test_app_state()), CookieJar::new(), Ok(Json(change(None, None)))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(set_cookies(&resp)[0].max_age(), Some(Duration::ZERO));
}

#[test]
fn theme_change_deserializes_missing_fields_as_none() {
    let change: ThemeChange = serde_json::from_str("{}").expect("empty object");
    assert!(change.theme.is_none());
    assert!(change.url.is_none());
}
