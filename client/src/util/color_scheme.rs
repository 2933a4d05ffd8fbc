//! Browser color-scheme detection and root theme class application.
//!
//! Observes `matchMedia("(prefers-color-scheme: dark)")` and writes the
//! resolved theme onto the `<html>` element. Requires a browser environment;
//! SSR and native test builds fall back to [`UndetectedColorScheme`] and
//! no-op writes.
//!
//! TRADE-OFFS
//! ==========
//! The server has no access to the OS preference, so the first paint relies
//! on the stylesheet's media query until these helpers take over after
//! hydration.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use themes::{ColorSchemeSource, Theme};
#[cfg(not(feature = "hydrate"))]
use themes::UndetectedColorScheme;

/// Attribute on `<html>` carrying the persisted theme chosen by the server.
pub const PERSISTED_ATTR: &str = "data-theme-pref";

/// The color-scheme source for the current platform.
pub fn platform_source() -> Box<dyn ColorSchemeSource> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(browser::MediaQueryColorScheme::new())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(UndetectedColorScheme)
    }
}

/// Set the `class` attribute on the `<html>` element.
pub fn apply_root_class(theme: &Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(e) = el.set_attribute("class", theme.as_str()) {
                log::warn!("failed to apply theme class: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Read the server-rendered persisted theme attribute back from `<html>`.
///
/// The raw value is returned untrusted; callers coerce it.
pub fn read_persisted_attr() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(PERSISTED_ATTR))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use themes::{ColorSchemeSource, DARK_SCHEME_QUERY, OsPreference, Subscription};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    /// `matchMedia`-backed source. Holds `None` when the window or the
    /// media query API is missing.
    pub struct MediaQueryColorScheme {
        query: Option<MediaQueryList>,
    }

    impl MediaQueryColorScheme {
        pub fn new() -> Self {
            let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
            Self { query }
        }
    }

    impl Default for MediaQueryColorScheme {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ColorSchemeSource for MediaQueryColorScheme {
        fn current(&self) -> OsPreference {
            self.query
                .as_ref()
                .map_or(OsPreference::Unknown, |q| OsPreference::from_dark_match(q.matches()))
        }

        fn subscribe(&self, mut on_change: Box<dyn FnMut(OsPreference)>) -> Subscription {
            let Some(query) = self.query.clone() else {
                return Subscription::inert();
            };

            let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
                on_change(OsPreference::from_dark_match(ev.matches()));
            });
            if query
                .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("color scheme listener registration failed");
                return Subscription::inert();
            }

            Subscription::new(move || {
                if let Err(e) = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                    log::warn!("color scheme listener removal failed: {e:?}");
                }
                drop(listener);
            })
        }
    }
}
