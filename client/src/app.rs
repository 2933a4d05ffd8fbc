//! Root shell and application component.
//!
//! The shell is rendered only on the server and commits to the persisted
//! theme class on `<html>`. `App` runs on both sides: it builds the one
//! `ThemeContext` for the page, starts watching the OS color scheme after
//! hydration, and keeps the root class in sync with the resolved theme.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use themes::{Subscription, Theme, server_render_class};

use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::theme::ThemeContext;
use crate::util::color_scheme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let persisted = initial_persisted();
    let class = server_render_class(persisted.as_ref()).unwrap_or_default().to_owned();
    let pref = persisted.map(|t| t.to_string()).unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en" class=class data-theme-pref=pref>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1, minimum-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Persisted theme for this render.
///
/// On the server it comes from the request extension set by the cookie
/// middleware. In the browser it is read back from the attribute the shell
/// rendered, and coerced again since the DOM is not trusted.
fn initial_persisted() -> Option<Theme> {
    #[cfg(feature = "ssr")]
    {
        use_context::<http::request::Parts>()
            .and_then(|parts| parts.extensions.get::<themes::PersistedTheme>().cloned())
            .and_then(|persisted| persisted.0)
    }
    #[cfg(not(feature = "ssr"))]
    {
        crate::state::theme::coerce(color_scheme::read_persisted_attr().as_deref())
    }
}

/// Subscribe to OS color-scheme changes once mounted in the browser.
///
/// The subscription is released when the owning scope is cleaned up, so a
/// remount never leaves a stale listener behind.
fn watch_color_scheme(theme: ThemeContext) {
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move || {
        let source = color_scheme::platform_source();
        theme.set_os_preference(source.current());
        let sub = source.subscribe(Box::new(move |os| theme.set_os_preference(os)));
        subscription.set_value(Some(sub));
    });

    on_cleanup(move || {
        subscription.try_update_value(|slot| {
            if let Some(mut sub) = slot.take() {
                sub.cancel();
            }
        });
    });
}

/// Root application component.
///
/// Owns the page's theme handle and passes it to routes as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::new(initial_persisted());
    watch_color_scheme(theme);

    Effect::new(move || {
        color_scheme::apply_root_class(&theme.resolved());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/perfect-themes.css"/>
        <Link rel="icon" href="/favicon.svg" type_="image/svg+xml"/>
        <Link rel="icon" href="/favicon-dark.svg" type_="image/svg+xml" media="(prefers-color-scheme: dark)"/>
        <Title text="The perfect dark mode with Leptos"/>

        <Router>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=move || view! { <HomePage theme=theme/> }/>
                </Routes>
            </main>
        </Router>
    }
}
