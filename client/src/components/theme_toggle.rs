//! Theme switcher forms: toggle light/dark, pick the custom theme, reset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each control is a real `<form>` posting to the cookie endpoint, so it
//! works before hydration and without JavaScript. Once hydrated, submits are
//! intercepted: the choice is applied immediately as an override and saved
//! in the background.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use themes::{RETURN_URL_FIELD, THEME_FIELD};

use crate::net::api::THEME_FORM_ACTION;
use crate::state::theme::{CUSTOM_THEME, ThemeContext, coerce};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Join a router pathname and query string into a return path.
pub(crate) fn return_path(pathname: &str, search: &str) -> String {
    let path = if pathname.is_empty() { "/" } else { pathname };
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}

/// Human label for the current state shown next to the controls.
pub(crate) fn status_label(resolved: &str, chosen: bool) -> String {
    if chosen {
        format!("Using the {resolved} theme (your choice)")
    } else {
        format!("Using the {resolved} theme (following your system)")
    }
}

/// Apply a submitted raw value locally and persist it in the background.
fn choose(theme: ThemeContext, raw: &str, url: String) {
    let requested = coerce(Some(raw));
    theme.set_override(requested.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::persist_theme(requested.as_ref(), &url).await {
            log::warn!("{e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (requested, url);
    }
}

/// Theme controls for the page header.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    let location = use_location();
    let return_url = move || return_path(&location.pathname.get(), &location.search.get());

    let on_toggle = move |ev: SubmitEvent| {
        ev.prevent_default();
        let target = theme.toggle_target();
        choose(theme, target.as_str(), return_url());
    };
    let on_christmas = move |ev: SubmitEvent| {
        ev.prevent_default();
        choose(theme, CUSTOM_THEME, return_url());
    };
    let on_reset = move |ev: SubmitEvent| {
        ev.prevent_default();
        choose(theme, "", return_url());
    };

    view! {
        <div class="theme-toggle">
            <form method="post" action=THEME_FORM_ACTION on:submit=on_toggle>
                <input type="hidden" name=THEME_FIELD value=move || theme.toggle_target().to_string()/>
                <input type="hidden" name=RETURN_URL_FIELD value=return_url/>
                <button class="theme-toggle__button toggle" type="submit">
                    "Toggle Theme"
                </button>
            </form>
            <form method="post" action=THEME_FORM_ACTION on:submit=on_christmas>
                <input type="hidden" name=THEME_FIELD value=CUSTOM_THEME/>
                <input type="hidden" name=RETURN_URL_FIELD value=return_url/>
                <button class="theme-toggle__button" type="submit">
                    "Use Christmas Theme"
                </button>
            </form>
            <form method="post" action=THEME_FORM_ACTION on:submit=on_reset>
                <input type="hidden" name=THEME_FIELD value=""/>
                <input type="hidden" name=RETURN_URL_FIELD value=return_url/>
                <button class="theme-toggle__button" type="submit">
                    "Reset Theme Cookie"
                </button>
            </form>
            <span class="theme-toggle__status">
                {move || status_label(theme.resolved().as_str(), theme.effective_choice().is_some())}
            </span>
        </div>
    }
}
