//! Blog post page explaining cookie-backed themes.

use std::sync::OnceLock;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeContext;
use crate::util::markdown::render_html;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

const POST_MARKDOWN: &str = include_str!("../../content/perfect-themes.md");

/// Rendered article body; the markdown is bundled, so render it once.
fn post_html() -> &'static str {
    static VALUE: OnceLock<String> = OnceLock::new();
    VALUE.get_or_init(|| render_html(POST_MARKDOWN))
}

#[component]
pub fn HomePage(theme: ThemeContext) -> impl IntoView {
    view! {
        <header class="page__header">
            <h1>"Perfect Themes with Leptos"</h1>
            <ThemeToggle theme=theme/>
        </header>
        <article class="post" inner_html=post_html()></article>
    }
}
