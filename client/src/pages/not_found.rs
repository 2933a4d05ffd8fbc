//! Fallback view for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to the post"</a>
            </p>
        </section>
    }
}
