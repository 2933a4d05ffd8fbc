//! Markdown rendering for long-form page content.

use pulldown_cmark::{Options, Parser, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render trusted, bundled markdown to HTML.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
