use super::*;

#[test]
fn render_html_emits_headings_and_code() {
    let out = render_html("# Title\n\nUse `theme` cookies.");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<code>theme</code>"));
}

#[test]
fn render_html_supports_tables() {
    let out = render_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
}

#[test]
fn render_html_empty_input_is_empty() {
    assert_eq!(render_html(""), "");
}
