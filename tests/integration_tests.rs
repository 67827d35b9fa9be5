//! End-to-end tests for the shortcode-to-page pipeline

use favlink::{
    build_css, render_favlink, render_page, Attributes, PageConfig, RenderRequest,
    RequestContext, StyleContext, EDITOR_STYLE, FRONT_END_STYLE,
};
use pretty_assertions::assert_eq;

fn attrs(url: &str, text: &str, size: &str) -> Attributes {
    Attributes::new()
        .with("url", url)
        .with("text", text)
        .with("size", size)
}

#[test]
fn test_auto_sized_link_scenario() {
    let html = render_favlink(&attrs("https://openai.com", "", ""));

    assert!(html.contains(r#"href="https://openai.com""#));
    assert!(html.contains(r#"src="https://icons.duckduckgo.com/ip3/openai.com.ico""#));
    assert!(html.ends_with("/> openai.com</a>"));
    assert!(!html.contains("width=\""));
    assert!(!html.contains("height=\""));
    assert!(html.contains(r#"style="height:1em!important;width:auto!important""#));
}

#[test]
fn test_fixed_size_link_scenario() {
    let html = render_favlink(&attrs("https://a.com", "Click", "24"));

    assert!(html.ends_with("/> Click</a>"));
    assert!(html.contains(r#"width="24" height="24""#));
    assert!(html.contains(r#"style="height:24px;width:24px""#));
}

#[test]
fn test_hostless_urls_render_nothing() {
    for url in ["", "example.com", "relative/path", "http://", "mailto:me@example.com"] {
        let mut ctx = RequestContext::new();
        assert_eq!(ctx.render(&attrs(url, "text", "16")), "", "url {:?}", url);
        assert!(!ctx.needs_styles(), "url {:?}", url);
    }
}

#[test]
fn test_icon_source_uses_host() {
    for url in [
        "https://example.com",
        "http://example.com/deep/path?q=1#frag",
        "https://example.com:8443/",
    ] {
        let html = render_favlink(&attrs(url, "", ""));
        assert!(
            html.contains(r#"src="https://icons.duckduckgo.com/ip3/example.com.ico""#),
            "url {:?}",
            url
        );
    }
}

#[test]
fn test_link_text_defaults_to_domain() {
    let html = render_favlink(&attrs("https://docs.rs/crate", "", ""));
    assert!(html.ends_with("/> docs.rs</a>"));

    let html = render_favlink(&attrs("https://docs.rs/crate", "Docs & more", ""));
    assert!(html.ends_with("/> Docs &amp; more</a>"));
}

#[test]
fn test_auto_size_inputs() {
    for size in ["0", "-5", "", "abc"] {
        let html = render_favlink(&attrs("https://a.com", "", size));
        assert!(!html.contains("width=\""), "size {:?}", size);
        assert!(html.contains("height:1em!important"), "size {:?}", size);
    }
}

#[test]
fn test_fixed_size_input() {
    let html = render_favlink(&attrs("https://a.com", "", "32"));
    assert!(html.contains(r#"width="32" height="32""#));
    assert!(html.contains("height:32px;width:32px"));
}

#[test]
fn test_render_is_byte_identical_across_calls() {
    let mut ctx = RequestContext::new();
    let request = RenderRequest::new("https://a.com").with_text("A").with_size(12);
    let first = ctx.render_request(&request);
    let second = ctx.render_request(&request);
    assert_eq!(first, second);
    assert_eq!(ctx.rendered_count(), 2);
}

#[test]
fn test_contexts_differ_only_by_prefix() {
    let front = build_css(StyleContext::FrontEnd);
    let editor = build_css(StyleContext::Editor);
    assert_eq!(editor.replace(".editor-styles-wrapper ", ""), front);
}

#[test]
fn test_full_page() {
    let content = concat!(
        "<p>[favlink url=\"https://openai.com\"] builds models.</p>\n",
        "<p class=\"has-large-font-size\">See [favlink url='https://a.com' text=\"Click\" size=24/].</p>\n",
        "<p>Literal: [[favlink url=\"https://b.com\"]]</p>\n",
    );
    let config = PageConfig::new().with_editor_styles(true);
    let page = render_page(content, &config).expect("Should render");

    assert_eq!(page.content.matches("class=\"favlink\"").count(), 2);
    assert!(page.content.contains("<p>Literal: [favlink url=\"https://b.com\"]</p>"));
    assert!(page.content.contains("/> Click</a>.</p>"));

    assert_eq!(
        page.styles.get(FRONT_END_STYLE),
        Some(build_css(StyleContext::FrontEnd).as_str())
    );
    assert_eq!(
        page.styles.get(EDITOR_STYLE),
        Some(build_css(StyleContext::Editor).as_str())
    );
}

#[test]
fn test_page_with_only_invalid_links_gets_no_styles() {
    let page = render_page(
        "[favlink url=\"\"] [favlink text=only-text]",
        &PageConfig::new().with_editor_styles(true),
    )
    .expect("Should render");
    assert_eq!(page.content, " ");
    assert!(page.styles.is_empty());
}

#[test]
fn test_styles_emitted_once_for_many_links() {
    let content = "[favlink url=https://a.com] [favlink url=https://b.com] [favlink url=https://c.com]";
    let page = render_page(content, &PageConfig::default()).expect("Should render");
    let html = page.styles.to_html();
    assert_eq!(html.matches("<style").count(), 1);
    assert_eq!(html.matches(".favlink{").count(), 1);
}

#[test]
fn test_parse_error_reports_position() {
    let content = "intro [favlink url=\"https://a.com] outro";
    let page = render_page(content, &PageConfig::default()).expect("Should render");
    assert_eq!(page.content, content);
    assert!(page.styles.is_empty());
    assert_eq!(page.diagnostics.len(), 1);
    let span = page.diagnostics[0].span();
    assert!(span.start >= 14 && span.end <= 34, "span {:?}", span);
}

#[test]
fn test_valid_link_survives_broken_neighbour() {
    let content = "<p>[favlink url=https://a.com text=A]</p>\n<p>[favlink url='https://b.com]</p>";
    let page = render_page(content, &PageConfig::default()).expect("Should render");
    assert!(page.content.contains(r#"href="https://a.com""#));
    assert!(page.content.contains("> A</a></p>"));
    assert!(page.content.ends_with("<p>[favlink url='https://b.com]</p>"));
    assert!(!page.content.contains("ip3/b.com.ico"));
    assert_eq!(page.diagnostics.len(), 1);
    assert!(page.styles.get(FRONT_END_STYLE).is_some());
}
