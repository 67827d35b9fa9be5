//! Snapshot tests for the generated stylesheets
//!
//! Themes and the block editor target these exact selectors, so any change
//! to the rule text must be deliberate.

use favlink::render::css_rules;
use favlink::{build_css, StyleContext};

#[test]
fn test_front_end_rules_snapshot() {
    insta::assert_snapshot!(css_rules(StyleContext::FrontEnd).join("\n"), @r"
    .favlink{display:inline-flex;align-items:baseline;gap:.35em;vertical-align:baseline;max-width:100%;text-indent:0!important;margin:0!important;padding:0!important;line-height:inherit}
    .favlink img{flex:0 0 auto;height:1em!important;width:auto!important;vertical-align:baseline}
    p > .favlink:first-child{margin-left:0!important;text-indent:0!important}
    .has-small-font-size .favlink img{height:var(--wp--preset--font-size--small)!important}
    .has-medium-font-size .favlink img{height:var(--wp--preset--font-size--medium)!important}
    .has-large-font-size .favlink img{height:var(--wp--preset--font-size--large)!important}
    .has-x-large-font-size .favlink img{height:var(--wp--preset--font-size--x-large)!important}
    .has-xx-large-font-size .favlink img{height:var(--wp--preset--font-size--xx-large)!important}
    ");
}

#[test]
fn test_editor_rules_snapshot() {
    insta::assert_snapshot!(css_rules(StyleContext::Editor).join("\n"), @r"
    .editor-styles-wrapper .favlink{display:inline-flex;align-items:baseline;gap:.35em;vertical-align:baseline;max-width:100%;text-indent:0!important;margin:0!important;padding:0!important;line-height:inherit}
    .editor-styles-wrapper .favlink img{flex:0 0 auto;height:1em!important;width:auto!important;vertical-align:baseline}
    .editor-styles-wrapper p > .favlink:first-child{margin-left:0!important;text-indent:0!important}
    .editor-styles-wrapper .has-small-font-size .favlink img{height:var(--wp--preset--font-size--small)!important}
    .editor-styles-wrapper .has-medium-font-size .favlink img{height:var(--wp--preset--font-size--medium)!important}
    .editor-styles-wrapper .has-large-font-size .favlink img{height:var(--wp--preset--font-size--large)!important}
    .editor-styles-wrapper .has-x-large-font-size .favlink img{height:var(--wp--preset--font-size--x-large)!important}
    .editor-styles-wrapper .has-xx-large-font-size .favlink img{height:var(--wp--preset--font-size--xx-large)!important}
    ");
}

#[test]
fn test_built_css_is_rules_concatenated() {
    for context in [StyleContext::FrontEnd, StyleContext::Editor] {
        let css = build_css(context);
        assert_eq!(css, css_rules(context).concat());
        assert!(!css.contains('\n'));
        assert_eq!(css.matches('{').count(), 8);
    }
}
