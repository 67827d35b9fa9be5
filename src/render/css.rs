//! Companion CSS for rendered favicon links
//!
//! The rule set is fixed: it covers every instance a page may contain, so it
//! does not depend on which sizing variants were actually rendered.

use super::markup::CLASS_NAME;

/// Wrapper the block editor puts around its canvas
pub const EDITOR_WRAPPER: &str = ".editor-styles-wrapper";

/// Where the stylesheet will be injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleContext {
    /// The live page
    FrontEnd,
    /// The block editor canvas
    Editor,
}

impl StyleContext {
    /// Prefix put in front of every selector
    pub fn selector_prefix(self) -> String {
        match self {
            StyleContext::FrontEnd => String::new(),
            StyleContext::Editor => format!("{} ", EDITOR_WRAPPER),
        }
    }
}

/// Named font-size presets offered by the editor's typography panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyPreset {
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl TypographyPreset {
    pub const ALL: [TypographyPreset; 5] = [
        TypographyPreset::Small,
        TypographyPreset::Medium,
        TypographyPreset::Large,
        TypographyPreset::XLarge,
        TypographyPreset::XxLarge,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            TypographyPreset::Small => "small",
            TypographyPreset::Medium => "medium",
            TypographyPreset::Large => "large",
            TypographyPreset::XLarge => "x-large",
            TypographyPreset::XxLarge => "xx-large",
        }
    }

    /// Class the editor adds to blocks using this preset
    pub fn class_name(self) -> String {
        format!("has-{}-font-size", self.slug())
    }

    /// Custom property holding the preset's font size
    pub fn css_var(self) -> String {
        format!("--wp--preset--font-size--{}", self.slug())
    }
}

/// The individual rules, in emission order
pub fn css_rules(context: StyleContext) -> Vec<String> {
    let p = context.selector_prefix();
    let c = CLASS_NAME;

    let mut rules = vec![
        // Keep icon and text together; undo theme indentation on links
        format!(
            "{p}.{c}{{display:inline-flex;align-items:baseline;gap:.35em;vertical-align:baseline;max-width:100%;text-indent:0!important;margin:0!important;padding:0!important;line-height:inherit}}"
        ),
        format!(
            "{p}.{c} img{{flex:0 0 auto;height:1em!important;width:auto!important;vertical-align:baseline}}"
        ),
        format!("{p}p > .{c}:first-child{{margin-left:0!important;text-indent:0!important}}"),
    ];

    rules.extend(TypographyPreset::ALL.iter().map(|preset| {
        format!(
            "{p}.{} .{c} img{{height:var({})!important}}",
            preset.class_name(),
            preset.css_var()
        )
    }));

    rules
}

/// Build the stylesheet text for `context`
pub fn build_css(context: StyleContext) -> String {
    css_rules(context).concat()
}
