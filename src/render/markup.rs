//! Favicon link markup generation

use super::escape::{escape_html, escape_url};
use super::request::{RenderRequest, SizeDecision};

/// Class on the anchor; theme and generated CSS target `.favlink img`
pub const CLASS_NAME: &str = "favlink";

/// Output of a single render
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    /// Anchor markup, or empty when nothing should be shown
    pub markup: String,
    /// Whether the page needs the favlink stylesheet for this output
    pub needs_styles: bool,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// Render one favicon link.
///
/// A URL without a host renders nothing and does not ask for styles.
pub fn render(request: &RenderRequest) -> Rendered {
    let Some(icon) = request.resolve_icon() else {
        return Rendered::default();
    };

    let link_text = if request.text.is_empty() {
        &icon.domain
    } else {
        &request.text
    };
    let size = request.size_decision();

    let markup = format!(
        r#"<a href="{}" class="{}" rel="noopener noreferrer" target="_blank"><img loading="lazy" decoding="async" fetchpriority="low" src="{}" alt=""{}{} /> {}</a>"#,
        escape_url(&request.url),
        CLASS_NAME,
        escape_url(&icon.icon_src),
        dimension_attrs(size),
        inline_style(size),
        escape_html(link_text)
    );

    Rendered {
        markup,
        needs_styles: true,
    }
}

fn dimension_attrs(size: SizeDecision) -> String {
    match size {
        SizeDecision::Auto => String::new(),
        SizeDecision::Fixed(px) => format!(r#" width="{px}" height="{px}""#),
    }
}

/// Inline style wins over theme `!important` rules on `.favlink img`
fn inline_style(size: SizeDecision) -> String {
    match size {
        SizeDecision::Auto => r#" style="height:1em!important;width:auto!important""#.to_string(),
        SizeDecision::Fixed(px) => format!(r#" style="height:{px}px;width:{px}px""#),
    }
}
