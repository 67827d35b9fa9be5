//! Favlink - favicon links from shortcodes
//!
//! This library expands `[favlink url="..." text="..." size="..."]` shortcodes
//! into a favicon image followed by link text, and produces the companion CSS
//! that keeps the icon sized relative to the surrounding text, both on the
//! live page and inside the block editor canvas.
//!
//! # Example
//!
//! ```rust
//! use favlink::{render_page, PageConfig};
//!
//! let page = render_page(
//!     r#"<p>Try [favlink url="https://openai.com"] today.</p>"#,
//!     &PageConfig::default(),
//! ).unwrap();
//!
//! assert!(page.content.contains(r#"href="https://openai.com""#));
//! assert!(page.styles.to_html().contains("favlink-style-inline-css"));
//! ```

pub mod assets;
pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod shortcode;

pub use assets::{InlineStyles, StyleHandle, StyleSink, EDITOR_STYLE, FRONT_END_STYLE, VERSION};
pub use config::Settings;
pub use context::RequestContext;
pub use error::{ConfigError, ParseError};
pub use render::{build_css, RenderRequest, Rendered, SizeDecision, StyleContext};
pub use shortcode::{parse, parse_recovering, Attributes, Document, Segment};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during the page pipeline
///
/// Malformed shortcodes are not errors here; they are reported through
/// [`Page::diagnostics`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error in the page configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration for the page pipeline
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Shortcode tag name
    pub tag: String,
    /// Emit the live-page stylesheet
    pub front_end_styles: bool,
    /// Emit the block editor stylesheet
    pub editor_styles: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for PageConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            tag: settings.tag.clone(),
            front_end_styles: settings.front_end_styles,
            editor_styles: settings.editor_styles,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shortcode tag name
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Enable or disable the live-page stylesheet
    pub fn with_front_end_styles(mut self, enabled: bool) -> Self {
        self.front_end_styles = enabled;
        self
    }

    /// Enable or disable the block editor stylesheet
    pub fn with_editor_styles(mut self, enabled: bool) -> Self {
        self.editor_styles = enabled;
        self
    }
}

/// A rendered page: expanded content plus the styles it asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub content: String,
    pub styles: InlineStyles,
    /// Syntax errors of shortcodes that were left as literal text
    pub diagnostics: Vec<ParseError>,
}

/// Expand every shortcode in `content` and collect the required styles
///
/// This runs both request phases in order: content transformation through a
/// fresh [`RequestContext`], then style collection for each enabled context.
/// A malformed shortcode is kept as written and reported in
/// [`Page::diagnostics`]; the rest of the page still renders.
///
/// # Example
///
/// ```rust
/// use favlink::{render_page, PageConfig, EDITOR_STYLE, FRONT_END_STYLE};
///
/// let config = PageConfig::new().with_editor_styles(true);
/// let page = render_page("[favlink url=https://a.com size=24]", &config).unwrap();
///
/// assert!(page.content.contains(r#"width="24" height="24""#));
/// assert!(page.styles.get(FRONT_END_STYLE).is_some());
/// assert!(page.styles.get(EDITOR_STYLE).is_some());
/// ```
pub fn render_page(content: &str, config: &PageConfig) -> Result<Page, RenderError> {
    config::validate_tag(&config.tag)?;
    let (doc, diagnostics) = parse_recovering(content, &config.tag);
    if !diagnostics.is_empty() {
        warn!(
            errors = diagnostics.len(),
            "malformed shortcodes left unexpanded"
        );
    }

    let mut ctx = RequestContext::new();
    let expanded = expand(&doc, &mut ctx);
    debug!(
        shortcodes = doc.shortcodes().count(),
        rendered = ctx.rendered_count(),
        "expanded content"
    );

    let mut styles = InlineStyles::new();
    if config.front_end_styles {
        ctx.enqueue_front_end_styles(&mut styles);
    }
    if config.editor_styles {
        ctx.enqueue_editor_styles(&mut styles);
    }

    Ok(Page {
        content: expanded,
        styles,
        diagnostics,
    })
}

/// Substitute each shortcode in `doc` with its rendered markup
pub fn expand(doc: &Document, ctx: &mut RequestContext) -> String {
    let mut out = String::new();
    for segment in &doc.segments {
        match &segment.node {
            Segment::Text(text) => out.push_str(text),
            Segment::Shortcode(tag) => out.push_str(&ctx.render(&tag.attrs)),
        }
    }
    out
}

/// Render one favicon link from raw attributes, outside any request
///
/// # Example
///
/// ```rust
/// use favlink::{render_favlink, Attributes};
///
/// let html = render_favlink(&Attributes::new().with("url", "https://example.com"));
/// assert!(html.contains("ip3/example.com.ico"));
///
/// assert_eq!(render_favlink(&Attributes::new().with("url", "nope")), "");
/// ```
pub fn render_favlink(attrs: &Attributes) -> String {
    render::render(&RenderRequest::from_attributes(attrs)).markup
}
