//! Per-request render state
//!
//! A page request runs in two phases: shortcodes are expanded first, then
//! assets are collected. [`RequestContext`] carries the "something rendered"
//! flag from the first phase to the second, so styles are only injected on
//! pages that actually show a favicon link.

use tracing::debug;

use crate::assets::{StyleHandle, StyleSink};
use crate::render::{self, build_css, RenderRequest, Rendered, StyleContext};
use crate::shortcode::Attributes;

/// State for one page request; create a fresh one per request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    needs_styles: bool,
    rendered: usize,
    enqueued: Vec<StyleContext>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one link rendered during this request
    pub fn needs_styles(&self) -> bool {
        self.needs_styles
    }

    /// Number of non-empty renders so far
    pub fn rendered_count(&self) -> usize {
        self.rendered
    }

    /// Render a shortcode's raw attributes, returning the substitution text
    pub fn render(&mut self, attrs: &Attributes) -> String {
        self.render_request(&RenderRequest::from_attributes(attrs))
            .markup
    }

    /// Render a typed request and record whether styles are needed
    pub fn render_request(&mut self, request: &RenderRequest) -> Rendered {
        let out = render::render(request);
        if out.needs_styles {
            self.needs_styles = true;
            self.rendered += 1;
        }
        out
    }

    /// Stylesheet text for `context`, or `None` when nothing rendered
    pub fn styles(&self, context: StyleContext) -> Option<String> {
        self.needs_styles.then(|| build_css(context))
    }

    /// Register the stylesheet for `context` with the host, if needed.
    ///
    /// Each context's stylesheet is handed over at most once per request.
    pub fn enqueue_styles(&mut self, context: StyleContext, sink: &mut impl StyleSink) -> bool {
        if self.enqueued.contains(&context) {
            debug!(?context, "styles already enqueued");
            return false;
        }
        let Some(css) = self.styles(context) else {
            debug!(?context, "no favicon links rendered, skipping styles");
            return false;
        };
        let handle = StyleHandle::for_context(context);
        debug!(handle = handle.name, version = handle.version, "enqueueing styles");
        sink.add_inline_style(handle, css);
        self.enqueued.push(context);
        true
    }

    /// Asset phase for the live page
    pub fn enqueue_front_end_styles(&mut self, sink: &mut impl StyleSink) -> bool {
        self.enqueue_styles(StyleContext::FrontEnd, sink)
    }

    /// Asset phase for the block editor canvas
    pub fn enqueue_editor_styles(&mut self, sink: &mut impl StyleSink) -> bool {
        self.enqueue_styles(StyleContext::Editor, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{InlineStyles, EDITOR_STYLE, FRONT_END_STYLE};

    #[test]
    fn test_new_context_needs_no_styles() {
        let ctx = RequestContext::new();
        assert!(!ctx.needs_styles());
        assert_eq!(ctx.styles(StyleContext::FrontEnd), None);
    }

    #[test]
    fn test_styles_enqueued_once_per_context() {
        let mut ctx = RequestContext::new();
        ctx.render(&Attributes::new().with("url", "https://a.com"));

        let mut sink = InlineStyles::new();
        assert!(ctx.enqueue_front_end_styles(&mut sink));
        assert!(!ctx.enqueue_front_end_styles(&mut sink));
        assert!(ctx.enqueue_editor_styles(&mut sink));
        assert!(!ctx.enqueue_editor_styles(&mut sink));

        assert_eq!(sink.get(FRONT_END_STYLE), Some(build_css(StyleContext::FrontEnd).as_str()));
        assert_eq!(sink.get(EDITOR_STYLE), Some(build_css(StyleContext::Editor).as_str()));
    }

    #[test]
    fn test_skipped_enqueue_can_run_after_render() {
        let mut ctx = RequestContext::new();
        let mut sink = InlineStyles::new();
        assert!(!ctx.enqueue_front_end_styles(&mut sink));

        ctx.render(&Attributes::new().with("url", "https://a.com"));
        assert!(ctx.enqueue_front_end_styles(&mut sink));
    }

    #[test]
    fn test_invalid_render_leaves_flag_unset() {
        let mut ctx = RequestContext::new();
        let out = ctx.render(&Attributes::new().with("url", "not a url"));
        assert_eq!(out, "");
        assert!(!ctx.needs_styles());

        let mut sink = InlineStyles::new();
        assert!(!ctx.enqueue_front_end_styles(&mut sink));
        assert!(!ctx.enqueue_editor_styles(&mut sink));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_sets_flag() {
        let mut ctx = RequestContext::new();
        let out = ctx.render(&Attributes::new().with("url", "https://a.com"));
        assert!(out.contains("favlink"));
        assert!(ctx.needs_styles());
        assert_eq!(ctx.rendered_count(), 1);
    }

    #[test]
    fn test_flag_survives_later_failures() {
        let mut ctx = RequestContext::new();
        ctx.render(&Attributes::new().with("url", "https://a.com"));
        ctx.render(&Attributes::new().with("url", ""));
        assert!(ctx.needs_styles());
        assert_eq!(ctx.rendered_count(), 1);
    }

    #[test]
    fn test_enqueue_both_contexts() {
        let mut ctx = RequestContext::new();
        ctx.render(&Attributes::new().with("url", "https://a.com"));

        let mut sink = InlineStyles::new();
        assert!(ctx.enqueue_front_end_styles(&mut sink));
        assert!(ctx.enqueue_editor_styles(&mut sink));

        assert_eq!(sink.get(FRONT_END_STYLE), Some(build_css(StyleContext::FrontEnd).as_str()));
        assert_eq!(sink.get(EDITOR_STYLE), Some(build_css(StyleContext::Editor).as_str()));
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut first = RequestContext::new();
        first.render(&Attributes::new().with("url", "https://a.com"));
        let second = RequestContext::new();
        assert!(first.needs_styles());
        assert!(!second.needs_styles());
    }
}
