//! Stylesheet registration with the host page
//!
//! Styles are attached inline to named, sourceless stylesheet handles. Both
//! handles carry [`VERSION`] so hosts can bust caches when the CSS changes.

use tracing::trace;

use crate::render::StyleContext;

/// Version both stylesheet handles are registered with
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named stylesheet slot in the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle {
    pub name: &'static str,
    pub version: &'static str,
}

/// Handle used on the live page
pub const FRONT_END_STYLE: StyleHandle = StyleHandle {
    name: "favlink-style",
    version: VERSION,
};

/// Handle used inside the block editor canvas
pub const EDITOR_STYLE: StyleHandle = StyleHandle {
    name: "favlink-editor-style",
    version: VERSION,
};

impl StyleHandle {
    pub fn for_context(context: StyleContext) -> Self {
        match context {
            StyleContext::FrontEnd => FRONT_END_STYLE,
            StyleContext::Editor => EDITOR_STYLE,
        }
    }
}

/// Host facility that accepts inline CSS for a stylesheet handle
pub trait StyleSink {
    fn add_inline_style(&mut self, handle: StyleHandle, css: String);
}

/// In-memory sink that renders collected styles as `<style>` blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyles {
    entries: Vec<(StyleHandle, String)>,
}

impl InlineStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSS registered under `handle`, if any
    pub fn get(&self, handle: StyleHandle) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, css)| css.as_str())
    }

    pub fn handles(&self) -> impl Iterator<Item = StyleHandle> + '_ {
        self.entries.iter().map(|(h, _)| *h)
    }

    /// Render one `<style>` element per handle, in registration order
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(handle, css)| format!(r#"<style id="{}-inline-css">{}</style>"#, handle.name, css))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSink for InlineStyles {
    fn add_inline_style(&mut self, handle: StyleHandle, css: String) {
        trace!(handle = handle.name, bytes = css.len(), "adding inline style");
        match self.entries.iter_mut().find(|(h, _)| *h == handle) {
            Some((_, existing)) => existing.push_str(&css),
            None => self.entries.push((handle, css)),
        }
    }
}
