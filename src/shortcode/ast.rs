//! Syntax tree for page content containing shortcodes

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Parsed page content: literal text interleaved with shortcode tags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub segments: Vec<Spanned<Segment>>,
}

impl Document {
    /// Iterate over the shortcode tags in document order
    pub fn shortcodes(&self) -> impl Iterator<Item = &ShortcodeTag> + '_ {
        self.segments.iter().filter_map(|seg| match &seg.node {
            Segment::Shortcode(tag) => Some(tag),
            _ => None,
        })
    }
}

/// One piece of page content
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text passed through untouched
    Text(String),
    /// A shortcode occurrence to be substituted
    Shortcode(ShortcodeTag),
}

/// A single shortcode occurrence: `[name attr="value" ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcodeTag {
    pub name: String,
    pub attrs: Attributes,
    /// Written as `[name ... /]`
    pub self_closing: bool,
    /// Text between `[name]` and `[/name]` for the enclosing form
    pub content: Option<String>,
}

/// Raw, untyped attribute bag collected from a tag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    named: Vec<(String, String)>,
    positional: Vec<String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named attribute. Names are case-insensitive and stored lower-cased.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.named
            .push((name.as_ref().to_ascii_lowercase(), value.into()));
    }

    /// Builder form of [`Attributes::insert`]
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn push_positional(&mut self, value: impl Into<String>) {
        self.positional.push(value.into());
    }

    /// Look up a named attribute; the last occurrence wins
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.named
            .iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}
