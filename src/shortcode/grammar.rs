//! Shortcode scanner and attribute parser using chumsky

use std::ops::Range;

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::shortcode::ast::*;
use crate::shortcode::lexer::{self, Token};

/// One parsed attribute before it is folded into [`Attributes`]
#[derive(Debug, Clone)]
enum Attr {
    Named(String, String),
    Positional(String),
}

/// A shortcode located in the content, before its attributes are parsed
struct RawTag {
    /// Whole occurrence, including enclosed content and closing tag
    span: Range<usize>,
    /// Attribute text between the tag name and `]` (or `/]`)
    attrs: Range<usize>,
    self_closing: bool,
    content: Option<String>,
    /// Written as `[[tag ...]]`
    escaped: bool,
}

/// Parse page content into text and `tag` shortcode segments
///
/// Text outside recognised tags is kept byte-for-byte. Syntax errors from
/// every tag are collected before failing.
pub fn parse(input: &str, tag: &str) -> Result<Document, Vec<crate::ParseError>> {
    let (doc, errors) = parse_recovering(input, tag);
    if errors.is_empty() {
        Ok(doc)
    } else {
        Err(errors)
    }
}

/// Parse page content, keeping malformed tags as literal text
///
/// Returns the document along with the syntax errors of every tag that was
/// left unexpanded.
pub fn parse_recovering(input: &str, tag: &str) -> (Document, Vec<crate::ParseError>) {
    let mut scanner = Scanner::new(input, tag);
    let mut doc = Document::default();
    let mut errors = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(rel) = input[pos..].find('[') {
        let open = pos + rel;
        let Some(raw) = scanner.scan(open) else {
            pos = open + 1;
            continue;
        };
        pos = raw.span.end;

        if raw.escaped {
            push_text(&mut doc, input, text_start..raw.span.start);
            let literal = &input[raw.span.start + 1..raw.span.end - 1];
            push_literal(&mut doc, literal, raw.span.clone());
            text_start = pos;
            continue;
        }

        match parse_attributes(input, raw.attrs.clone()) {
            Ok(attrs) => {
                push_text(&mut doc, input, text_start..raw.span.start);
                doc.segments.push(Spanned::new(
                    Segment::Shortcode(ShortcodeTag {
                        name: tag.to_string(),
                        attrs,
                        self_closing: raw.self_closing,
                        content: raw.content,
                    }),
                    raw.span,
                ));
                text_start = pos;
            }
            // The occurrence stays in the surrounding text run
            Err(errs) => errors.extend(errs),
        }
    }

    push_text(&mut doc, input, text_start..input.len());
    (doc, errors)
}

fn push_text(doc: &mut Document, input: &str, span: Range<usize>) {
    if !span.is_empty() {
        push_literal(doc, &input[span.clone()], span);
    }
}

/// Append text, merging with a directly preceding text segment
fn push_literal(doc: &mut Document, text: &str, span: Range<usize>) {
    if let Some(last) = doc.segments.last_mut() {
        if let Segment::Text(prev) = &mut last.node {
            if last.span.end == span.start {
                prev.push_str(text);
                last.span.end = span.end;
                return;
            }
        }
    }
    doc.segments
        .push(Spanned::new(Segment::Text(text.to_string()), span));
}

/// Forward search whose last answer is reused while it is still ahead
#[derive(Default)]
struct Lookahead {
    from: usize,
    hit: Option<Option<usize>>,
}

impl Lookahead {
    fn find(&mut self, input: &str, needle: &str, from: usize) -> Option<usize> {
        if let Some(hit) = self.hit {
            if self.from <= from {
                match hit {
                    None => return None,
                    Some(at) if at >= from => return Some(at),
                    Some(_) => {}
                }
            }
        }
        let hit = input[from..].find(needle).map(|rel| from + rel);
        self.from = from;
        self.hit = Some(hit);
        hit
    }
}

/// Locates `tag` occurrences in one input
struct Scanner<'a> {
    input: &'a str,
    tag: &'a str,
    closing_tag: String,
    next_bracket: Lookahead,
    next_closing: Lookahead,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, tag: &'a str) -> Self {
        Self {
            input,
            tag,
            closing_tag: format!("[/{}]", tag),
            next_bracket: Lookahead::default(),
            next_closing: Lookahead::default(),
        }
    }

    /// Try to recognise a tag whose `[` is at byte `open`
    fn scan(&mut self, open: usize) -> Option<RawTag> {
        // `[[tag]]` only counts as an escape when both brackets are doubled;
        // otherwise the outer `[` is plain text and the tag starts one byte later.
        if self.input[open + 1..].starts_with('[') {
            let inner = self.scan_unescaped(open + 1)?;
            if !self.input[inner.span.end..].starts_with(']') {
                return None;
            }
            return Some(RawTag {
                span: open..inner.span.end + 1,
                escaped: true,
                ..inner
            });
        }
        self.scan_unescaped(open)
    }

    fn scan_unescaped(&mut self, open: usize) -> Option<RawTag> {
        let input = self.input;
        if !input[open + 1..].starts_with(self.tag) {
            return None;
        }
        let name_end = open + 1 + self.tag.len();
        match input[name_end..].chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' || c == '-' => return None,
            None => return None,
            _ => {}
        }

        let close = self.next_bracket.find(input, "]", name_end)?;
        let self_closing = input[name_end..close].ends_with('/');
        let attrs = if self_closing {
            name_end..close - 1
        } else {
            name_end..close
        };
        let mut end = close + 1;

        let mut content = None;
        if !self_closing {
            if let Some(at) = self.next_closing.find(input, &self.closing_tag, end) {
                content = Some(input[end..at].to_string());
                end = at + self.closing_tag.len();
            }
        }

        Some(RawTag {
            span: open..end,
            attrs,
            self_closing,
            content,
            escaped: false,
        })
    }
}

/// Parse the attribute text at `span`, reporting errors with absolute offsets
fn parse_attributes(input: &str, span: Range<usize>) -> Result<Attributes, Vec<crate::ParseError>> {
    let offset = span.start;
    let end = span.end;

    let token_iter = lexer::lex(&input[span]).map(move |(tok, s)| {
        let abs: SimpleSpan = (s.start + offset..s.end + offset).into();
        (tok, abs)
    });

    let token_stream = Stream::from_iter(token_iter).map((end..end).into(), |(t, s): (_, _)| (t, s));

    attributes_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn attributes_parser<'a, I>() -> impl Parser<'a, I, Attributes, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    };

    let value = select! {
        Token::Assign(v) => v,
    };

    let named = name.clone().then(value.clone()).map(|(n, v)| Attr::Named(n, v));

    // `name=` followed by nothing or by an unterminated quote
    let missing_value = name
        .clone()
        .then_ignore(just(Token::Equals))
        .try_map(|n, span| {
            Err::<Attr, _>(Rich::custom(
                span,
                format!("missing value for attribute '{}'", n),
            ))
        });

    // A value assigned to something that cannot be an attribute name
    let bad_name = select! { Token::Word(w) => w }
        .then(value)
        .try_map(|(w, _), span| {
            Err::<Attr, _>(Rich::custom(
                span,
                format!("'{}' is not a valid attribute name", w),
            ))
        });

    let positional = select! {
        Token::Name(s) => s,
        Token::Word(s) => s,
        Token::Quoted(s) => s,
    }
    .map(Attr::Positional);

    choice((named, missing_value, bad_name, positional))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|items| {
            let mut attrs = Attributes::new();
            for item in items {
                match item {
                    Attr::Named(n, v) => attrs.insert(n, v),
                    Attr::Positional(v) => attrs.push_positional(v),
                }
            }
            attrs
        })
}
