//! Lexer for shortcode attribute text using logos
//!
//! Only the text between the tag name and the closing `]` is lexed here;
//! locating tags inside page content is the grammar's job.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token {
    // Assignment with its value attached, so unquoted values may contain
    // characters that are otherwise separate tokens (`url=https://a.com/?q=1`)
    #[regex(r#"=\s*"[^"]*""#, |lex| assigned_value(lex.slice()))]
    #[regex(r#"=\s*'[^']*'"#, |lex| assigned_value(lex.slice()))]
    #[regex(r#"=\s*[^\s"']+"#, |lex| assigned_value(lex.slice()))]
    Assign(String),

    // `=` with nothing usable after it
    #[token("=")]
    Equals,

    #[regex(r#""[^"]*""#, |lex| unquote(lex.slice()))]
    #[regex(r#"'[^']*'"#, |lex| unquote(lex.slice()))]
    Quoted(String),

    // Opening quote with no matching close
    #[regex(r#"["']"#)]
    StrayQuote,

    #[regex(r"[A-Za-z0-9_-]+", |lex| lex.slice().to_string(), priority = 3)]
    Name(String),

    #[regex(r#"[^\s"'=]+"#, |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// Strip the `=`, surrounding whitespace and quotes from an assignment slice
fn assigned_value(slice: &str) -> String {
    let value = slice[1..].trim_start();
    if value.starts_with('"') || value.starts_with('\'') {
        unquote(value)
    } else {
        strip_backslashes(value)
    }
}

fn unquote(slice: &str) -> String {
    strip_backslashes(&slice[1..slice.len() - 1])
}

/// Resolve C-style backslash escapes the way shortcode hosts do
fn strip_backslashes(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Lex attribute text into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
