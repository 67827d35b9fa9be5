//! Typed render input: attribute normalization, icon resolution and sizing

use url::Url;

use crate::shortcode::Attributes;

/// Favicon service the icon URL is built from; the host is appended as `{host}.ico`
pub const ICON_SERVICE: &str = "https://icons.duckduckgo.com/ip3/";

/// Attributes of one widget occurrence after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderRequest {
    /// Link target
    pub url: String,
    /// Link text; the domain is shown when empty
    pub text: String,
    /// Icon size in pixels, as written by the author
    pub size: String,
}

impl RenderRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the icon size from a string or a number
    pub fn with_size(mut self, size: impl ToString) -> Self {
        self.size = size.to_string();
        self
    }

    /// Build a request from a raw attribute bag.
    ///
    /// Missing keys default to the empty string; keys other than `url`,
    /// `text` and `size` are ignored.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let field = |name: &str| attrs.get(name).unwrap_or_default().to_string();
        Self {
            url: field("url"),
            text: field("text"),
            size: field("size"),
        }
    }

    pub fn size_decision(&self) -> SizeDecision {
        SizeDecision::from_attr(&self.size)
    }

    /// Resolve the favicon for this request's URL, if it has a host
    pub fn resolve_icon(&self) -> Option<ResolvedIcon> {
        ResolvedIcon::from_url(&self.url)
    }
}

/// How the icon is dimensioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeDecision {
    /// Height follows the surrounding font size (`1em`)
    Auto,
    /// Explicit square size in pixels, always > 0
    Fixed(u32),
}

impl SizeDecision {
    /// Integer-cast the raw attribute; anything whose numeric prefix is
    /// not at least 1 selects [`SizeDecision::Auto`].
    pub fn from_attr(raw: &str) -> Self {
        match leading_int(raw) {
            n if n > 0 => SizeDecision::Fixed(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => SizeDecision::Auto,
        }
    }
}

/// Integer value of the numeric prefix of `raw`, truncated toward zero.
///
/// Float-shaped prefixes (`12.9`, `1e3`, `1.5e1`) are read as floats first.
/// Returns 0 when there is no numeric prefix or the value is not finite;
/// saturates on overflow.
fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let prefix = &s[..numeric_prefix_len(s)];

    if prefix.contains(['.', 'e', 'E']) {
        return match prefix.parse::<f64>() {
            Ok(value) if value.is_finite() => value as i64,
            _ => 0,
        };
    }

    let (negative, digits) = match prefix.as_bytes().first() {
        Some(b'-') => (true, &prefix[1..]),
        Some(b'+') => (false, &prefix[1..]),
        _ => (false, prefix),
    };
    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Length of the leading `[sign] digits [. digits] [e [sign] digits]` run
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(len);
    len += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(len) == Some(&b'.') {
        let frac_digits = digits_from(len + 1);
        if int_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            len += 1 + frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(len + 1 + sign);
        if exp_digits > 0 {
            len += 1 + sign + exp_digits;
        }
    }
    len
}

/// Favicon derived from the link target's host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Host component of the target URL, never empty
    pub domain: String,
    /// Unescaped favicon URL
    pub icon_src: String,
}

impl ResolvedIcon {
    /// Returns `None` when the URL is malformed, relative or hostless
    pub fn from_url(url: &str) -> Option<Self> {
        let domain = extract_host(url)?;
        let icon_src = format!("{}{}.ico", ICON_SERVICE, domain);
        Some(Self { domain, icon_src })
    }
}

fn extract_host(url: &str) -> Option<String> {
    // Scheme-relative links still name a host
    let parsed = if url.starts_with("//") {
        Url::parse(&format!("https:{}", url))
    } else {
        Url::parse(url)
    };

    parsed
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
