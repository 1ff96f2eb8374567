use serde::Serialize;
use std::ops::Range;

/// What a span renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Plain,
    Hashtag,
    Bold,
    Italic,
}

/// A typed slice of tokenized text.
///
/// `text` is the exact source slice `input[start..end]`, delimiters included,
/// so consecutive spans tile the input. `content` is what a renderer shows:
/// the inner text for bold/italic, the whole `#token` for hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
    pub content: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Span<'a> {
    pub fn plain(source: &'a str, range: Range<usize>) -> Self {
        let text = &source[range.clone()];
        Span {
            kind: SpanKind::Plain,
            text,
            content: text,
            start: range.start,
            end: range.end,
        }
    }

    /// A delimited span; `delim` bytes are trimmed from each side for `content`.
    pub fn delimited(source: &'a str, kind: SpanKind, range: Range<usize>, delim: usize) -> Self {
        Span {
            kind,
            text: &source[range.clone()],
            content: &source[range.start + delim..range.end - delim],
            start: range.start,
            end: range.end,
        }
    }

    pub fn hashtag(source: &'a str, range: Range<usize>) -> Self {
        let text = &source[range.clone()];
        Span {
            kind: SpanKind::Hashtag,
            text,
            content: text,
            start: range.start,
            end: range.end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// List path of a hashtag span (the token without `#`).
    pub fn path(&self) -> Option<&'a str> {
        match self.kind {
            SpanKind::Hashtag => self.content.strip_prefix('#'),
            _ => None,
        }
    }
}

/// A span plus the tap target an interactive renderer wires to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedSpan<'a> {
    #[serde(flatten)]
    pub span: Span<'a>,
    /// List path for hashtag spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl<'a> From<Span<'a>> for LinkedSpan<'a> {
    fn from(span: Span<'a>) -> Self {
        let target = span.path().map(str::to_string);
        LinkedSpan { span, target }
    }
}
