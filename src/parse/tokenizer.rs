use crate::model::config::MarkupConfig;
use crate::parse::hashtag::hashtag_end;
use crate::parse::span::{LinkedSpan, Span, SpanKind};

/// Which marker forms the tokenizer looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub hashtags: bool,
    pub emphasis: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions {
            hashtags: true,
            emphasis: true,
        }
    }
}

impl From<&MarkupConfig> for TokenizeOptions {
    fn from(config: &MarkupConfig) -> Self {
        TokenizeOptions {
            hashtags: config.hashtags,
            emphasis: config.emphasis,
        }
    }
}

/// Split `text` into plain, hashtag, bold and italic spans.
///
/// Marker forms are tried at each position in precedence order:
/// 1. `**bold**`
/// 2. `__bold__`
/// 3. `*italic*` (a lone `*`, not part of `**`)
/// 4. `_italic_` (a lone `_`, not part of `__`)
/// 5. `#List` / `#List/Sublist`
///
/// The first form that matches wins and scanning resumes after it. Emphasis
/// never crosses a newline and needs at least one character of content.
/// Unmatched markers stay in the surrounding plain span. The result always has
/// at least one span; empty input gives a single empty plain span.
pub fn tokenize(text: &str, options: TokenizeOptions) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_at(text, pos, options) {
            Some(span) => {
                if plain_start < pos {
                    spans.push(Span::plain(text, plain_start..pos));
                }
                pos = span.end;
                plain_start = pos;
                spans.push(span);
            }
            None => {
                // Markers are ASCII, so stepping a whole char never skips one
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() || spans.is_empty() {
        spans.push(Span::plain(text, plain_start..text.len()));
    }
    spans
}

/// Like [`tokenize`], with each hashtag span carrying its list path as a tap target.
pub fn tokenize_linked(text: &str, options: TokenizeOptions) -> Vec<LinkedSpan<'_>> {
    tokenize(text, options)
        .into_iter()
        .map(LinkedSpan::from)
        .collect()
}

fn match_at(text: &str, pos: usize, options: TokenizeOptions) -> Option<Span<'_>> {
    if options.emphasis {
        if let Some(end) = double_marker(text, pos, "**") {
            return Some(Span::delimited(text, SpanKind::Bold, pos..end, 2));
        }
        if let Some(end) = double_marker(text, pos, "__") {
            return Some(Span::delimited(text, SpanKind::Bold, pos..end, 2));
        }
        if let Some(end) = single_marker(text, pos, b'*') {
            return Some(Span::delimited(text, SpanKind::Italic, pos..end, 1));
        }
        if let Some(end) = single_marker(text, pos, b'_') {
            return Some(Span::delimited(text, SpanKind::Italic, pos..end, 1));
        }
    }
    if options.hashtags
        && let Some(end) = hashtag_end(text, pos)
    {
        return Some(Span::hashtag(text, pos..end));
    }
    None
}

/// End of the current line, starting the search at `from`.
fn line_end_from(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// `**content**` starting at `pos`: the shortest closing marker after at least
/// one content character.
fn double_marker(text: &str, pos: usize, marker: &str) -> Option<usize> {
    if !text[pos..].starts_with(marker) {
        return None;
    }
    let open = pos + marker.len();
    let first = text[open..].chars().next()?;
    if first == '\n' {
        return None;
    }
    let from = open + first.len_utf8();
    let limit = line_end_from(text, open);
    text.get(from..limit)?
        .find(marker)
        .map(|i| from + i + marker.len())
}

/// `*content*` starting at `pos`, where neither the opening nor the closing
/// marker touches another copy of itself.
fn single_marker(text: &str, pos: usize, marker: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes[pos] != marker || (pos > 0 && bytes[pos - 1] == marker) {
        return None;
    }
    let open = pos + 1;
    let first = text[open..].chars().next()?;
    if first == '\n' || first as u32 == marker as u32 {
        return None;
    }
    let from = open + first.len_utf8();
    let limit = line_end_from(text, open);
    (from..limit)
        .find(|&i| {
            bytes[i] == marker && bytes[i - 1] != marker && bytes.get(i + 1) != Some(&marker)
        })
        .map(|close| close + 1)
}
