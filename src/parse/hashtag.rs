//! Hashtag list references: `#List` or `#List/Sublist`.
//!
//! A hashtag is `#`, one or more word characters, then optionally `/` and one
//! or more word characters. The tokenizer uses [`hashtag_end`] for its
//! hashtag spans, so everything here agrees with what gets rendered.

use std::ops::Range;

use crate::util::unicode::is_word_char;

/// If a hashtag starts at byte `pos`, the byte offset just past it.
pub fn hashtag_end(text: &str, pos: usize) -> Option<usize> {
    let after_hash = text.get(pos..)?.strip_prefix('#')?;
    let head = word_len(after_hash);
    if head == 0 {
        return None;
    }
    let mut end = pos + 1 + head;
    if let Some(after_slash) = text[end..].strip_prefix('/') {
        let tail = word_len(after_slash);
        if tail > 0 {
            end += 1 + tail;
        }
    }
    Some(end)
}

/// Byte length of the leading run of word characters.
fn word_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Iterator over the byte ranges of every hashtag, left to right.
pub struct Hashtags<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Hashtags<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        while let Some(offset) = self.text[self.pos..].find('#') {
            let start = self.pos + offset;
            match hashtag_end(self.text, start) {
                Some(end) => {
                    self.pos = end;
                    return Some(start..end);
                }
                None => self.pos = start + 1,
            }
        }
        self.pos = self.text.len();
        None
    }
}

pub fn find_hashtags(text: &str) -> Hashtags<'_> {
    Hashtags { text, pos: 0 }
}

/// Every list path in `text`, left to right, duplicates kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    find_hashtags(text)
        .map(|r| text[r.start + 1..r.end].to_string())
        .collect()
}

/// Remove every hashtag and the whitespace run directly after it, then trim.
///
/// Anything else next to a tag (punctuation, text) is kept as-is.
pub fn remove_hashtags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for range in find_hashtags(text) {
        out.push_str(&text[copied..range.start]);
        let rest = &text[range.end..];
        copied = text.len() - rest.trim_start().len();
    }
    out.push_str(&text[copied..]);
    out.trim().to_string()
}

/// Prepend `#list_path` to `text` unless that token is already present.
///
/// Presence is a plain substring check, so `#Work` counts as present in
/// `#Workshop`. This is not the inverse of [`remove_hashtags`]: the tag
/// always goes to the front, wherever it was removed from.
pub fn add_hashtag_to_text(text: &str, list_path: &str) -> String {
    let token = format!("#{}", list_path.trim_start_matches('#'));
    if text.contains(&token) {
        return text.to_string();
    }
    if text.trim().is_empty() {
        return token;
    }
    format!("{} {}", token, text)
}
