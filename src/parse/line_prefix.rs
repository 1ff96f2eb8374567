use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::task::Completion;

// Checkbox must be tried before bullet: `- [ ] ` also starts with `- `.
static CHECKBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)-\s\[([x ])\]\s").expect("checkbox pattern"));
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*])\s").expect("bullet pattern"));
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([0-9]+)\.\s").expect("numbered pattern"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)>\s").expect("quote pattern"));

/// The structural marker a line starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PrefixKind {
    /// `- item` or `* item`
    Bullet { marker: char },
    /// `- [ ] item` / `- [x] item`
    Checkbox { state: Completion },
    /// `3. item`
    Numbered { number: u64 },
    /// `> item`
    Quote,
}

/// A classified line prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePrefix<'a> {
    #[serde(flatten)]
    pub kind: PrefixKind,
    /// Leading whitespace before the marker
    pub indent: &'a str,
    /// Byte length of indent + marker + the whitespace char after it
    pub len: usize,
}

impl LinePrefix<'_> {
    /// Prefix text for the next line of the same list.
    pub fn continuation(&self) -> String {
        match self.kind {
            PrefixKind::Bullet { marker } => format!("{}{} ", self.indent, marker),
            PrefixKind::Checkbox { .. } => format!(
                "{}- [{}] ",
                self.indent,
                Completion::Pending.checkbox_char()
            ),
            PrefixKind::Numbered { number } => {
                format!("{}{}. ", self.indent, number.saturating_add(1))
            }
            PrefixKind::Quote => format!("{}> ", self.indent),
        }
    }
}

/// Classify the start of a single line. `None` means no list prefix.
///
/// Patterns are checked in order: checkbox, bullet, numbered, quote.
pub fn classify_line(line: &str) -> Option<LinePrefix<'_>> {
    if let Some(caps) = CHECKBOX_RE.captures(line) {
        let state = caps[2]
            .chars()
            .next()
            .and_then(Completion::from_checkbox_char)
            .unwrap_or_default();
        return Some(prefix(&caps, PrefixKind::Checkbox { state }));
    }
    if let Some(caps) = BULLET_RE.captures(line) {
        let marker = caps[2].chars().next().unwrap_or('-');
        return Some(prefix(&caps, PrefixKind::Bullet { marker }));
    }
    // Numbers too large for u64 don't count as a numbered prefix
    if let Some(caps) = NUMBERED_RE.captures(line)
        && let Ok(number) = caps[2].parse::<u64>()
    {
        return Some(prefix(&caps, PrefixKind::Numbered { number }));
    }
    if let Some(caps) = QUOTE_RE.captures(line) {
        return Some(prefix(&caps, PrefixKind::Quote));
    }
    None
}

fn prefix<'a>(caps: &regex::Captures<'a>, kind: PrefixKind) -> LinePrefix<'a> {
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let len = caps.get(0).map_or(0, |m| m.end());
    LinePrefix { kind, indent, len }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_before_bullet() {
        let p = classify_line("- [ ] buy milk").unwrap();
        assert_eq!(
            p.kind,
            PrefixKind::Checkbox {
                state: Completion::Pending
            }
        );
        assert_eq!(p.len, 6);

        let p = classify_line("  - [x] done").unwrap();
        assert_eq!(
            p.kind,
            PrefixKind::Checkbox {
                state: Completion::Committed
            }
        );
        assert_eq!(p.indent, "  ");
        assert_eq!(p.len, 8);
    }

    #[test]
    fn test_bullets() {
        let p = classify_line("- item").unwrap();
        assert_eq!(p.kind, PrefixKind::Bullet { marker: '-' });
        let p = classify_line("\t* item").unwrap();
        assert_eq!(p.kind, PrefixKind::Bullet { marker: '*' });
        assert_eq!(p.indent, "\t");
        assert_eq!(p.len, 3);
    }

    #[test]
    fn test_uppercase_x_is_a_bullet_not_a_checkbox() {
        let p = classify_line("- [X] item").unwrap();
        assert_eq!(p.kind, PrefixKind::Bullet { marker: '-' });
    }

    #[test]
    fn test_numbered() {
        let p = classify_line("   12. twelfth").unwrap();
        assert_eq!(p.kind, PrefixKind::Numbered { number: 12 });
        assert_eq!(p.indent, "   ");
        assert_eq!(p.len, 7);
    }

    #[test]
    fn test_huge_number_is_not_numbered() {
        assert_eq!(classify_line("99999999999999999999999. x"), None);
    }

    #[test]
    fn test_quote() {
        let p = classify_line("> said").unwrap();
        assert_eq!(p.kind, PrefixKind::Quote);
        assert_eq!(p.len, 2);
    }

    #[test]
    fn test_marker_needs_trailing_whitespace() {
        assert_eq!(classify_line("-item"), None);
        assert_eq!(classify_line("1.item"), None);
        assert_eq!(classify_line(">quote"), None);
        assert_eq!(classify_line("-"), None);
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("plain text"), None);
    }

    #[test]
    fn test_continuations() {
        let cases = [
            ("- a", "- "),
            ("  * a", "  * "),
            ("- [x] a", "- [ ] "),
            ("    - [ ] a", "    - [ ] "),
            ("9. a", "10. "),
            (" > a", " > "),
        ];
        for (line, expected) in cases {
            let p = classify_line(line).unwrap();
            assert_eq!(p.continuation(), expected, "line {:?}", line);
        }
    }
}
