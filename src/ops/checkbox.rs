use tracing::debug;

use crate::model::task::Completion;
use crate::util::unicode::{line_end, line_start};

/// Byte length of a checkbox token: `- [ ]` or `- [x]`
pub const CHECKBOX_LEN: usize = 5;

/// The checkbox token for a completion state
pub fn checkbox_token(state: Completion) -> String {
    format!("- [{}]", state.checkbox_char())
}

/// Completion state of the checkbox token at `offset`, if there is one.
fn checkbox_state_at(text: &str, offset: usize) -> Option<Completion> {
    let token = text.get(offset..offset.checked_add(CHECKBOX_LEN)?)?;
    let inner = token.strip_prefix("- [")?.strip_suffix(']')?;
    let mut chars = inner.chars();
    let state = Completion::from_checkbox_char(chars.next()?)?;
    chars.next().is_none().then_some(state)
}

/// Flip the checkbox token starting at `offset`.
///
/// The caller is expected to pass the offset of a real token (see
/// [`checkbox_offset_in_line`]); any other offset leaves the text as it was.
pub fn toggle_checkbox_at(text: &str, offset: usize) -> String {
    let Some(state) = checkbox_state_at(text, offset) else {
        debug!(offset, "no checkbox token at offset");
        return text.to_string();
    };
    let flipped = match state {
        Completion::Pending => Completion::Committed,
        Completion::Committed => Completion::Pending,
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..offset]);
    out.push_str(&checkbox_token(flipped));
    out.push_str(&text[offset + CHECKBOX_LEN..]);
    out
}

/// Offset of the checkbox token opening the line that contains `pos`.
///
/// Only a token right after the line's indentation counts.
pub fn checkbox_offset_in_line(text: &str, pos: usize) -> Option<usize> {
    let start = line_start(text, pos);
    let line = &text[start..line_end(text, pos)];
    let offset = start + (line.len() - line.trim_start().len());
    checkbox_state_at(text, offset).map(|_| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_unchecked() {
        assert_eq!(toggle_checkbox_at("- [ ] milk", 0), "- [x] milk");
    }

    #[test]
    fn test_toggle_checked() {
        assert_eq!(toggle_checkbox_at("a\n  - [x] eggs", 4), "a\n  - [ ] eggs");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let text = "x\n- [ ] one\n- [x] two";
        let once = toggle_checkbox_at(text, 12);
        assert_eq!(once, "x\n- [ ] one\n- [ ] two");
        assert_eq!(toggle_checkbox_at(&once, 12), text);
    }

    #[test]
    fn test_invalid_offset_is_noop() {
        assert_eq!(toggle_checkbox_at("- [ ] milk", 1), "- [ ] milk");
        assert_eq!(toggle_checkbox_at("- [X] milk", 0), "- [X] milk");
        assert_eq!(toggle_checkbox_at("- [", 0), "- [");
        assert_eq!(toggle_checkbox_at("abc", usize::MAX), "abc");
    }

    #[test]
    fn test_token_with_multibyte_inside_is_rejected() {
        assert_eq!(toggle_checkbox_at("- [é]", 0), "- [é]");
    }

    #[test]
    fn test_checkbox_offset_in_line() {
        let text = "intro\n   - [ ] task\n- plain";
        assert_eq!(checkbox_offset_in_line(text, 0), None);
        assert_eq!(checkbox_offset_in_line(text, 15), Some(9));
        assert_eq!(checkbox_offset_in_line(text, 6), Some(9));
        assert_eq!(checkbox_offset_in_line(text, text.len()), None);
    }

    #[test]
    fn test_checkbox_not_at_line_start_is_ignored() {
        assert_eq!(checkbox_offset_in_line("see - [ ] here", 5), None);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(checkbox_token(Completion::Pending), "- [ ]");
        assert_eq!(checkbox_token(Completion::Committed), "- [x]");
    }
}
