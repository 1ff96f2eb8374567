use serde::Serialize;
use tracing::debug;

use crate::model::selection::{Edit, TextSelection};
use crate::parse::line_prefix::classify_line;
use crate::util::unicode::line_start;

/// What pressing newline should do on a list line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ListAction {
    /// The line holds only a marker: delete `len` bytes from the line start
    /// and leave the caret there, without inserting a newline.
    RemovePrefix { len: usize },
    /// Insert a newline followed by `continuation`.
    Continue { continuation: String },
    /// Not a list line; insert a plain newline.
    None,
}

/// Decide the newline action from the text between the line start and the caret.
pub fn continue_list(line_before_caret: &str) -> ListAction {
    let Some(prefix) = classify_line(line_before_caret) else {
        return ListAction::None;
    };
    if line_before_caret[prefix.len..].trim().is_empty() {
        ListAction::RemovePrefix {
            len: line_before_caret.len(),
        }
    } else {
        ListAction::Continue {
            continuation: prefix.continuation(),
        }
    }
}

/// Apply a newline at the caret with list continuation.
///
/// Returns `None` when the selection is a range or the line is not a list
/// line; the caller then falls back to [`plain_newline`].
pub fn apply_newline(text: &str, selection: TextSelection) -> Option<Edit> {
    let sel = selection.clamp_to(text);
    if !sel.is_caret() {
        return None;
    }
    let caret = sel.start;
    let start = line_start(text, caret);
    let action = continue_list(&text[start..caret]);
    debug!(?action, caret, "newline on list line");

    match action {
        ListAction::RemovePrefix { len } => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push_str(&text[start + len..]);
            Some(Edit::new(out, TextSelection::caret(start)))
        }
        ListAction::Continue { continuation } => {
            let mut out = String::with_capacity(text.len() + continuation.len() + 1);
            out.push_str(&text[..caret]);
            out.push('\n');
            out.push_str(&continuation);
            out.push_str(&text[caret..]);
            let new_caret = caret + 1 + continuation.len();
            Some(Edit::new(out, TextSelection::caret(new_caret)))
        }
        ListAction::None => None,
    }
}

/// Replace the selection with a single newline.
pub fn plain_newline(text: &str, selection: TextSelection) -> Edit {
    let sel = selection.clamp_to(text);
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(&text[..sel.start]);
    out.push('\n');
    out.push_str(&text[sel.end..]);
    Edit::new(out, TextSelection::caret(sel.start + 1))
}
