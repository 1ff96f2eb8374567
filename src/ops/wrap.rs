use tracing::trace;

use crate::model::config::EditConfig;
use crate::model::selection::{Edit, TextSelection};

/// Wrap the selection in `before`/`after`, or unwrap it if already wrapped.
///
/// The selection counts as wrapped when `before` sits directly before its
/// start and `after` directly after its end. Either way the returned selection
/// covers the same content, so wrapping then toggling again gives back the
/// text as it was.
/// A caret gets an empty marker pair with the caret in the middle.
pub fn toggle_wrap(text: &str, selection: TextSelection, before: &str, after: &str) -> Edit {
    let sel = selection.clamp_to(text);
    let (start, end) = (sel.start, sel.end);

    let wrapped = start >= before.len()
        && text.get(start - before.len()..start) == Some(before)
        && text.get(end..end + after.len()) == Some(after);
    trace!(wrapped, start, end, "toggle wrap");

    if wrapped {
        let outer_start = start - before.len();
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..outer_start]);
        out.push_str(&text[start..end]);
        out.push_str(&text[end + after.len()..]);
        Edit::new(out, TextSelection::new(outer_start, end - before.len()))
    } else {
        let mut out = String::with_capacity(text.len() + before.len() + after.len());
        out.push_str(&text[..start]);
        out.push_str(before);
        out.push_str(&text[start..end]);
        out.push_str(after);
        out.push_str(&text[end..]);
        Edit::new(
            out,
            TextSelection::new(start + before.len(), end + before.len()),
        )
    }
}

/// Toggle the configured bold marker around the selection.
pub fn toggle_bold(text: &str, selection: TextSelection, config: &EditConfig) -> Edit {
    toggle_wrap(text, selection, &config.bold, &config.bold)
}

/// Toggle the configured italic marker around the selection.
pub fn toggle_italic(text: &str, selection: TextSelection, config: &EditConfig) -> Edit {
    toggle_wrap(text, selection, &config.italic, &config.italic)
}
