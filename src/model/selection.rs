use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::util::unicode::clamp_offset;

/// A selected byte range in a text buffer. `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

impl TextSelection {
    /// Build a selection, swapping the ends if given in reverse.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            TextSelection { start, end }
        } else {
            TextSelection {
                start: end,
                end: start,
            }
        }
    }

    pub fn caret(offset: usize) -> Self {
        TextSelection {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Normalise and clamp both ends into `text`, snapping to char boundaries.
    pub fn clamp_to(&self, text: &str) -> Self {
        let sel = TextSelection::new(self.start, self.end);
        TextSelection {
            start: clamp_offset(text, sel.start),
            end: clamp_offset(text, sel.end),
        }
    }
}

/// A new buffer state produced by an editing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub text: String,
    pub selection: TextSelection,
}

impl Edit {
    pub fn new(text: String, selection: TextSelection) -> Self {
        Edit { text, selection }
    }

    /// The selected substring of the edited text.
    pub fn selected_text(&self) -> &str {
        self.text.get(self.selection.range()).unwrap_or("")
    }
}
