pub mod checkbox;
pub mod continuation;
pub mod suggest;
pub mod wrap;

pub use checkbox::{checkbox_offset_in_line, toggle_checkbox_at};
pub use continuation::{ListAction, apply_newline, continue_list, plain_newline};
pub use suggest::{SuggestionMatch, accept_suggestion, active_query, filter_candidates, match_query};
pub use wrap::{toggle_bold, toggle_italic, toggle_wrap};
