use serde::Serialize;

use crate::model::list::ListCandidate;
use crate::model::selection::{Edit, TextSelection};
use crate::util::unicode::clamp_offset;

/// How a typed hashtag query relates to the known lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionMatch {
    pub has_exact_match: bool,
    pub show_create_option: bool,
}

/// The hashtag query being typed at the caret.
///
/// This is the text between the last `#` before the caret and the caret. A
/// query containing whitespace means the tag is finished, so there is none.
pub fn active_query(text: &str, caret: usize) -> Option<&str> {
    let before = &text[..clamp_offset(text, caret)];
    let hash = before.rfind('#')?;
    let query = &before[hash + 1..];
    if query.contains(char::is_whitespace) {
        return None;
    }
    Some(query)
}

/// Exact-match and create-new flags for `query` against `candidates`.
pub fn match_query(query: &str, candidates: &[ListCandidate]) -> SuggestionMatch {
    let q = query.to_lowercase();
    let has_exact_match = candidates
        .iter()
        .any(|c| c.name.to_lowercase() == q || c.full_path.to_lowercase() == q);
    SuggestionMatch {
        has_exact_match,
        show_create_option: !query.is_empty() && !has_exact_match,
    }
}

/// Candidates whose name or path contains `query`, case-insensitively, in input order.
pub fn filter_candidates<'a>(query: &str, candidates: &'a [ListCandidate]) -> Vec<&'a ListCandidate> {
    let q = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q) || c.full_path.to_lowercase().contains(&q))
        .collect()
}

/// Replace the active `#query` with `#list_path ` and put the caret after the space.
pub fn accept_suggestion(text: &str, caret: usize, list_path: &str) -> Option<Edit> {
    let caret = clamp_offset(text, caret);
    let query = active_query(text, caret)?;
    let hash = caret - query.len() - 1;
    let token = format!("#{} ", list_path.trim_start_matches('#'));

    // Don't double up with a space that already follows the caret
    let rest = &text[caret..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let mut out = String::with_capacity(hash + token.len() + rest.len());
    out.push_str(&text[..hash]);
    out.push_str(&token);
    out.push_str(rest);
    Some(Edit::new(out, TextSelection::caret(hash + token.len())))
}
