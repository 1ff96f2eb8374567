use serde::Serialize;

use crate::model::list::ListCandidate;
use crate::model::selection::Edit;
use crate::parse::span::{LinkedSpan, SpanKind};
use crate::util::unicode::truncate_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SpansJson<'a> {
    pub spans: Vec<LinkedSpan<'a>>,
}

#[derive(Serialize)]
pub struct TagsJson {
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct TextJson {
    pub text: String,
}

#[derive(Serialize)]
pub struct SuggestJson<'a> {
    /// `None` when no hashtag is being typed at the caret
    pub query: Option<&'a str>,
    pub has_exact_match: bool,
    pub show_create_option: bool,
    pub candidates: Vec<&'a ListCandidate>,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

fn kind_label(kind: SpanKind) -> &'static str {
    match kind {
        SpanKind::Plain => "plain",
        SpanKind::Hashtag => "hashtag",
        SpanKind::Bold => "bold",
        SpanKind::Italic => "italic",
    }
}

/// One line per span: `kind  start..end  content`.
///
/// Hashtag labels are capped at `max_tag_width` display cells (0 = no cap);
/// offsets always describe the full token.
pub fn format_spans(spans: &[LinkedSpan], max_tag_width: usize) -> String {
    let mut out = String::new();
    for linked in spans {
        let span = &linked.span;
        let content = match span.kind {
            SpanKind::Hashtag if max_tag_width > 0 => {
                truncate_to_width(span.content, max_tag_width)
            }
            _ => span.content.to_string(),
        };
        let range = format!("{}..{}", span.start, span.end);
        out.push_str(&format!(
            "{:<8}{:<9} {:?}\n",
            kind_label(span.kind),
            range,
            content
        ));
    }
    out
}

/// The edited text, then the selection on its own line.
pub fn format_edit(edit: &Edit) -> String {
    format!(
        "{}\n-- selection {}..{}\n",
        edit.text, edit.selection.start, edit.selection.end
    )
}

pub fn format_suggest(json: &SuggestJson) -> String {
    let Some(query) = json.query else {
        return "no active hashtag query\n".to_string();
    };
    let mut out = String::new();
    for c in &json.candidates {
        out.push_str(&format!("#{} ({})\n", c.full_path, c.task_count));
    }
    if json.show_create_option {
        out.push_str(&format!("+ create #{}\n", query));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::selection::TextSelection;
    use crate::parse::tokenizer::{TokenizeOptions, tokenize_linked};
    use insta::assert_snapshot;

    #[test]
    fn spans_text_output() {
        let spans = tokenize_linked("Check **this** #Ideas", TokenizeOptions::default());
        assert_snapshot!(format_spans(&spans, 0), @r##"
        plain   0..6      "Check "
        bold    6..14     "this"
        plain   14..15    " "
        hashtag 15..21    "#Ideas"
        "##);
    }

    #[test]
    fn spans_truncate_long_tags() {
        let spans = tokenize_linked("#Shopping/Grocery", TokenizeOptions::default());
        let out = format_spans(&spans, 8);
        assert_eq!(out, "hashtag 0..17     \"#Shoppi\u{2026}\"\n");
    }

    #[test]
    fn edit_text_output() {
        let edit = Edit::new("a **b**".into(), TextSelection::new(4, 5));
        assert_eq!(format_edit(&edit), "a **b**\n-- selection 4..5\n");
    }

    #[test]
    fn suggest_without_query() {
        let json = SuggestJson {
            query: None,
            has_exact_match: false,
            show_create_option: false,
            candidates: Vec::new(),
        };
        assert_eq!(format_suggest(&json), "no active hashtag query\n");
    }

    #[test]
    fn suggest_with_create_option() {
        let work = ListCandidate::from_path("Work/Reports");
        let json = SuggestJson {
            query: Some("Wor"),
            has_exact_match: false,
            show_create_option: true,
            candidates: vec![&work],
        };
        assert_eq!(format_suggest(&json), "#Work/Reports (0)\n+ create #Wor\n");
    }
}
