pub mod hashtag;
pub mod line_prefix;
pub mod span;
pub mod tokenizer;

pub use hashtag::{add_hashtag_to_text, extract_hashtags, find_hashtags, remove_hashtags};
pub use line_prefix::{LinePrefix, PrefixKind, classify_line};
pub use span::{LinkedSpan, Span, SpanKind};
pub use tokenizer::{TokenizeOptions, tokenize, tokenize_linked};
