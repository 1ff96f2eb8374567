use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tm", about = concat!("taskmark v", env!("CARGO_PKG_VERSION"), " - markup and list editing for task notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./taskmark.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split text into plain, hashtag, bold and italic spans
    Spans(SpansArgs),
    /// Extract, strip or add hashtag list references
    Tags(TagsCmd),
    /// Press newline at a caret, continuing lists
    Newline(NewlineArgs),
    /// Toggle a marker pair around a selection
    Wrap(WrapArgs),
    /// Toggle a `- [ ]` / `- [x]` checkbox
    Check(CheckArgs),
    /// Show list suggestions for the hashtag being typed at a caret
    Suggest(SuggestArgs),
}

// ---------------------------------------------------------------------------
// Span args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SpansArgs {
    /// Text to tokenize (`-` or omitted: read stdin)
    pub text: Option<String>,
    /// Don't recognise hashtags
    #[arg(long)]
    pub no_hashtags: bool,
    /// Don't recognise bold/italic
    #[arg(long)]
    pub no_emphasis: bool,
}

// ---------------------------------------------------------------------------
// Tag args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TagsCmd {
    #[command(subcommand)]
    pub action: TagsAction,
}

#[derive(Subcommand)]
pub enum TagsAction {
    /// List every hashtag path, left to right
    Extract {
        /// Text (`-` or omitted: read stdin)
        text: Option<String>,
    },
    /// Remove every hashtag
    Strip {
        /// Text (`-` or omitted: read stdin)
        text: Option<String>,
    },
    /// Prepend a hashtag unless already present
    Add {
        /// List path, e.g. Shopping/Grocery
        list: String,
        /// Text (`-` or omitted: read stdin)
        text: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Edit args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct NewlineArgs {
    /// Caret byte offset (default: end of text)
    #[arg(long)]
    pub caret: Option<usize>,
    /// Text (`-` or omitted: read stdin)
    pub text: Option<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("marker").required(true).args(["bold", "italic", "before"])))]
pub struct WrapArgs {
    /// Selection start byte offset
    #[arg(long)]
    pub start: usize,
    /// Selection end byte offset (default: same as start)
    #[arg(long)]
    pub end: Option<usize>,
    /// Use the configured bold marker
    #[arg(long)]
    pub bold: bool,
    /// Use the configured italic marker
    #[arg(long)]
    pub italic: bool,
    /// Marker inserted before the selection
    #[arg(long)]
    pub before: Option<String>,
    /// Marker inserted after the selection (default: same as --before)
    #[arg(long, requires = "before")]
    pub after: Option<String>,
    /// Text (`-` or omitted: read stdin)
    pub text: Option<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["at", "line_of"])))]
pub struct CheckArgs {
    /// Byte offset of the `- [ ]` token
    #[arg(long)]
    pub at: Option<usize>,
    /// Any byte offset on the checkbox line
    #[arg(long)]
    pub line_of: Option<usize>,
    /// Text (`-` or omitted: read stdin)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Caret byte offset (default: end of text)
    #[arg(long)]
    pub caret: Option<usize>,
    /// Extra list path to offer (repeatable)
    #[arg(long = "list", action = clap::ArgAction::Append)]
    pub lists: Vec<String>,
    /// Text (`-` or omitted: read stdin)
    pub text: Option<String>,
}
