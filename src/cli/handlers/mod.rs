use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigError};
use crate::model::config::Config;
use crate::model::list::ListCandidate;
use crate::model::selection::{Edit, TextSelection};
use crate::ops::{checkbox, continuation, suggest, wrap};
use crate::parse::{self, TokenizeOptions};

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgs(String),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref().map(Path::new), &cwd)?;

    match cli.command {
        Commands::Spans(args) => cmd_spans(args, &config, json),
        Commands::Tags(args) => cmd_tags(args, json),
        Commands::Newline(args) => cmd_newline(args, json),
        Commands::Wrap(args) => cmd_wrap(args, &config, json),
        Commands::Check(args) => cmd_check(args, json),
        Commands::Suggest(args) => cmd_suggest(args, &config, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The text argument, or stdin when it is omitted or `-`.
///
/// One trailing newline from stdin is dropped (what `echo` adds).
fn input_text(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            debug!(bytes = buf.len(), "read text from stdin");
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_edit(edit: &Edit, json: bool) -> Result<(), CliError> {
    if json {
        print_json(edit)
    } else {
        print!("{}", format_edit(edit));
        Ok(())
    }
}

fn print_text(text: String, json: bool) -> Result<(), CliError> {
    if json {
        print_json(&TextJson { text })
    } else {
        println!("{}", text);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_spans(args: SpansArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let text = input_text(args.text)?;
    let mut options = TokenizeOptions::from(&config.markup);
    options.hashtags &= !args.no_hashtags;
    options.emphasis &= !args.no_emphasis;

    let spans = parse::tokenize_linked(&text, options);
    if json {
        print_json(&SpansJson { spans })
    } else {
        print!("{}", format_spans(&spans, config.markup.max_tag_width));
        Ok(())
    }
}

fn cmd_tags(args: TagsCmd, json: bool) -> Result<(), CliError> {
    match args.action {
        TagsAction::Extract { text } => {
            let tags = parse::extract_hashtags(&input_text(text)?);
            if json {
                print_json(&TagsJson { tags })
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
                Ok(())
            }
        }
        TagsAction::Strip { text } => {
            print_text(parse::remove_hashtags(&input_text(text)?), json)
        }
        TagsAction::Add { list, text } => {
            if list.trim_start_matches('#').is_empty() {
                return Err(CliError::InvalidArgs("list path must not be empty".into()));
            }
            print_text(parse::add_hashtag_to_text(&input_text(text)?, &list), json)
        }
    }
}

fn cmd_newline(args: NewlineArgs, json: bool) -> Result<(), CliError> {
    let text = input_text(args.text)?;
    let caret = TextSelection::caret(args.caret.unwrap_or(text.len()));
    let edit = continuation::apply_newline(&text, caret)
        .unwrap_or_else(|| continuation::plain_newline(&text, caret));
    print_edit(&edit, json)
}

fn cmd_wrap(args: WrapArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let text = input_text(args.text)?;
    let selection = TextSelection::new(args.start, args.end.unwrap_or(args.start));

    let edit = if args.bold {
        wrap::toggle_bold(&text, selection, &config.edit)
    } else if args.italic {
        wrap::toggle_italic(&text, selection, &config.edit)
    } else if let Some(before) = args.before.as_deref() {
        let after = args.after.as_deref().unwrap_or(before);
        wrap::toggle_wrap(&text, selection, before, after)
    } else {
        return Err(CliError::InvalidArgs(
            "one of --bold, --italic or --before is required".into(),
        ));
    };
    print_edit(&edit, json)
}

fn cmd_check(args: CheckArgs, json: bool) -> Result<(), CliError> {
    let text = input_text(args.text)?;
    let offset = match (args.at, args.line_of) {
        (Some(at), _) => at,
        (None, Some(pos)) => checkbox::checkbox_offset_in_line(&text, pos).ok_or_else(|| {
            CliError::InvalidArgs(format!("no checkbox on the line at offset {}", pos))
        })?,
        (None, None) => {
            return Err(CliError::InvalidArgs("one of --at or --line-of is required".into()));
        }
    };
    print_text(checkbox::toggle_checkbox_at(&text, offset), json)
}

fn cmd_suggest(args: SuggestArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let text = input_text(args.text)?;
    let caret = args.caret.unwrap_or(text.len());

    let mut candidates = config.lists.clone();
    candidates.extend(args.lists.iter().map(|p| ListCandidate::from_path(p)));

    let query = suggest::active_query(&text, caret);
    let out = match query {
        Some(q) => {
            let m = suggest::match_query(q, &candidates);
            SuggestJson {
                query,
                has_exact_match: m.has_exact_match,
                show_create_option: m.show_create_option,
                candidates: suggest::filter_candidates(q, &candidates),
            }
        }
        None => SuggestJson {
            query: None,
            has_exact_match: false,
            show_create_option: false,
            candidates: Vec::new(),
        },
    };

    if json {
        print_json(&out)
    } else {
        print!("{}", format_suggest(&out));
        Ok(())
    }
}
