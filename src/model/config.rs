use serde::{Deserialize, Serialize};

use crate::model::list::ListCandidate;

/// Configuration from taskmark.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub edit: EditConfig,
    /// Lists offered by `tm suggest`
    #[serde(default)]
    pub lists: Vec<ListCandidate>,
}

/// Which span kinds the tokenizer recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(default = "default_true")]
    pub hashtags: bool,
    #[serde(default = "default_true")]
    pub emphasis: bool,
    /// Display cells for hashtag labels in CLI output. 0 disables the cap.
    #[serde(default = "default_max_tag_width")]
    pub max_tag_width: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        MarkupConfig {
            hashtags: true,
            emphasis: true,
            max_tag_width: 24,
        }
    }
}

/// Marker pairs used by the bold/italic toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditConfig {
    #[serde(default = "default_bold")]
    pub bold: String,
    #[serde(default = "default_italic")]
    pub italic: String,
}

impl Default for EditConfig {
    fn default() -> Self {
        EditConfig {
            bold: default_bold(),
            italic: default_italic(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_tag_width() -> usize {
    24
}

fn default_bold() -> String {
    "**".to_string()
}

fn default_italic() -> String {
    "*".to_string()
}
