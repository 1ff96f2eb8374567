use serde::{Deserialize, Serialize};

/// A task list (or sublist) that a hashtag can refer to.
///
/// Supplied by the host's list data source; only `name` and `full_path` take
/// part in matching, the rest rides along for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandidate {
    /// Leaf name, e.g. `Grocery`
    pub name: String,
    /// Slash-separated path, e.g. `Shopping/Grocery`
    pub full_path: String,
    #[serde(default)]
    pub task_count: usize,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub color: Option<String>,
}

impl ListCandidate {
    /// Candidate for a path; the name is the last path segment.
    pub fn from_path(full_path: &str) -> Self {
        let name = full_path.rsplit('/').next().unwrap_or(full_path);
        ListCandidate {
            name: name.to_string(),
            full_path: full_path.to_string(),
            task_count: 0,
            depth: full_path.matches('/').count(),
            color: None,
        }
    }
}
