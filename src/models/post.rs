//! Post metadata
//!
//! Frontmatter fields the panel cares about. Posts are stored as
//! markdown files with a YAML frontmatter block; the `definitions` list
//! feeds the side panel.

use serde::{Deserialize, Serialize};

use super::definition::Definition;

/// Metadata decoded from a post's YAML frontmatter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PostMeta {
    /// Post title
    #[serde(default)]
    pub title: String,

    /// Publication date, normalized to `YYYY-MM-DD` when parseable
    #[serde(default)]
    pub date: String,

    /// Language code of the post (e.g. "en", "pl")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Term definitions shown in the side panel, in panel order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
}

impl PostMeta {
    /// Look up a definition by id
    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.id == id)
    }
}
