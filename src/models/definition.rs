//! Term definition data
//!
//! Definitions are loaded once per page render from post frontmatter and
//! stay immutable for the lifetime of a reading session. The layout
//! engine positions one card per definition, in frontmatter order.

use serde::{Deserialize, Serialize};

/// A single term definition attached to a post
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Definition {
    /// Stable identifier, unique within a post. Markers in the article
    /// body reference this id via `data-def-id`.
    pub id: String,

    /// The term as it appears in the text
    pub term: String,

    /// Definition body (markdown or plain text)
    pub definition: String,

    /// Optional source/attribution line shown below the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Definition {
    /// Create a new definition without a source
    pub fn new(
        id: impl Into<String>,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
            source: None,
        }
    }

    /// DOM element id of this definition's card (`definition-<id>`)
    pub fn card_element_id(&self) -> String {
        format!("definition-{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_element_id() {
        let def = Definition::new("entropy", "Entropy", "A measure of disorder.");
        assert_eq!(def.card_element_id(), "definition-entropy");
    }

    #[test]
    fn test_source_skipped_when_absent() {
        let def = Definition::new("entropy", "Entropy", "A measure of disorder.");
        let yaml = serde_yaml::to_string(&def).unwrap();
        assert!(!yaml.contains("source"));
    }
}
