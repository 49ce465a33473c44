//! YAML frontmatter parsing
//!
//! Posts are markdown files opening with a `---` fenced YAML block. The
//! block carries the title, date, language, and the definitions list
//! that feeds the side panel. Parsing splits the fences and decodes the
//! metadata; composing re-serializes it for the authoring save path.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Definition, PostMeta};

const FENCE: &str = "---";

/// Errors from parsing or composing a post file
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("post does not start with a frontmatter fence")]
    MissingFence,

    #[error("frontmatter block is not terminated")]
    UnterminatedBlock,

    #[error("invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("definition {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate definition id: {0}")]
    DuplicateId(String),
}

/// A parsed post: decoded metadata plus the markdown body
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub meta: PostMeta,
    pub body: String,
}

/// Split a post source into frontmatter metadata and markdown body
///
/// The source must open with a `---` fence line; the metadata is
/// validated (non-empty, unique definition ids) and the date is
/// normalized to `YYYY-MM-DD` when it parses as a date.
pub fn parse_post(source: &str) -> Result<Post, FrontmatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let rest = source
        .strip_prefix(FENCE)
        .filter(|r| r.is_empty() || r.starts_with('\n') || r.starts_with("\r\n"))
        .ok_or(FrontmatterError::MissingFence)?;

    let (yaml, body) = split_at_closing_fence(rest)?;

    let mut meta: PostMeta = serde_yaml::from_str(yaml)?;
    validate_definitions(&meta.definitions)?;
    meta.date = normalize_date(&meta.date);

    Ok(Post {
        meta,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

/// Serialize metadata and body back into a post file
pub fn compose_post(meta: &PostMeta, body: &str) -> Result<String, FrontmatterError> {
    validate_definitions(&meta.definitions)?;
    let yaml = serde_yaml::to_string(meta)?;
    Ok(format!("{FENCE}\n{yaml}{FENCE}\n\n{}\n", body.trim_end()))
}

/// Derive a kebab-case definition id from a term
///
/// Lowercases, maps non-alphanumeric runs to single dashes, trims the
/// ends. Returns an empty string for terms with no usable characters;
/// callers treat that as "no id" and must supply one.
pub fn slug_id(term: &str) -> String {
    let mut slug = String::with_capacity(term.len());
    let mut pending_dash = false;
    for ch in term.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Derive an id for a new definition that does not collide with the
/// existing ones, suffixing `-2`, `-3`, ... as needed.
pub fn unique_slug_id(term: &str, existing: &[String]) -> String {
    let base = slug_id(term);
    let taken: HashSet<&str> = existing.iter().map(String::as_str).collect();
    if !base.is_empty() && !taken.contains(base.as_str()) {
        return base;
    }
    let base = if base.is_empty() { "term".to_string() } else { base };
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

fn split_at_closing_fence(rest: &str) -> Result<(&str, &str), FrontmatterError> {
    // Walk line starts so a "---" inside YAML string content on the
    // same line as other text is not mistaken for the closing fence.
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if offset > 0 && trimmed == FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(FrontmatterError::UnterminatedBlock)
}

fn validate_definitions(definitions: &[Definition]) -> Result<(), FrontmatterError> {
    let mut seen = HashSet::new();
    for (index, def) in definitions.iter().enumerate() {
        if def.id.trim().is_empty() {
            return Err(FrontmatterError::EmptyId { index });
        }
        if !seen.insert(def.id.as_str()) {
            return Err(FrontmatterError::DuplicateId(def.id.clone()));
        }
    }
    Ok(())
}

#[cfg(feature = "chrono")]
fn normalize_date(date: &str) -> String {
    use chrono::NaiveDate;

    let date = date.trim();
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%B %e, %Y"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, format) {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }
    date.to_string()
}

#[cfg(not(feature = "chrono"))]
fn normalize_date(date: &str) -> String {
    date.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"---
title: On Entropy
date: 2024/03/05
lang: en
definitions:
  - id: entropy
    term: Entropy
    definition: A measure of disorder.
    source: Clausius, 1865
  - id: free-energy
    term: Free energy
    definition: Energy available to do work.
---

Some *markdown* with <span data-def-id="entropy">entropy</span>.
"#;

    #[test]
    fn test_parse_post() {
        let post = parse_post(SOURCE).unwrap();
        assert_eq!(post.meta.title, "On Entropy");
        assert_eq!(post.meta.lang.as_deref(), Some("en"));
        assert_eq!(post.meta.definitions.len(), 2);
        assert_eq!(post.meta.definitions[0].source.as_deref(), Some("Clausius, 1865"));
        assert!(post.body.starts_with("Some *markdown*"));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_date_normalized() {
        let post = parse_post(SOURCE).unwrap();
        assert_eq!(post.meta.date, "2024-03-05");
    }

    #[test]
    fn test_missing_fence() {
        assert!(matches!(
            parse_post("title: nope\n"),
            Err(FrontmatterError::MissingFence)
        ));
    }

    #[test]
    fn test_unterminated_block() {
        assert!(matches!(
            parse_post("---\ntitle: nope\n"),
            Err(FrontmatterError::UnterminatedBlock)
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let source = "---\ndefinitions:\n  - id: a\n    term: A\n    definition: x\n  - id: a\n    term: B\n    definition: y\n---\nbody\n";
        assert!(matches!(
            parse_post(source),
            Err(FrontmatterError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let source = "---\ndefinitions:\n  - id: \"\"\n    term: A\n    definition: x\n---\nbody\n";
        assert!(matches!(
            parse_post(source),
            Err(FrontmatterError::EmptyId { index: 0 })
        ));
    }

    #[test]
    fn test_compose_roundtrip() {
        let post = parse_post(SOURCE).unwrap();
        let composed = compose_post(&post.meta, &post.body).unwrap();
        let reparsed = parse_post(&composed).unwrap();
        assert_eq!(reparsed.meta, post.meta);
        assert_eq!(reparsed.body.trim_end(), post.body.trim_end());
    }

    #[test]
    fn test_slug_id() {
        assert_eq!(slug_id("Free Energy"), "free-energy");
        assert_eq!(slug_id("  l'Hôpital's rule "), "l-hôpital-s-rule");
        assert_eq!(slug_id("§§"), "");
    }

    #[test]
    fn test_unique_slug_id() {
        let existing = vec!["entropy".to_string(), "entropy-2".to_string()];
        assert_eq!(unique_slug_id("Entropy", &existing), "entropy-3");
        assert_eq!(unique_slug_id("Enthalpy", &existing), "enthalpy");
    }
}
