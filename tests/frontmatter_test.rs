// Frontmatter parsing and composing across realistic post files

use marginalia_wasm::parse::frontmatter::{
    compose_post, parse_post, unique_slug_id, FrontmatterError,
};
use marginalia_wasm::Definition;

const POST: &str = r#"---
title: "Maps of Meaning"
date: 2023-11-02
lang: pl
definitions:
  - id: semiosis
    term: Semioza
    definition: Proces tworzenia znaczeń ze znaków.
    source: Peirce
  - id: umwelt
    term: Umwelt
    definition: Świat przeżywany danego organizmu.
---

Wprowadzenie z <span data-def-id="semiosis">semiozą</span> w tekście.

## Sekcja

Dalszy ciąg z <span data-def-id="umwelt">umweltem</span>.
"#;

#[test]
fn test_parse_full_post() {
    let post = parse_post(POST).unwrap();
    assert_eq!(post.meta.title, "Maps of Meaning");
    assert_eq!(post.meta.date, "2023-11-02");
    assert_eq!(post.meta.lang.as_deref(), Some("pl"));
    assert_eq!(post.meta.definitions.len(), 2);
    assert_eq!(post.meta.definitions[1].id, "umwelt");
    assert!(post.body.starts_with("Wprowadzenie"));
    assert!(post.body.contains("## Sekcja"));
}

#[test]
fn test_definition_lookup_by_id() {
    let post = parse_post(POST).unwrap();
    let def = post.meta.definition("semiosis").unwrap();
    assert_eq!(def.term, "Semioza");
    assert_eq!(def.source.as_deref(), Some("Peirce"));
    assert!(post.meta.definition("missing").is_none());
}

#[test]
fn test_post_without_definitions_is_valid() {
    let post = parse_post("---\ntitle: Plain\ndate: 2024-01-01\n---\nJust text.\n").unwrap();
    assert!(post.meta.definitions.is_empty());
    assert_eq!(post.body.trim_end(), "Just text.");
}

#[test]
fn test_body_may_contain_fence_lines() {
    let source = "---\ntitle: Fences\n---\nIntro\n\n---\n\nOutro after a thematic break.\n";
    let post = parse_post(source).unwrap();
    assert!(post.body.contains("Outro after a thematic break."));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_post("no frontmatter here"),
        Err(FrontmatterError::MissingFence)
    ));
    assert!(matches!(
        parse_post("---\ntitle: open ended\n"),
        Err(FrontmatterError::UnterminatedBlock)
    ));
    assert!(parse_post("---\ntitle: [broken\n---\nbody").is_err());
}

#[test]
fn test_compose_then_parse_roundtrip() {
    let original = parse_post(POST).unwrap();
    let composed = compose_post(&original.meta, &original.body).unwrap();
    let reparsed = parse_post(&composed).unwrap();

    assert_eq!(reparsed.meta, original.meta);
    assert_eq!(reparsed.body.trim_end(), original.body.trim_end());
}

#[test]
fn test_compose_rejects_duplicate_ids() {
    let mut meta = parse_post(POST).unwrap().meta;
    meta.definitions.push(Definition::new("umwelt", "Umwelt", "again"));
    assert!(matches!(
        compose_post(&meta, "body"),
        Err(FrontmatterError::DuplicateId(id)) if id == "umwelt"
    ));
}

#[test]
fn test_new_definition_ids_avoid_collisions() {
    let existing = vec!["umwelt".to_string(), "semiosis".to_string()];
    assert_eq!(unique_slug_id("Umwelt", &existing), "umwelt-2");
    assert_eq!(unique_slug_id("Sign Relation", &existing), "sign-relation");
    assert_eq!(unique_slug_id("!!!", &existing), "term-2");
}
