//! Post API
//!
//! Frontmatter operations for the authoring surface: parse a stored
//! post into metadata and body, compose it back on save, and derive
//! ids for newly created definitions.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::PostMeta;
use crate::parse::frontmatter;

use super::helpers;

#[derive(Serialize)]
struct ParsedPost<'a> {
    meta: &'a PostMeta,
    body: &'a str,
}

/// Parse a post source into `{meta, body}`
#[wasm_bindgen(js_name = parsePost)]
pub fn parse_post(source: &str) -> Result<JsValue, JsValue> {
    let post = frontmatter::parse_post(source)
        .map_err(|e| helpers::validation_error(format!("Failed to parse post: {}", e)))?;
    helpers::serialize(
        &ParsedPost {
            meta: &post.meta,
            body: &post.body,
        },
        "Failed to serialize parsed post",
    )
}

/// Compose metadata and body back into a post file
#[wasm_bindgen(js_name = composePost)]
pub fn compose_post(meta_js: JsValue, body: &str) -> Result<String, JsValue> {
    let meta: PostMeta = helpers::deserialize(meta_js, "Failed to parse post metadata")?;
    frontmatter::compose_post(&meta, body)
        .map_err(|e| helpers::validation_error(format!("Failed to compose post: {}", e)))
}

/// Derive an id for a new definition that does not collide with the
/// existing ids
#[wasm_bindgen(js_name = newDefinitionId)]
pub fn new_definition_id(term: &str, existing_ids_js: JsValue) -> Result<String, JsValue> {
    let existing: Vec<String> =
        helpers::deserialize_options(existing_ids_js, "Failed to parse existing ids")?;
    Ok(frontmatter::unique_slug_id(term, &existing))
}
