//! Side Panel WASM API
//!
//! This module provides the JavaScript-facing API for the side panel
//! engine. It includes shared utilities for serialization, validation,
//! and error handling, as well as the API functions organized by
//! functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `panel`: The mounted panel handle and the pure layout entry point
//! - `post`: Frontmatter parsing and composing for the authoring surface

pub mod helpers;
pub mod panel;
pub mod post;

// Re-export the public API surface
pub use panel::{compute_panel_layout, AlignedPanel};
pub use post::{compose_post, new_definition_id, parse_post};
