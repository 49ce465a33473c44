//! Aligned Side-Panel Definition Engine WASM Module
//!
//! This is the WASM module driving the blog's reading view side panel.
//! It positions each definition card so that it lines up with the term
//! that references it in the article body, keeps the alignment correct
//! across scroll, resize, and content reflow, and owns the
//! active-definition state machine.

pub mod models;
pub mod layout;
pub mod timing;
pub mod parse;
pub mod dom;
pub mod panel;
pub mod api;

// Re-export commonly used types
pub use models::definition::Definition;
pub use models::post::PostMeta;
pub use models::panel_state::{PanelMode, PanelState, Transition};
pub use layout::{LayoutEngine, LayoutOptions, PanelDisplayList};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Side panel WASM module initialized");
}
