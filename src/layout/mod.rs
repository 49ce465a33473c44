//! Panel Layout Engine
//!
//! This module computes the aligned side panel layout, producing a
//! display list with offsets, visibility, and animation delays for the
//! DOM adapter (or a JavaScript caller) to apply.

pub mod display_list;
pub mod engine;
pub mod scroll;

pub use display_list::{CardPlacement, PanelDisplayList};
pub use engine::{LayoutEngine, LayoutOptions};
pub use scroll::{scroll_target, ScrollContext};
