//! Display list for panel rendering
//!
//! This module defines the output structure of a layout pass. The
//! display list contains the pre-calculated offset, visibility, and
//! animation delay for every definition card, so the DOM adapter (or a
//! JavaScript caller) can apply styles without any layout calculations.

use serde::{Deserialize, Serialize};

/// Placement of a single definition card within the positioning container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardPlacement {
    /// Definition id this placement belongs to
    pub id: String,

    /// Vertical offset from the container top, applied as a
    /// `translateY` so the shift animates without reflow
    pub offset: f64,

    /// Whether the card is shown. `false` means its marker was not
    /// found in the current content: the card keeps its place in the
    /// panel but renders hidden and transparent.
    pub visible: bool,

    /// Transition delay in milliseconds for staggered animation
    pub delay_ms: f64,
}

impl CardPlacement {
    /// Placement for a card whose marker (or card element) is missing
    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            offset: 0.0,
            visible: false,
            delay_ms: 0.0,
        }
    }
}

/// Top-level output of a layout pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PanelDisplayList {
    /// One placement per definition, in panel order
    pub cards: Vec<CardPlacement>,

    /// Required minimum height of the positioning container so that
    /// absolutely-positioned cards do not overflow it. `None` = auto
    /// (no card was placed).
    pub min_height: Option<f64>,
}

impl PanelDisplayList {
    /// Placement for the given definition id, if present
    pub fn card(&self, id: &str) -> Option<&CardPlacement> {
        self.cards.iter().find(|c| c.id == id)
    }
}
