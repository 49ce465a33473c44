//! Card positioning algorithm
//!
//! This module contains the single-pass layout computation: given a
//! fresh geometry snapshot, produce a display list that aligns every
//! definition card with its marker while guaranteeing that no two cards
//! overlap. The pass is synchronous, idempotent for unchanged geometry,
//! and never fails for content mismatches.

use serde::{Deserialize, Serialize};

use crate::models::{Definition, PanelMeasurements};

use super::display_list::{CardPlacement, PanelDisplayList};

fn default_card_margin() -> f64 {
    16.0
}

fn default_stagger_delay_ms() -> f64 {
    40.0
}

/// Tunable layout constants
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutOptions {
    /// Gap kept below each card (px)
    pub card_margin: f64,

    /// Transition delay increment for cards after the toggled one (ms)
    pub stagger_delay_ms: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            card_margin: default_card_margin(),
            stagger_delay_ms: default_stagger_delay_ms(),
        }
    }
}

/// Layout engine computing definition card placements
pub struct LayoutEngine {
    options: LayoutOptions,
}

impl LayoutEngine {
    /// Create a new layout engine with default constants
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Compute placements for every definition card
    ///
    /// Walks the definitions in panel order keeping a running cumulative
    /// offset (the bottom edge of the last placed card plus margin).
    /// Each card lands at its marker's position relative to the
    /// container, clamped so it never moves above its predecessor. A
    /// definition whose marker or card is missing gets a hidden
    /// placement and is excluded from the accumulation.
    ///
    /// `last_toggled` is the id recorded by the most recent user toggle,
    /// if this pass was triggered by one. Cards after the toggled card
    /// in panel order receive an incremental transition delay; passive
    /// passes (scroll, resize, observer) animate everything immediately.
    pub fn compute_layout(
        &self,
        definitions: &[Definition],
        measurements: &PanelMeasurements,
        last_toggled: Option<&str>,
    ) -> PanelDisplayList {
        let mut cards = Vec::with_capacity(definitions.len());

        // Bottom edge (plus margin) of the most recently placed card
        let mut cumulative_offset = 0.0f64;
        let mut max_required_height = 0.0f64;

        // Staggering: start counting only once the toggled card has
        // been passed. With no toggled id there is no stagger at all.
        let mut stagger_index = 0u32;
        let mut found_toggled = false;

        for (idx, def) in definitions.iter().enumerate() {
            let marker_top = measurements.marker_tops.get(idx).copied().flatten();
            let card_height = measurements.card_heights.get(idx).copied().flatten();

            let (Some(marker_top), Some(card_height)) = (marker_top, card_height) else {
                cards.push(CardPlacement::hidden(def.id.clone()));
                continue;
            };

            // Ideal position: marker top relative to the container,
            // clamped to prevent overlap with the previous card.
            let ideal = marker_top - measurements.panel_top;
            let offset = ideal.max(cumulative_offset);

            // Delay only cards strictly after the toggled one; the
            // first of them shifts immediately (index 0).
            let mut delay_ms = 0.0;
            if found_toggled && stagger_index > 0 {
                delay_ms = f64::from(stagger_index) * self.options.stagger_delay_ms;
            }
            if found_toggled {
                stagger_index += 1;
            }
            if last_toggled == Some(def.id.as_str()) {
                found_toggled = true;
            }

            cumulative_offset = offset + card_height + self.options.card_margin;
            max_required_height = max_required_height.max(cumulative_offset);

            cards.push(CardPlacement {
                id: def.id.clone(),
                offset,
                visible: true,
                delay_ms,
            });
        }

        let min_height = if max_required_height > 0.0 {
            Some(max_required_height - self.options.card_margin)
        } else {
            None
        };

        PanelDisplayList { cards, min_height }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
