//! Geometry snapshot types
//!
//! The layout engine never touches the DOM directly. The DOM adapter
//! reads marker and card geometry into these types immediately before a
//! pass, so the pure algorithm always works from a fresh snapshot and
//! can be exercised in tests without a browser.

use serde::{Deserialize, Serialize};

/// Vertical extent of an element in viewport coordinates (CSS pixels)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct VerticalRect {
    /// Distance from the viewport top to the element top
    pub top: f64,

    /// Rendered height
    pub height: f64,
}

impl VerticalRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Distance from the viewport top to the element bottom
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometry snapshot for one layout pass
///
/// Marker tops are absolute document coordinates (viewport top plus
/// scroll offset). Both vectors are parallel to the definitions array;
/// `None` means the element was not found in the current content.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PanelMeasurements {
    /// Absolute document top of the positioning container
    pub panel_top: f64,

    /// Absolute document top of each definition's marker
    pub marker_tops: Vec<Option<f64>>,

    /// Rendered height of each definition's card, measured with the
    /// current open/closed state already applied
    pub card_heights: Vec<Option<f64>>,
}

impl PanelMeasurements {
    /// Snapshot with no markers or cards found (every card hides)
    pub fn empty(definition_count: usize) -> Self {
        Self {
            panel_top: 0.0,
            marker_tops: vec![None; definition_count],
            card_heights: vec![None; definition_count],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_rect_bottom() {
        let rect = VerticalRect::new(120.0, 80.0);
        assert_eq!(rect.bottom(), 200.0);
    }

    #[test]
    fn test_empty_measurements() {
        let m = PanelMeasurements::empty(3);
        assert_eq!(m.marker_tops, vec![None, None, None]);
        assert_eq!(m.card_heights.len(), 3);
    }
}
