//! Panel configuration
//!
//! Timing and layout constants, deserializable from a JavaScript
//! options object. Every field has a default, so callers only override
//! what they need.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutOptions;

/// Tunable timing, animation, and responsive constants
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PanelOptions {
    /// Throttle interval for scroll/resize recomputes (ms)
    pub event_throttle_ms: f64,

    /// Debounce interval for toggle-triggered recomputes (ms)
    pub position_debounce_ms: f64,

    /// Debounce interval for ResizeObserver-triggered recomputes (ms)
    pub observer_debounce_ms: f64,

    /// Delay before the first layout pass after mount, giving fonts
    /// and images time to settle (ms)
    pub initial_delay_ms: f64,

    /// Distance kept between the viewport top and an opened card after
    /// scrolling it into view (px)
    pub scroll_offset: f64,

    /// Gap kept below each card (px)
    pub card_margin: f64,

    /// Transition delay increment for cards after the toggled one (ms)
    pub stagger_delay_ms: f64,

    /// Viewport width below which the aligned panel gives way to the
    /// stacked fallback (px)
    pub breakpoint: f64,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            event_throttle_ms: 60.0,
            position_debounce_ms: 60.0,
            observer_debounce_ms: 80.0,
            initial_delay_ms: 150.0,
            scroll_offset: 100.0,
            card_margin: 16.0,
            stagger_delay_ms: 40.0,
            breakpoint: 1024.0,
        }
    }
}

impl PanelOptions {
    /// The subset of constants the layout engine needs
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            card_margin: self.card_margin,
            stagger_delay_ms: self.stagger_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: PanelOptions =
            serde_json::from_str(r#"{ "event_throttle_ms": 100 }"#).unwrap();
        assert_eq!(options.event_throttle_ms, 100.0);
        assert_eq!(options.card_margin, 16.0);
        assert_eq!(options.breakpoint, 1024.0);
    }
}
