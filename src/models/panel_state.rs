//! Panel interaction state
//!
//! This module contains the active-definition state machine for the
//! aligned side panel. The state lives here, in one place; markers,
//! cards, and any external click source all route their activations
//! through the same transitions.
//!
//! This is the WASM-owned source of truth for panel state.

use serde::{Deserialize, Serialize};

/// Presentation mode of the definitions panel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    /// Desktop: cards positioned beside the article, vertically synced
    Aligned,

    /// Narrow viewports: definitions stack below the article as
    /// independently collapsible sections; the layout engine does not run
    Stacked,
}

/// Result of a state transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A definition became the active one (from idle or from another id)
    Opened(String),

    /// The active definition was toggled off
    Closed,

    /// The transition was a no-op
    Unchanged,
}

/// Complete panel interaction state
///
/// At most one definition is active at a time. `last_toggled` is a
/// single slot consumed by exactly one layout pass to decide animation
/// staggering; if two toggles land before a pass runs, only the most
/// recent is honored.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    active_id: Option<String>,
    last_toggled: Option<String>,
    min_height: Option<f64>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active (forced open) definition, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Whether the given definition is the active one
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Apply a user toggle: the same id closes, a different id replaces
    /// the active definition directly (no intermediate idle state).
    pub fn toggle(&mut self, id: &str) -> Transition {
        if self.is_active(id) {
            self.active_id = None;
            self.last_toggled = None;
            Transition::Closed
        } else {
            self.active_id = Some(id.to_string());
            self.last_toggled = Some(id.to_string());
            Transition::Opened(id.to_string())
        }
    }

    /// Drive the active id from an external owner (controlled usage)
    pub fn set_active(&mut self, id: Option<&str>) -> Transition {
        if self.active_id.as_deref() == id {
            return Transition::Unchanged;
        }
        match id {
            Some(id) => {
                self.active_id = Some(id.to_string());
                self.last_toggled = Some(id.to_string());
                Transition::Opened(id.to_string())
            }
            None => {
                self.active_id = None;
                self.last_toggled = None;
                Transition::Closed
            }
        }
    }

    /// Consume the pending toggled id for one layout pass
    pub fn take_last_toggled(&mut self) -> Option<String> {
        self.last_toggled.take()
    }

    /// Minimum height of the positioning container, `None` = auto
    pub fn min_height(&self) -> Option<f64> {
        self.min_height
    }

    pub fn set_min_height(&mut self, min_height: Option<f64>) {
        self.min_height = min_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_from_idle() {
        let mut state = PanelState::new();
        assert_eq!(state.toggle("a"), Transition::Opened("a".to_string()));
        assert!(state.is_active("a"));
    }

    #[test]
    fn test_toggle_same_id_closes() {
        let mut state = PanelState::new();
        state.toggle("a");
        assert_eq!(state.toggle("a"), Transition::Closed);
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn test_toggle_replaces_without_idle() {
        let mut state = PanelState::new();
        state.toggle("a");
        assert_eq!(state.toggle("b"), Transition::Opened("b".to_string()));
        assert!(state.is_active("b"));
        assert!(!state.is_active("a"));
    }

    #[test]
    fn test_last_toggled_consumed_once() {
        let mut state = PanelState::new();
        state.toggle("a");
        assert_eq!(state.take_last_toggled(), Some("a".to_string()));
        assert_eq!(state.take_last_toggled(), None);
    }

    #[test]
    fn test_last_toggled_single_slot() {
        // Two toggles before a pass: only the most recent is honored.
        let mut state = PanelState::new();
        state.toggle("a");
        state.toggle("b");
        assert_eq!(state.take_last_toggled(), Some("b".to_string()));
    }

    #[test]
    fn test_set_active_noop() {
        let mut state = PanelState::new();
        state.toggle("a");
        assert_eq!(state.set_active(Some("a")), Transition::Unchanged);
        assert_eq!(state.set_active(None), Transition::Closed);
        assert_eq!(state.set_active(None), Transition::Unchanged);
    }
}
