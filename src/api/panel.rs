//! Panel API
//!
//! JavaScript-facing handle for the aligned side panel, plus a pure
//! layout entry point for callers that do their own measuring.

use wasm_bindgen::prelude::*;

use crate::layout::LayoutEngine;
use crate::models::{Definition, PanelMeasurements, PanelMode};
use crate::panel::{PanelController, PanelOptions};

use super::helpers;

/// A mounted aligned side panel
///
/// Construction binds to the container elements, installs listeners and
/// observers, and schedules the first layout pass. Call `detach` (or
/// let the handle be garbage collected) on page navigation.
#[wasm_bindgen]
pub struct AlignedPanel {
    controller: PanelController,
}

#[wasm_bindgen]
impl AlignedPanel {
    /// Mount the panel
    ///
    /// # Arguments
    /// * `main_content_id` - element id of the article content column
    /// * `panel_id` - element id of the outer side panel
    /// * `panel_inner_id` - element id of the positioning container
    /// * `definitions_js` - array of `{id, term, definition, source?}`
    /// * `options_js` - optional overrides for timing/layout constants
    #[wasm_bindgen(constructor)]
    pub fn new(
        main_content_id: &str,
        panel_id: &str,
        panel_inner_id: &str,
        definitions_js: JsValue,
        options_js: JsValue,
    ) -> Result<AlignedPanel, JsValue> {
        let definitions: Vec<Definition> =
            helpers::deserialize(definitions_js, "Failed to parse definitions")?;
        helpers::validate_definitions(&definitions).map_err(helpers::validation_error)?;
        let options: PanelOptions =
            helpers::deserialize_options(options_js, "Failed to parse panel options")?;

        crate::wasm_log!(
            "mounting aligned panel with {} definitions",
            definitions.len()
        );
        let controller = PanelController::mount(
            main_content_id,
            panel_id,
            panel_inner_id,
            definitions,
            options,
        )?;
        Ok(AlignedPanel { controller })
    }

    /// Toggle a definition, as if its marker or card was activated
    pub fn toggle(&self, id: &str) {
        self.controller.toggle(id);
    }

    /// Drive the active definition from an external owner (pass
    /// `null`/`undefined` to clear)
    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, id: Option<String>) {
        self.controller.set_active(id.as_deref());
    }

    /// The currently active definition id, or `null`
    #[wasm_bindgen(js_name = activeId)]
    pub fn active_id(&self) -> Option<String> {
        self.controller.active_id()
    }

    /// Whether the panel is currently in the stacked fallback mode
    #[wasm_bindgen(js_name = isStacked)]
    pub fn is_stacked(&self) -> bool {
        self.controller.mode() == PanelMode::Stacked
    }

    /// Run a layout pass immediately, bypassing the rate limits (for
    /// content swaps the observers cannot see)
    pub fn relayout(&self) {
        self.controller.relayout_now();
    }

    /// Register a callback invoked with the new active id (string or
    /// null) after every state transition
    #[wasm_bindgen(js_name = onActiveChange)]
    pub fn on_active_change(&self, callback: Option<js_sys::Function>) {
        self.controller.set_on_active_change(callback);
    }

    /// Stop listening and cancel pending work
    pub fn detach(&mut self) {
        self.controller.detach();
    }
}

/// Pure layout computation
///
/// Takes definitions, a geometry snapshot, and the optionally toggled
/// id, and returns the display list without touching the DOM. Useful
/// for callers that measure themselves and for testing style wiring.
#[wasm_bindgen(js_name = computePanelLayout)]
pub fn compute_panel_layout(
    definitions_js: JsValue,
    measurements_js: JsValue,
    last_toggled: Option<String>,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let definitions: Vec<Definition> =
        helpers::deserialize(definitions_js, "Failed to parse definitions")?;
    helpers::validate_definitions(&definitions).map_err(helpers::validation_error)?;
    let measurements: PanelMeasurements =
        helpers::deserialize(measurements_js, "Failed to parse measurements")?;
    let options: PanelOptions =
        helpers::deserialize_options(options_js, "Failed to parse panel options")?;

    let engine = LayoutEngine::with_options(options.layout_options());
    let list = engine.compute_layout(&definitions, &measurements, last_toggled.as_deref());
    helpers::serialize(&list, "Failed to serialize display list")
}
