//! DOM adapter
//!
//! Everything that touches the live DOM lives here: measuring marker
//! and card geometry into a [`PanelMeasurements`] snapshot, applying a
//! computed display list back as styles, smooth scrolling, timers, and
//! event wiring. The layout algorithm itself never sees a DOM type.

pub mod events;
pub mod scheduler;

pub use events::PanelEvents;
pub use scheduler::Timeout;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::layout::PanelDisplayList;
use crate::models::{Definition, PanelMeasurements, VerticalRect};

/// CSS selector that identifies term markers in the article body
pub const MARKER_SELECTOR: &str = "span[data-def-id]";

/// Attribute carrying a marker's definition id
pub const MARKER_ATTR: &str = "data-def-id";

/// Errors from binding the panel to the DOM
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("element not found: #{0}")]
    ElementNotFound(String),

    #[error("element #{0} is not an HTML element")]
    NotAnHtmlElement(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl PanelError {
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Handles to the three container elements the engine works against
///
/// - the main content column (marker queries, click delegation)
/// - the outer side panel (scroll visibility bounds)
/// - the inner positioning container (card offsets, min-height)
pub struct PanelDom {
    window: Window,
    document: Document,
    main_content: Element,
    panel: Element,
    panel_inner: HtmlElement,
}

impl PanelDom {
    /// Look up the container elements by id
    pub fn attach(
        main_content_id: &str,
        panel_id: &str,
        panel_inner_id: &str,
    ) -> Result<Self, PanelError> {
        let window = web_sys::window().ok_or(PanelError::NoWindow)?;
        let document = window.document().ok_or(PanelError::NoDocument)?;

        let main_content = require_element(&document, main_content_id)?;
        let panel = require_element(&document, panel_id)?;
        let panel_inner = require_element(&document, panel_inner_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PanelError::NotAnHtmlElement(panel_inner_id.to_string()))?;

        Ok(Self {
            window,
            document,
            main_content,
            panel,
            panel_inner,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn main_content(&self) -> &Element {
        &self.main_content
    }

    pub fn panel_inner(&self) -> &Element {
        &self.panel_inner
    }

    /// Current timestamp in milliseconds for the rate-limiting gates
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Current viewport width, for the responsive breakpoint check
    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Read a fresh geometry snapshot for a layout pass
    ///
    /// Marker positions are absolute document coordinates. A definition
    /// whose marker or card is missing gets `None` in the respective
    /// slot; the engine hides it. When several markers share one id the
    /// first in document order wins (`querySelector` order).
    pub fn measure(&self, definitions: &[Definition]) -> PanelMeasurements {
        let scroll_y = self.scroll_y();
        let panel_top = self.panel_inner.get_bounding_client_rect().top() + scroll_y;

        let mut marker_tops = Vec::with_capacity(definitions.len());
        let mut card_heights = Vec::with_capacity(definitions.len());

        for def in definitions {
            marker_tops.push(
                self.find_marker(&def.id)
                    .map(|el| el.get_bounding_client_rect().top() + scroll_y),
            );
            card_heights.push(
                self.card_element(&def.id)
                    .map(|el| f64::from(el.offset_height())),
            );
        }

        PanelMeasurements {
            panel_top,
            marker_tops,
            card_heights,
        }
    }

    /// Write a computed display list back onto the card elements
    pub fn apply(&self, list: &PanelDisplayList) {
        for placement in &list.cards {
            let Some(card) = self.card_element(&placement.id) else {
                continue;
            };
            let style = card.style();
            if placement.visible {
                let _ = style.set_property("position", "absolute");
                let _ = style.set_property("left", "0");
                let _ = style.set_property("right", "0");
                // Translate instead of `top` so the shift animates
                // without triggering layout.
                let _ = style.set_property(
                    "transform",
                    &format!("translateY({}px)", placement.offset),
                );
                let _ = style.set_property("visibility", "visible");
                let _ = style.set_property("opacity", "1");
                let _ =
                    style.set_property("transition-delay", &format!("{}ms", placement.delay_ms));
            } else {
                let _ = style.set_property("visibility", "hidden");
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", "translateY(0px)");
                let _ = style.set_property("transition-delay", "0ms");
            }
        }

        let inner_style = self.panel_inner.style();
        match list.min_height {
            Some(px) => {
                let _ = inner_style.set_property("min-height", &format!("{px}px"));
            }
            None => {
                let _ = inner_style.remove_property("min-height");
            }
        }
    }

    /// Rects and scroll state for the scroll-into-view decision
    pub fn scroll_rects(&self, id: &str) -> Option<(VerticalRect, VerticalRect, f64, f64)> {
        let card = self.card_element(id)?;
        let card_rect = card.get_bounding_client_rect();
        let panel_rect = self.panel.get_bounding_client_rect();
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        Some((
            VerticalRect::new(card_rect.top(), card_rect.height()),
            VerticalRect::new(panel_rect.top(), panel_rect.height()),
            self.scroll_y(),
            viewport_height,
        ))
    }

    /// Smoothly scroll the page to an absolute position
    pub fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Resolve the marker id for an activation event target, walking up
    /// from the clicked node to the closest marker span.
    pub fn marker_id_for_target(&self, target: &Element) -> Option<String> {
        let marker = target.closest(MARKER_SELECTOR).ok().flatten()?;
        marker.get_attribute(MARKER_ATTR)
    }

    fn find_marker(&self, id: &str) -> Option<Element> {
        // Ids come from frontmatter slugs; anything that would break
        // out of the attribute selector is treated as missing.
        if id.contains(['"', '\\']) {
            return None;
        }
        self.main_content
            .query_selector(&format!("span[{MARKER_ATTR}=\"{id}\"]"))
            .ok()
            .flatten()
    }

    fn card_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(&format!("definition-{id}"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

fn require_element(document: &Document, id: &str) -> Result<Element, PanelError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PanelError::ElementNotFound(id.to_string()))
}
