//! Event wiring
//!
//! Installs the listeners and observers that drive layout recomputes:
//! window scroll/resize, a `ResizeObserver` on the main content and the
//! positioning container, and click/keyboard activation delegated from
//! the article body. All registrations are removed on drop so a torn
//! down panel never operates on unmounted elements.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, KeyboardEvent, ResizeObserver, Window};

use super::{PanelDom, PanelError};

/// Callback invoked with the element an activation event targeted
pub type ActivateHandler = Box<dyn Fn(Element)>;

/// Installed listeners and observers, removed on drop
pub struct PanelEvents {
    window: Window,
    main_content: Element,
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
    click_cb: Closure<dyn FnMut(Event)>,
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
    observer: ResizeObserver,
    _observer_cb: Closure<dyn FnMut()>,
}

impl PanelEvents {
    /// Register all event sources
    ///
    /// `on_scroll`/`on_resize` fire per raw window event (the caller
    /// throttles); `on_settle` fires per observed size change (the
    /// caller debounces); `on_activate` fires with the target of a
    /// click, or of an `Enter`/`Space` keydown, inside the article.
    pub fn install(
        dom: &PanelDom,
        on_scroll: Box<dyn Fn()>,
        on_resize: Box<dyn Fn()>,
        on_settle: Box<dyn Fn()>,
        on_activate: ActivateHandler,
    ) -> Result<Self, PanelError> {
        let window = dom.window().clone();
        let main_content = dom.main_content().clone();

        let scroll_cb = Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>);
        let resize_cb = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
        let observer_cb = Closure::wrap(Box::new(move || on_settle()) as Box<dyn FnMut()>);

        let activate = std::rc::Rc::new(on_activate);
        let click_activate = activate.clone();
        let click_cb = Closure::wrap(Box::new(move |event: Event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                click_activate(target);
            }
        }) as Box<dyn FnMut(Event)>);

        let key_activate = activate;
        let keydown_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let key = event.key();
            if key != "Enter" && key != " " {
                return;
            }
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                event.prevent_default();
                key_activate(target);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let scroll_options = AddEventListenerOptions::new();
        scroll_options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                scroll_cb.as_ref().unchecked_ref(),
                &scroll_options,
            )
            .map_err(PanelError::from_js)?;
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;
        main_content
            .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;
        main_content
            .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;

        let observer = ResizeObserver::new(observer_cb.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;
        observer.observe(&main_content);
        observer.observe(dom.panel_inner());

        Ok(Self {
            window,
            main_content,
            scroll_cb,
            resize_cb,
            click_cb,
            keydown_cb,
            observer,
            _observer_cb: observer_cb,
        })
    }
}

impl Drop for PanelEvents {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "scroll",
            self.scroll_cb.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.resize_cb.as_ref().unchecked_ref(),
        );
        let _ = self.main_content.remove_event_listener_with_callback(
            "click",
            self.click_cb.as_ref().unchecked_ref(),
        );
        let _ = self.main_content.remove_event_listener_with_callback(
            "keydown",
            self.keydown_cb.as_ref().unchecked_ref(),
        );
        self.observer.disconnect();
    }
}
