//! Panel controller
//!
//! Owns the active-definition state and orchestrates the layout engine.
//! Raw events (scroll, resize, observer, activation) arrive from the
//! DOM wiring, pass through the rate-limiting gates, and collapse into
//! single layout passes that always read fresh geometry. There is one
//! state owner: markers, cards, and external callers all route through
//! the same transitions.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::dom::{PanelDom, PanelError, PanelEvents, Timeout};
use crate::layout::{scroll_target, LayoutEngine, ScrollContext};
use crate::models::{Definition, PanelMode, PanelState, Transition};
use crate::timing::{Debounce, Throttle};

use super::options::PanelOptions;

/// Orchestrates the aligned side panel for one mounted article
pub struct PanelController {
    inner: Rc<RefCell<Inner>>,
    events: Option<PanelEvents>,
}

struct Inner {
    definitions: Vec<Definition>,
    options: PanelOptions,
    engine: LayoutEngine,
    state: PanelState,
    mode: PanelMode,
    dom: PanelDom,
    throttle: Throttle,
    toggle_debounce: Debounce,
    observer_debounce: Debounce,
    throttle_timer: Option<Timeout>,
    toggle_timer: Option<Timeout>,
    observer_timer: Option<Timeout>,
    initial_timer: Option<Timeout>,
    on_active_change: Option<js_sys::Function>,
}

/// Which debounce gate a settle-style trigger goes through
#[derive(Clone, Copy)]
enum SettleGate {
    Toggle,
    Observer,
}

impl PanelController {
    /// Bind the panel to the DOM and start listening
    ///
    /// Installs scroll/resize listeners, a ResizeObserver on the main
    /// content and the positioning container, activation delegation on
    /// the article body, and one delayed first pass. With no
    /// definitions nothing is installed and the controller is inert.
    pub fn mount(
        main_content_id: &str,
        panel_id: &str,
        panel_inner_id: &str,
        definitions: Vec<Definition>,
        options: PanelOptions,
    ) -> Result<Self, PanelError> {
        let dom = PanelDom::attach(main_content_id, panel_id, panel_inner_id)?;
        let mode = mode_for_width(dom.viewport_width(), options.breakpoint);

        let inner = Rc::new(RefCell::new(Inner {
            engine: LayoutEngine::with_options(options.layout_options()),
            state: PanelState::new(),
            mode,
            throttle: Throttle::new(options.event_throttle_ms),
            toggle_debounce: Debounce::new(options.position_debounce_ms),
            observer_debounce: Debounce::new(options.observer_debounce_ms),
            throttle_timer: None,
            toggle_timer: None,
            observer_timer: None,
            initial_timer: None,
            on_active_change: None,
            definitions,
            options,
            dom,
        }));

        if inner.borrow().definitions.is_empty() {
            return Ok(Self {
                inner,
                events: None,
            });
        }

        let events = {
            let inner_ref = inner.borrow();

            let scroll_rc = Rc::downgrade(&inner);
            let resize_rc = Rc::downgrade(&inner);
            let settle_rc = Rc::downgrade(&inner);
            let activate_rc = Rc::downgrade(&inner);

            PanelEvents::install(
                &inner_ref.dom,
                Box::new(move || {
                    if let Some(rc) = scroll_rc.upgrade() {
                        schedule_throttled(&rc);
                    }
                }),
                Box::new(move || {
                    if let Some(rc) = resize_rc.upgrade() {
                        handle_resize(&rc);
                    }
                }),
                Box::new(move || {
                    if let Some(rc) = settle_rc.upgrade() {
                        schedule_settled(&rc, SettleGate::Observer);
                    }
                }),
                Box::new(move |target| {
                    if let Some(rc) = activate_rc.upgrade() {
                        let id = rc.borrow().dom.marker_id_for_target(&target);
                        if let Some(id) = id {
                            apply_transition_from(&rc, |state| state.toggle(&id));
                        }
                    }
                }),
            )?
        };

        // First pass shortly after mount, so late layout shifts from
        // fonts and images land before cards are positioned.
        let weak = Rc::downgrade(&inner);
        let initial = {
            let inner_ref = inner.borrow();
            Timeout::new(
                inner_ref.dom.window(),
                inner_ref.options.initial_delay_ms,
                move || {
                    if let Some(rc) = weak.upgrade() {
                        relayout(&mut rc.borrow_mut());
                    }
                },
            )?
        };
        inner.borrow_mut().initial_timer = Some(initial);

        Ok(Self {
            inner,
            events: Some(events),
        })
    }

    /// Toggle a definition, as if its marker or card was activated
    pub fn toggle(&self, id: &str) {
        let id = id.to_string();
        apply_transition_from(&self.inner, move |state| state.toggle(&id));
    }

    /// Drive the active definition from an external owner
    pub fn set_active(&self, id: Option<&str>) {
        let id = id.map(str::to_string);
        apply_transition_from(&self.inner, move |state| state.set_active(id.as_deref()));
    }

    /// The currently active definition, if any
    pub fn active_id(&self) -> Option<String> {
        self.inner.borrow().state.active_id().map(str::to_string)
    }

    /// Current presentation mode
    pub fn mode(&self) -> PanelMode {
        self.inner.borrow().mode
    }

    /// Run a layout pass immediately, bypassing the gates
    pub fn relayout_now(&self) {
        relayout(&mut self.inner.borrow_mut());
    }

    /// Callback invoked with the new active id (string or null) after
    /// every state transition
    pub fn set_on_active_change(&self, callback: Option<js_sys::Function>) {
        self.inner.borrow_mut().on_active_change = callback;
    }

    /// Stop listening and cancel all pending work
    ///
    /// Safe to call more than once; the controller is inert afterwards.
    pub fn detach(&mut self) {
        self.events = None;
        let mut inner = self.inner.borrow_mut();
        inner.throttle.cancel();
        inner.toggle_debounce.cancel();
        inner.observer_debounce.cancel();
        drop(inner.throttle_timer.take());
        drop(inner.toggle_timer.take());
        drop(inner.observer_timer.take());
        drop(inner.initial_timer.take());
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        self.detach();
    }
}

fn mode_for_width(width: f64, breakpoint: f64) -> PanelMode {
    if width < breakpoint {
        PanelMode::Stacked
    } else {
        PanelMode::Aligned
    }
}

/// One synchronous layout pass: measure, compute, apply
fn relayout(inner: &mut Inner) {
    if inner.mode == PanelMode::Stacked || inner.definitions.is_empty() {
        return;
    }
    let last_toggled = inner.state.take_last_toggled();
    let measurements = inner.dom.measure(&inner.definitions);
    let list =
        inner
            .engine
            .compute_layout(&inner.definitions, &measurements, last_toggled.as_deref());
    inner.dom.apply(&list);
    inner.state.set_min_height(list.min_height);
}

/// Route a scroll/resize event through the throttle gate
fn schedule_throttled(rc: &Rc<RefCell<Inner>>) {
    let mut inner = rc.borrow_mut();
    if inner.mode == PanelMode::Stacked {
        return;
    }
    let now = inner.dom.now();
    let Some(deadline) = inner.throttle.call(now) else {
        return;
    };
    let weak = Rc::downgrade(rc);
    let timer = Timeout::new(inner.dom.window(), deadline - now, move || {
        if let Some(rc) = weak.upgrade() {
            let mut inner = rc.borrow_mut();
            if inner.throttle.fire() {
                relayout(&mut inner);
            }
        }
    });
    match timer {
        Ok(timer) => inner.throttle_timer = Some(timer),
        Err(err) => {
            inner.throttle.cancel();
            log::warn!("failed to arm throttle timer: {err}");
        }
    }
}

/// Route a settle-style trigger (toggle, observer) through its debounce
/// gate, re-arming the timer on every call.
fn schedule_settled(rc: &Rc<RefCell<Inner>>, gate: SettleGate) {
    let mut inner = rc.borrow_mut();
    if inner.mode == PanelMode::Stacked {
        return;
    }
    let now = inner.dom.now();
    let deadline = match gate {
        SettleGate::Toggle => inner.toggle_debounce.call(now),
        SettleGate::Observer => inner.observer_debounce.call(now),
    };
    let weak = Rc::downgrade(rc);
    let timer = Timeout::new(inner.dom.window(), deadline - now, move || {
        if let Some(rc) = weak.upgrade() {
            let mut inner = rc.borrow_mut();
            let now = inner.dom.now();
            let run = match gate {
                SettleGate::Toggle => inner.toggle_debounce.fire(now),
                SettleGate::Observer => inner.observer_debounce.fire(now),
            };
            if run {
                relayout(&mut inner);
            }
        }
    });
    match timer {
        Ok(timer) => match gate {
            SettleGate::Toggle => inner.toggle_timer = Some(timer),
            SettleGate::Observer => inner.observer_timer = Some(timer),
        },
        Err(err) => {
            match gate {
                SettleGate::Toggle => inner.toggle_debounce.cancel(),
                SettleGate::Observer => inner.observer_debounce.cancel(),
            }
            log::warn!("failed to arm debounce timer: {err}");
        }
    }
}

/// Window resize: recheck the breakpoint, then throttle the recompute.
/// Active state carries across mode changes, so returning to the
/// aligned mode re-applies it on the next pass.
fn handle_resize(rc: &Rc<RefCell<Inner>>) {
    {
        let mut inner = rc.borrow_mut();
        let mode = mode_for_width(inner.dom.viewport_width(), inner.options.breakpoint);
        inner.mode = mode;
    }
    schedule_throttled(rc);
}

/// Apply a state transition and its side effects: debounced relayout,
/// an immediate scroll when something new opened, and the active-change
/// callback. The callback runs after the borrow is released so it may
/// call back into the controller.
fn apply_transition_from<F>(rc: &Rc<RefCell<Inner>>, transition: F)
where
    F: FnOnce(&mut PanelState) -> Transition,
{
    let (callback, active_js, scroll_top) = {
        let mut inner = rc.borrow_mut();
        let transition = transition(&mut inner.state);
        if transition == Transition::Unchanged {
            return;
        }

        let scroll_top = match (&transition, inner.mode) {
            (Transition::Opened(id), PanelMode::Aligned) => {
                inner
                    .dom
                    .scroll_rects(id)
                    .and_then(|(card, panel, scroll_y, viewport_height)| {
                        scroll_target(&ScrollContext {
                            card,
                            panel,
                            scroll_y,
                            viewport_height,
                            top_offset: inner.options.scroll_offset,
                        })
                    })
            }
            _ => None,
        };

        let active_js = match inner.state.active_id() {
            Some(id) => JsValue::from_str(id),
            None => JsValue::NULL,
        };
        (inner.on_active_change.clone(), active_js, scroll_top)
    };

    schedule_settled(rc, SettleGate::Toggle);

    if let Some(top) = scroll_top {
        rc.borrow().dom.scroll_to(top);
    }
    if let Some(callback) = callback {
        if let Err(err) = callback.call1(&JsValue::NULL, &active_js) {
            log::warn!("active-change callback failed: {err:?}");
        }
    }
}
