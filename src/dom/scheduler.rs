//! One-shot timers
//!
//! Thin wrapper over `setTimeout`/`clearTimeout` used to arm the
//! deadlines computed by the rate-limiting gates. Dropping a `Timeout`
//! clears it, so replacing the stored handle both cancels the old timer
//! and arms the new one.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::PanelError;

/// A pending `setTimeout` callback, cleared on drop
pub struct Timeout {
    window: Window,
    id: i32,
    // Keeps the callback alive until the timer fires or is cleared
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Arm a timer `delay_ms` from now
    pub fn new<F>(window: &Window, delay_ms: f64, callback: F) -> Result<Self, PanelError>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms.max(0.0).round() as i32,
            )
            .map_err(PanelError::from_js)?;
        Ok(Self {
            window: window.clone(),
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}
