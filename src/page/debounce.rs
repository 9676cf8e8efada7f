// Trailing edge debounce on top of window timeouts

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use web_sys::Window;

pub struct Debouncer {
    window: Window,
    wait_ms: i32,
    pending: Cell<Option<i32>>,
}

impl Debouncer {
    pub fn new(window: Window, wait_ms: i32) -> Self {
        Debouncer {
            window,
            wait_ms,
            pending: Cell::new(None),
        }
    }

    /// Runs `callback` once `wait_ms` have passed without another call,
    /// cancelling whatever was scheduled before.
    pub fn schedule(&self, callback: &js_sys::Function) -> Result<(), JsValue> {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, self.wait_ms)?;
        self.pending.set(Some(handle));
        Ok(())
    }
}
