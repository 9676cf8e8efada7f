// Console logging helpers. Off the browser these do nothing, so native tests
// never reach the JS imports.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::timer::log_str(&format!( $( $t )* ))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn log_str(message: &str) {
    console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_str(_message: &str) {}

// Times its own lifetime with console.time / console.timeEnd
pub struct Timer<'a> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
    }
}

// Frame timer that only exists with the `frame-timing` feature
#[cfg(feature = "frame-timing")]
pub fn frame_timer(name: &str) -> Option<Timer<'_>> {
    Some(Timer::new(name))
}

#[cfg(not(feature = "frame-timing"))]
pub fn frame_timer(_name: &str) -> Option<Timer<'_>> {
    None
}
