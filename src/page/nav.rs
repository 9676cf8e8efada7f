// Navbar turns opaque once the page is scrolled past the hero

use crate::log;
use crate::page::debounce::Debouncer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const NAV_SELECTOR: &str = ".glass-nav";
pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const DEBOUNCE_MS: i32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

impl NavStyle {
    pub const SCROLLED: NavStyle = NavStyle {
        background: "rgba(255, 255, 255, 0.95)",
        backdrop_filter: "blur(20px)",
    };
    pub const TOP: NavStyle = NavStyle {
        background: "rgba(255, 255, 255, 0.1)",
        backdrop_filter: "blur(10px)",
    };

    pub fn for_scroll(scroll_y: f64) -> NavStyle {
        if scroll_y > SCROLL_THRESHOLD {
            NavStyle::SCROLLED
        } else {
            NavStyle::TOP
        }
    }

    pub fn apply(&self, nav: &HtmlElement) -> Result<(), JsValue> {
        let style = nav.style();
        style.set_property("background", self.background)?;
        style.set_property("backdrop-filter", self.backdrop_filter)
    }
}

pub fn init_navbar(document: &Document, window: &Window) -> Result<(), JsValue> {
    let nav = match document.query_selector(NAV_SELECTOR)? {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };

    let scrolled_window = window.clone();
    let restyle = Closure::wrap(Box::new(move || {
        let scroll_y = scrolled_window.scroll_y().unwrap_or(0.0);
        if let Err(err) = NavStyle::for_scroll(scroll_y).apply(&nav) {
            log!("failed to restyle navbar: {:?}", err);
        }
    }) as Box<dyn FnMut()>);

    let debouncer = Debouncer::new(window.clone(), DEBOUNCE_MS);
    let on_scroll = Closure::wrap(Box::new(move || {
        if let Err(err) = debouncer.schedule(restyle.as_ref().unchecked_ref()) {
            log!("failed to schedule navbar restyle: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_switches_strictly_past_threshold() {
        assert_eq!(NavStyle::for_scroll(0.0), NavStyle::TOP);
        assert_eq!(NavStyle::for_scroll(100.0), NavStyle::TOP);
        assert_eq!(NavStyle::for_scroll(100.5), NavStyle::SCROLLED);
        assert_eq!(NavStyle::SCROLLED.backdrop_filter, "blur(20px)");
    }
}
