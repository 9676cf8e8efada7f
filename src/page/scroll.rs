// Smooth scrolling for in-page anchor links

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Selector for the element an anchor points at. A bare "#" points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

pub fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn init_smooth_scrolling(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(ANCHOR_SELECTOR)?;
    for i in 0..anchors.length() {
        let anchor = match anchors.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(anchor) => anchor,
            None => continue,
        };
        let doc = document.clone();
        let link = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let selector = match anchor_target(&href) {
                Some(selector) => selector,
                None => return,
            };
            match doc.query_selector(selector) {
                Ok(Some(target)) => scroll_to(&target),
                Ok(None) => {}
                Err(err) => log!("bad anchor {}: {:?}", href, err),
            }
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_fragments_have_targets() {
        assert_eq!(anchor_target("#projects"), Some("#projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
    }
}
