//! Reveal-on-scroll: `.reveal` elements get the `active` class the first time
//! they intersect the viewport. Skill cards also fill their bars, each
//! `.skill-fill` taking the width named by its `data-width` attribute.

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const ACTIVE_CLASS: &str = "active";
pub const SKILL_CARD_CLASS: &str = "skill-card";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_FILL_DELAY_MS: i32 = 200;

pub fn init_scroll_animations(document: &Document) -> Result<(), JsValue> {
    let targets = document.query_selector_all(REVEAL_SELECTOR)?;
    if targets.length() == 0 {
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    if let Err(err) = reveal(&entry.target()) {
                        log!("failed to reveal element: {:?}", err);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for i in 0..targets.length() {
        if let Some(el) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    Ok(())
}

pub fn reveal(target: &Element) -> Result<(), JsValue> {
    target.class_list().add_1(ACTIVE_CLASS)?;
    if !target.class_list().contains(SKILL_CARD_CLASS) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let card = target.clone();
    let fill = Closure::wrap(Box::new(move || {
        if let Err(err) = fill_skill_bars(&card) {
            log!("failed to fill skill bars: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fill.as_ref().unchecked_ref(),
        SKILL_FILL_DELAY_MS,
    )?;
    fill.forget();
    Ok(())
}

/// Sets every `.skill-fill` inside `card` to the width in its `data-width` attribute.
pub fn fill_skill_bars(card: &Element) -> Result<(), JsValue> {
    let fills = card.query_selector_all(".skill-fill")?;
    for i in 0..fills.length() {
        let fill = match fills.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            Some(fill) => fill,
            None => continue,
        };
        if let Some(width) = fill.get_attribute("data-width") {
            fill.style().set_property("width", &width)?;
        }
    }
    Ok(())
}
