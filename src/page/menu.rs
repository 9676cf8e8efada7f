// Mobile navigation menu: the toggle button shows and hides it, following any
// link inside closes it again.

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub const TOGGLE_ID: &str = "mobileMenuToggle";
pub const MENU_ID: &str = "mobileMenu";
pub const HIDDEN_CLASS: &str = "hidden";

pub fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (toggle, menu) = match (
        document.get_element_by_id(TOGGLE_ID),
        document.get_element_by_id(MENU_ID),
    ) {
        (Some(toggle), Some(menu)) => (toggle, menu),
        _ => return Ok(()),
    };

    let toggled_menu = menu.clone();
    let on_toggle = Closure::wrap(Box::new(move || {
        if let Err(err) = toggled_menu.class_list().toggle(HIDDEN_CLASS) {
            log!("failed to toggle mobile menu: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let links = menu.query_selector_all("a")?;
    for i in 0..links.length() {
        let link = match links.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(link) => link,
            None => continue,
        };
        let closed_menu = menu.clone();
        let on_link = Closure::wrap(Box::new(move || {
            if let Err(err) = closed_menu.class_list().add_1(HIDDEN_CLASS) {
                log!("failed to close mobile menu: {:?}", err);
            }
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
        on_link.forget();
    }
    Ok(())
}
