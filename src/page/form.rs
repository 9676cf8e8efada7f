// Contact form submission. There is no endpoint yet, so a send is simulated:
// the submit button shows a sending state and a success toast follows.

use crate::log;
use crate::page::notify::{show_notification, NotificationKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const SUBMIT_DELAY_MS: i32 = 2000;

/// Puts the submit button into its sending state, then after [`SUBMIT_DELAY_MS`]
/// shows the success toast, resets the form and restores the button.
pub fn handle_form_submission(
    document: &Document,
    form: &HtmlFormElement,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let button = form
        .query_selector(SUBMIT_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let label = button.as_ref().and_then(|b| b.text_content());
    if let Some(button) = button.as_ref() {
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);
    }

    let doc = document.clone();
    let sent_form = form.clone();
    let finish = Closure::wrap(Box::new(move || {
        if let Err(err) = show_notification(&doc, SUCCESS_MESSAGE, NotificationKind::Success) {
            log!("failed to show notification: {:?}", err);
        }
        sent_form.reset();
        if let Some(button) = button.as_ref() {
            button.set_text_content(label.as_deref());
            button.set_disabled(false);
        }
    }) as Box<dyn FnMut()>);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        finish.as_ref().unchecked_ref(),
        SUBMIT_DELAY_MS,
    )?;
    finish.forget();
    Ok(())
}

// Hooks the contact form's submit event, when the page has one
pub fn init_contact_form(document: &Document) -> Result<(), JsValue> {
    let form = match document.get_element_by_id(CONTACT_FORM_ID) {
        Some(el) => el.dyn_into::<HtmlFormElement>()?,
        None => return Ok(()),
    };

    let doc = document.clone();
    let submitted = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Err(err) = handle_form_submission(&doc, &submitted) {
            log!("form submission failed: {:?}", err);
        }
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}
