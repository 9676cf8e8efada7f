// Toast notifications pinned to the top right corner of the page

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub const NOTIFICATION_TTL_MS: i32 = 3000;
const BASE_CLASSES: &str = "fixed top-4 right-4 p-4 rounded-lg text-white z-50";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    // Unknown kinds fall back to info
    pub fn parse(kind: &str) -> NotificationKind {
        match kind {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500",
            NotificationKind::Error => "bg-red-500",
            NotificationKind::Info => "bg-blue-500",
        }
    }

    pub fn class_name(&self) -> String {
        format!("{} {}", BASE_CLASSES, self.background())
    }
}

/// Appends a notification to `<body>` and removes it after [`NOTIFICATION_TTL_MS`].
pub fn show_notification(
    document: &Document,
    message: &str,
    kind: NotificationKind,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = match document.body() {
        Some(body) => body,
        None => return Ok(()),
    };

    let notification = document.create_element("div")?;
    notification.set_class_name(&kind.class_name());
    notification.set_text_content(Some(message));
    body.append_child(&notification)?;

    let expire = Closure::wrap(Box::new(move || {
        notification.remove();
    }) as Box<dyn FnMut()>);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.as_ref().unchecked_ref(),
        NOTIFICATION_TTL_MS,
    )?;
    expire.forget();
    Ok(())
}
