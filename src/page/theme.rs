// Light / dark theme preference, persisted under a single localStorage key

use crate::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Storage};

pub const STORAGE_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TOGGLE_ID: &str = "darkModeToggle";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    // Anything other than "dark", including nothing stored, is light
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), JsValue>;
}

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    // None when storage is disabled for the page
    pub fn open() -> Option<LocalStorage> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(LocalStorage { storage })
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        self.storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<(), JsValue> {
        self.storage.set_item(STORAGE_KEY, value)
    }
}

pub fn stored_theme(store: &dyn ThemeStore) -> Theme {
    Theme::from_stored(store.load().as_deref())
}

/// Sets or clears the dark mode class on both `<html>` and `<body>`.
pub fn apply(document: &Document, theme: Theme) -> Result<(), JsValue> {
    let dark = theme == Theme::Dark;
    if let Some(html) = document.document_element() {
        html.class_list().toggle_with_force(DARK_MODE_CLASS, dark)?;
    }
    if let Some(body) = document.body() {
        body.class_list().toggle_with_force(DARK_MODE_CLASS, dark)?;
    }
    Ok(())
}

// Theme currently shown, read back from the `<html>` class
pub fn current(document: &Document) -> Theme {
    let dark = document
        .document_element()
        .map(|html| html.class_list().contains(DARK_MODE_CLASS))
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Flips the theme shown on the page and saves the result to `store`, if there is one.
pub fn toggle(document: &Document, store: Option<&dyn ThemeStore>) -> Result<Theme, JsValue> {
    let theme = current(document).toggled();
    apply(document, theme)?;
    if let Some(store) = store {
        store.save(theme.as_str())?;
    }
    Ok(theme)
}

/// Restores the saved theme and wires up the toggle button, if the page has one.
pub fn init_dark_mode(document: &Document) -> Result<(), JsValue> {
    let store = LocalStorage::open();
    if let Some(store) = store.as_ref() {
        apply(document, stored_theme(store))?;
    }

    let button = match document.get_element_by_id(TOGGLE_ID) {
        Some(el) => el,
        None => return Ok(()),
    };

    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let store = store.as_ref().map(|s| s as &dyn ThemeStore);
        if let Err(err) = toggle(&doc, store) {
            log!("failed to toggle theme: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) -> Result<(), JsValue> {
            *self.value.borrow_mut() = Some(value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn only_dark_parses_as_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn stored_theme_reads_saved_value() {
        let store = MemoryStore::default();
        assert_eq!(stored_theme(&store), Theme::Light);
        store.save(Theme::Dark.as_str()).unwrap();
        assert_eq!(stored_theme(&store), Theme::Dark);
    }
}
