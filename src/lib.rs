pub mod color;
pub mod config;
pub mod field;
pub mod page;
pub mod particle;
pub mod random;
mod render_loop;
pub mod sketch;
pub mod surface;
pub mod timer;

use wasm_bindgen::prelude::*;

pub use crate::color::Color;
pub use crate::config::FieldConfig;
pub use crate::field::{Link, ParticleField};
pub use crate::particle::Particle;
pub use crate::random::{RandomSource, RngSource};
pub use crate::sketch::{Host, ParticleSketch, Sketch};
pub use crate::surface::{CanvasSurface, Surface};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Mounts the background particle field into the element with id `container_id`
#[wasm_bindgen]
pub fn start_particles(container_id: &str) -> Result<(), JsValue> {
    render_loop::start(container_id, FieldConfig::default())
}

#[wasm_bindgen]
pub fn start_particles_with_count(container_id: &str, particle_count: u32) -> Result<(), JsValue> {
    let config = FieldConfig::default().with_particle_count(particle_count as usize);
    render_loop::start(container_id, config)
}

// Wires every page behaviour whose elements are present
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = document()?;
    page::theme::init_dark_mode(&document)?;
    page::menu::init_mobile_menu(&document)?;
    page::reveal::init_scroll_animations(&document)?;
    page::scroll::init_smooth_scrolling(&document)?;
    page::nav::init_navbar(&document, &window)?;
    page::form::init_contact_form(&document)
}

#[wasm_bindgen]
pub fn handle_form_submission(form: web_sys::HtmlFormElement) -> Result<(), JsValue> {
    let document = document()?;
    page::form::handle_form_submission(&document, &form)
}

#[wasm_bindgen]
pub fn notify(message: &str, kind: &str) -> Result<(), JsValue> {
    let document = document()?;
    let kind = page::notify::NotificationKind::parse(kind);
    page::notify::show_notification(&document, message, kind)
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}
