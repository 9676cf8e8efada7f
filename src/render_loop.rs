// Browser side driver: mounts the particle sketch into a container element,
// runs it on requestAnimationFrame and follows window resizes.

use crate::config::FieldConfig;
use crate::log;
use crate::random::RngSource;
use crate::sketch::{Host, ParticleSketch};
use crate::surface::CanvasSurface;
use crate::timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

type ParticleHost = Host<ParticleSketch, CanvasSurface>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn start(container_id: &str, config: FieldConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // No container means no particle field at all, not an error
    let container = match document.get_element_by_id(container_id) {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => {
            log!("#{} not found, particle field skipped", container_id);
            return Ok(());
        }
    };

    let size = container_size(&container);
    let surface = CanvasSurface::attach(&document, &container, size)?;
    let host = Host::mount(
        Some(size),
        ParticleSketch::new(config),
        surface,
        &mut RngSource::thread(),
    );
    log!(
        "particle field mounted: {} particles on {}x{}",
        config.particle_count,
        host.surface.width(),
        host.surface.height()
    );

    let host = Rc::new(RefCell::new(host));
    watch_resize(&window, container, host.clone())?;
    run_frames(window, host)
}

fn container_size(container: &HtmlElement) -> (u32, u32) {
    (
        container.offset_width().max(0) as u32,
        container.offset_height().max(0) as u32,
    )
}

fn watch_resize(
    window: &Window,
    container: HtmlElement,
    host: Rc<RefCell<ParticleHost>>,
) -> Result<(), JsValue> {
    let on_resize = Closure::wrap(Box::new(move || {
        let (width, height) = container_size(&container);
        host.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_resize.forget();
    Ok(())
}

fn run_frames(window: Window, host: Rc<RefCell<ParticleHost>>) -> Result<(), JsValue> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        {
            let _timer = timer::frame_timer("particle frame");
            host.borrow_mut().frame();
        }
        if let Some(callback) = f.borrow().as_ref() {
            let handler: &js_sys::Function = callback.as_ref().unchecked_ref();
            if let Err(err) = frame_window.request_animation_frame(handler) {
                log!("particle frame not rescheduled: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
