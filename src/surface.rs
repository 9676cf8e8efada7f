// Drawing primitives the particle field needs from its host, plus the
// implementation backed by a 2d canvas on the DOM.

use crate::color::Color;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

pub trait Surface {
    fn clear(&mut self);
    fn fill(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn stroke(&mut self, color: Color);
    fn stroke_weight(&mut self, weight: f64);
    fn circle(&mut self, x: f64, y: f64, diameter: f64);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn resize(&mut self, width: u32, height: u32);
}

// Immediate mode wrapper over CanvasRenderingContext2d. Like p5 the fill and
// stroke state persists between calls until changed.
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    stroking: bool,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface {
            canvas,
            context,
            stroking: true,
        })
    }

    // Creates a `width` x `height` canvas and appends it to `container`. Measure the
    // container before calling, the appended canvas changes an auto sized container
    pub fn attach(
        document: &Document,
        container: &HtmlElement,
        (width, height): (u32, u32),
    ) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(width);
        canvas.set_height(height);
        container.append_child(&canvas)?;
        CanvasSurface::new(canvas)
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill(&mut self, color: Color) {
        self.context.set_fill_style_str(&color.to_css());
    }

    fn no_stroke(&mut self) {
        self.stroking = false;
    }

    fn stroke(&mut self, color: Color) {
        self.stroking = true;
        self.context.set_stroke_style_str(&color.to_css());
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.context.set_line_width(weight);
    }

    fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.context.begin_path();
        // arc only fails on a negative radius
        if self
            .context
            .arc(x, y, diameter / 2.0, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.context.fill();
        if self.stroking {
            self.context.stroke();
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !self.stroking {
            return;
        }
        self.context.begin_path();
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context.stroke();
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Setting either dimension resets the context state, including styles
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
