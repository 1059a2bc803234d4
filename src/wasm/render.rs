//! Canvas setup and the helix animation loop.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::config;
use crate::config::dom;
use crate::error::SetupError;
use crate::helix::{HelixAnimation, Surface};
use crate::viewport::{self, Viewport};

/// `CanvasRenderingContext2d` as seen by the renderer: accent-colored dots
/// and rungs where only the alpha varies.
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(ctx: CanvasRenderingContext2d) -> Self {
        // Stroke styling is constant for the lifetime of the page.
        ctx.set_line_width(1.0);
        ctx.set_line_cap("round");
        Self { ctx }
    }
}

fn accent(alpha: f64) -> String {
    let (r, g, b) = config::ACCENT_RGB;
    format!("rgba({r},{g},{b},{alpha})")
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_dot(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&accent(alpha));
        self.ctx.fill();
    }

    fn stroke_rung(&mut self, x1: f64, x2: f64, y: f64, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(x1, y);
        self.ctx.line_to(x2, y);
        self.ctx.set_stroke_style_str(&accent(alpha));
        self.ctx.stroke();
    }
}

/// Resolve the canvas, keep it sized to the window, and start the render
/// loop when the load-time width gate allows it.
pub fn start(window: &Window, document: &Document) -> Result<(), JsValue> {
    let canvas = document
        .get_element_by_id(dom::CANVAS_ID)
        .ok_or(SetupError::MissingElement(dom::CANVAS_ID))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::WrongElementType {
            target: dom::CANVAS_ID,
            expected: "canvas",
        })?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(SetupError::NoContext2d)?
        .dyn_into::<CanvasRenderingContext2d>()?;

    fit_canvas(&canvas, window);

    // Track the window on every resize; the next accepted frame picks the
    // new dimensions up from the canvas itself.
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                fit_canvas(&canvas, &window);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Width gate, checked once at load and never again.
    let width = inner_size(window).0;
    if !viewport::animation_enabled(width) {
        log::info!("helix disabled on a {width}px-wide window");
        return Ok(());
    }

    // Animation loop.
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut helix = HelixAnimation::new();
    let mut surface = CanvasSurface::new(ctx);
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let dims = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        helix.frame(timestamp, dims, &mut surface);

        // schedule next
        if let Some(window) = web_sys::window() {
            let _ = window
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}

/// Match the canvas pixel size to the window. Re-applying an unchanged size
/// is harmless; the browser only clears the surface when a dimension moves.
fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window) {
    let (w, h) = inner_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

pub(super) fn inner_size(window: &Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}
