use gallery_common::core::{Color, Vector};
use gallery_common::confetti::Surface;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A `<canvas>` with its 2D context, used as the confetti render target.
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let document = window
            .document()
            .ok_or("should have a document on window")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or(format!("canvas element '{}' not found", canvas_id))?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Match the canvas to the window's inner size and return it.
    pub fn fit_viewport(&self) -> Result<(u32, u32), JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or("innerHeight is not a number")?;
        let (width, height) = (width.max(0.0) as u32, height.max(0.0) as u32);
        self.resize(width, height);
        Ok((width, height))
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rotated_rect(
        &mut self,
        center: Vector,
        rotation: f32,
        width: f32,
        height: f32,
        color: Color,
        alpha: f32,
    ) {
        let ctx = &self.ctx;
        ctx.save();
        let placed = ctx
            .translate(center.x as f64, center.y as f64)
            .and_then(|_| ctx.rotate(rotation as f64));
        if let Err(e) = placed {
            log::warn!("canvas transform failed: {:?}", e);
            ctx.restore();
            return;
        }
        ctx.set_global_alpha(alpha as f64);
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        let (w, h) = (width as f64, height as f64);
        ctx.fill_rect(-w * 0.5, -h * 0.5, w, h);
        ctx.restore();
    }
}
