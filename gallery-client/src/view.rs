//! JS-facing handle that owns the confetti state and drives the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use gallery_common::confetti::{Burst, Confetti, ConfettiConfig, SpawnMode};
use gallery_common::core::Vector;
use wasm_bindgen::prelude::*;

use crate::canvas::CanvasSurface;
use crate::{js_err, time};

type FrameCallback = Closure<dyn FnMut(f64)>;

#[wasm_bindgen]
pub struct ConfettiView {
    #[wasm_bindgen(skip)]
    pub state: Rc<RefCell<Confetti>>,
    #[wasm_bindgen(skip)]
    pub surface: Rc<RefCell<CanvasSurface>>,

    // Keeps the self-rescheduling closure alive for the page's lifetime
    frame: Rc<RefCell<Option<FrameCallback>>>,
}

#[wasm_bindgen]
impl ConfettiView {
    /// Bind to the canvas with id `canvas_id` and size it to the viewport.
    ///
    /// `config` may be `undefined` or a partial `ConfettiConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<ConfettiView, JsValue> {
        crate::init_logging();

        let config: ConfettiConfig = if config.is_undefined() || config.is_null() {
            ConfettiConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(js_err)?;

        let surface = CanvasSurface::new(canvas_id)?;
        let (width, height) = surface.fit_viewport()?;
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

        log::info!(
            "ConfettiView on canvas '{}' ({}x{})",
            canvas_id,
            width,
            height
        );

        Ok(ConfettiView {
            state: Rc::new(RefCell::new(Confetti::new(
                config,
                width as f32,
                height as f32,
                seed,
            ))),
            surface: Rc::new(RefCell::new(surface)),
            frame: Rc::new(RefCell::new(None)),
        })
    }

    /// Start the animation loop. It reschedules itself every display frame
    /// and never stops; calling this again is a no-op.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.frame.borrow().is_some() {
            return Ok(());
        }

        let state = Rc::clone(&self.state);
        let surface = Rc::clone(&self.surface);
        let handle = Rc::clone(&self.frame);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            state
                .borrow_mut()
                .frame(timestamp, &mut *surface.borrow_mut());
            if let Some(next) = handle.borrow().as_ref() {
                if let Err(e) = request_frame(next) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        request_frame(&callback)?;
        *self.frame.borrow_mut() = Some(callback);
        log::debug!("confetti loop started");
        Ok(())
    }

    /// Spawn right away. Missing coordinates default to the top center,
    /// a missing count to the configured default.
    pub fn spawn(&self, x: Option<f32>, y: Option<f32>, count: Option<u32>, from_corner: bool) {
        let mut state = self.state.borrow_mut();
        let default = state.system.default_origin();
        let origin = Vector::new(x.unwrap_or(default.x), y.unwrap_or(default.y));
        state.spawn(
            Some(origin),
            count.map(|c| c as usize),
            SpawnMode::from(from_corner),
        );
    }

    /// Fire a named preset: `load`, `drag`, `konami`, `grid` or `click`.
    /// Delayed waves are released by the animation loop.
    pub fn burst(&self, name: &str, x: Option<f32>, y: Option<f32>) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        let default = state.system.default_origin();
        let burst = Burst::from_name(name, x.unwrap_or(default.x), y.unwrap_or(default.y))
            .map_err(js_err)?;
        state.trigger(burst, time::now_ms());
        Ok(())
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.surface.borrow().resize(width, height);
        self.state
            .borrow_mut()
            .system
            .resize(width as f32, height as f32);
    }

    /// Resize to the current window size, for use from a `resize` listener.
    pub fn fit_viewport(&self) -> Result<(), JsValue> {
        let (width, height) = self.surface.borrow().fit_viewport()?;
        self.state
            .borrow_mut()
            .system
            .resize(width as f32, height as f32);
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().system.len()
    }

    pub fn pending_waves(&self) -> usize {
        self.state.borrow().waves.len()
    }
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global `window` exists")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
