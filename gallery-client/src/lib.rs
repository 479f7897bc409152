//! Gallery page - WASM client
//!
//! Hosts the confetti loop on a full-viewport `<canvas>`. The page's own
//! scripts detect triggers and call into [`ConfettiView`].

use wasm_bindgen::prelude::*;

mod canvas;
pub use canvas::CanvasSurface;

mod time;

mod view;
pub use view::ConfettiView;

/// Install the panic hook and the console logger. Repeated calls keep the
/// first logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::info!("Gallery client initialized");
    }
}

pub(crate) fn js_err(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}
