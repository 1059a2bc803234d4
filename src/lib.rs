//! Client-side runtime for the portfolio page: the helix canvas animation
//! plus the scroll, cursor, and contact-form behaviors around it.
//!
//! The modules at the crate root are pure and compile on every target, which
//! is where the unit tests run. Everything that touches the browser lives in
//! `wasm/`, compiled only for `wasm32`.

pub mod config;
pub mod contact;
pub mod cursor;
pub mod effects;
pub mod error;
pub mod helix;
pub mod schedule;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod email;
    mod page;
    mod render;

    use crate::error::SetupError;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(SetupError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(SetupError::MissingGlobal("document"))?;

        render::start(&window, &document)?;
        page::wire(&window, &document)?;
        email::wire(&document)?;

        log::info!("portfolio runtime ready");
        Ok(())
    }
}
