#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod choreography;
pub mod icons;
pub mod motion;
pub mod particles;
pub mod portfolio;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Should be able to set up logging");
    leptos::mount::hydrate_body(App);
}
