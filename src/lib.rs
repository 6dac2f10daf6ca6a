#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod layout;
pub mod portfolio;
pub mod reveal;
pub mod style;
pub mod timer;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Should be able to init console logging");
    leptos::mount::hydrate_body(App);
}
