#![recursion_limit = "256"]

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("Could not set up console logging: {error}");
    }
    leptos::mount::hydrate_body(App);
}
