//! WebAssembly entry point for the Petit Maison site.
//!
//! Hydrates the server-rendered page so the header's menu toggle and window
//! listeners come alive in the browser.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the site on the client.
///
/// Installs `console_log` and `console_error_panic_hook`, then mounts
/// `app::component` over the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating {}", app::PAGE_TITLE);
    leptos::mount::hydrate_body(component);
}
