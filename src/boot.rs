//! Application bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once at module load in the browser: installs the panic hook,
//! initializes console logging, and mounts [`crate::app::App`] to the
//! `#app` element. Everything after that is driven by router navigation.

/// DOM element id the application mounts to.
pub const MOUNT_POINT_ID: &str = "app";

/// WASM entry point. Mounts the root component to `#app`.
///
/// If the mount point is missing the error is logged and the app simply
/// does not start; rendering failures surface through the framework.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
    else {
        log::error!("mount point #{MOUNT_POINT_ID} not found, not starting");
        return;
    };

    log::info!("mounting commune client to #{MOUNT_POINT_ID}");
    leptos::mount::mount_to(root.unchecked_into(), crate::app::App).forget();
}
