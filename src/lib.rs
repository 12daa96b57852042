mod components;
mod config;
mod format;
mod lifecycle;
mod placeholder;
mod store;
mod types;
mod widget;

use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    lifecycle::install()
}

/// Replace the widget config from a JS object and re-render.
#[wasm_bindgen(js_name = configureRecentPads)]
pub fn configure_recent_pads(config: JsValue) -> Result<(), JsValue> {
    let config = WidgetConfig::from_js(config)?;
    lifecycle::configure(config)
}

/// Re-read storage and rebuild the list, e.g. after the host page added a pad.
#[wasm_bindgen(js_name = refreshRecentPads)]
pub fn refresh_recent_pads() -> Result<(), JsValue> {
    lifecycle::refresh()
}
