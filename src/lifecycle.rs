use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, PageTransitionEvent};

use crate::config::WidgetConfig;
use crate::widget::RecentPadsRenderer;

thread_local! {
    static RENDERER: RefCell<RecentPadsRenderer> =
        RefCell::new(RecentPadsRenderer::new(WidgetConfig::default()));
}

fn get_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Whether initialization has to wait for `DOMContentLoaded`.
pub fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn run() {
    let Some(document) = get_document() else {
        return;
    };
    RENDERER.with(|renderer| match renderer.try_borrow_mut() {
        Ok(mut renderer) => {
            if let Err(e) = renderer.initialize(&document) {
                web_sys::console::error_2(&"[recent-pads] initialization failed:".into(), &e);
            }
        }
        Err(_) => web_sys::console::warn_1(&"[recent-pads] already initializing".into()),
    });
}

/// Run now, or once the document has finished parsing.
fn run_when_ready(document: &Document) -> Result<(), JsValue> {
    if !should_defer(&document.ready_state()) {
        run();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(run);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    )
}

/// Hook the widget into the page lifecycle: first load, restores from the
/// back/forward cache, and page hide.
pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window found")?;
    let document = window.document().ok_or("No document found")?;

    run_when_ready(&document)?;

    let show_document = document.clone();
    let on_show = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
        if !event.persisted() {
            return;
        }
        web_sys::console::log_1(&"[recent-pads] page restored from cache".into());
        if let Err(e) = run_when_ready(&show_document) {
            web_sys::console::error_1(&e);
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())?;
    on_show.forget();

    let on_hide = Closure::wrap(Box::new(move || {
        RENDERER.with(|renderer| {
            if let Ok(mut renderer) = renderer.try_borrow_mut() {
                renderer.teardown();
            }
        });
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
    on_hide.forget();

    Ok(())
}

pub fn refresh() -> Result<(), JsValue> {
    let document = get_document().ok_or("No document found")?;
    run_when_ready(&document)
}

pub fn configure(config: WidgetConfig) -> Result<(), JsValue> {
    RENDERER.with(|renderer| {
        renderer
            .try_borrow_mut()
            .map(|mut renderer| renderer.set_config(config))
            .map_err(|_| JsValue::from_str("recent pads widget is busy"))
    })?;
    refresh()
}
