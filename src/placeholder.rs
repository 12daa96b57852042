use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, MutationObserver, MutationObserverInit};

type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Keeps an input's `placeholder` in step with a localized label.
///
/// The label text may be filled in after first render, so every mutation of
/// the label is copied over. Dropping the subscription disconnects the observer.
pub struct PlaceholderSync {
    observer: MutationObserver,
    _callback: MutationCallback,
}

impl PlaceholderSync {
    pub fn observe(
        document: &Document,
        label: Element,
        input_selector: &str,
    ) -> Result<Self, JsValue> {
        let doc = document.clone();
        let input_selector = input_selector.to_string();
        let watched = label.clone();
        let callback: MutationCallback = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: MutationObserver| {
                let Ok(Some(input)) = doc.query_selector(&input_selector) else {
                    return;
                };
                let text = watched.text_content().unwrap_or_default();
                match input.dyn_into::<HtmlInputElement>() {
                    Ok(input) => input.set_placeholder(&text),
                    Err(other) => {
                        let _ = other.set_attribute("placeholder", &text);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        options.set_character_data(true);
        observer.observe_with_options(&label, &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for PlaceholderSync {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
