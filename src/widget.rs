use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::{PadView, RecentPadList};
use crate::config::WidgetConfig;
use crate::format::{format_visit_time, resolve_locale, visit_time_options};
use crate::placeholder::PlaceholderSync;
use crate::store;

/// Inline style put on the container's parent when there is nothing to list.
pub const EMPTY_PARENT_STYLE: [(&str, &str); 4] = [
    ("display", "flex"),
    ("justify-content", "center"),
    ("align-items", "center"),
    ("max-height", "100%"),
];

/// Owns everything one run of the widget leaves behind: the mounted rows
/// and the placeholder subscription. Each run replaces both.
pub struct RecentPadsRenderer {
    config: WidgetConfig,
    placeholder: Option<PlaceholderSync>,
    list: Option<RecentPadList>,
}

impl RecentPadsRenderer {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            placeholder: None,
            list: None,
        }
    }

    pub fn set_config(&mut self, config: WidgetConfig) {
        self.config = config;
    }

    /// Rebuild the recent pads list from storage. The list is in the DOM
    /// when this returns.
    ///
    /// A page without the container is left untouched.
    pub fn initialize(&mut self, document: &Document) -> Result<(), JsValue> {
        let Some(container) = document.get_element_by_id(&self.config.container_id) else {
            return Ok(());
        };

        // Rows leave the DOM before their click handlers are dropped.
        container.set_inner_html("");
        self.list = None;

        self.placeholder = None;
        match document.query_selector(&self.config.placeholder_label_selector())? {
            Some(label) => {
                self.placeholder = Some(PlaceholderSync::observe(
                    document,
                    label,
                    &self.config.placeholder_input_selector,
                )?);
            }
            None => web_sys::console::log_1(
                &"[recent-pads] no placeholder label, skipping placeholder sync".into(),
            ),
        }

        let window = document.default_view().ok_or("document has no window")?;
        let storage = window.local_storage().ok().flatten();
        let pads = store::load_recent_pads(storage.as_ref(), &self.config.storage_key);

        if pads.is_empty() {
            return self.show_empty_state(document, &container);
        }

        let base_url = window.location().href()?;
        let locale = resolve_locale(window.navigator().language(), &self.config.fallback_locale);
        let options = visit_time_options()?;
        let views: Vec<PadView> = pads
            .iter()
            .map(|pad| {
                PadView::build(pad, &base_url, &self.config.pad_path_prefix, |ts| {
                    format_visit_time(ts, &locale, &options)
                })
            })
            .collect();

        web_sys::console::log_1(&format!("[recent-pads] rendering {} pads", views.len()).into());
        self.list = Some(RecentPadList::mount(document, &container, &views)?);

        Ok(())
    }

    fn show_empty_state(&self, document: &Document, container: &Element) -> Result<(), JsValue> {
        if let Some(heading) = document.query_selector(&self.config.heading_selector())? {
            heading.set_attribute("data-l10n-id", &self.config.empty_heading_l10n_id)?;
        }

        if let Some(parent) = container
            .parent_element()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok())
        {
            let style = parent.style();
            for (property, value) in EMPTY_PARENT_STYLE {
                style.set_property(property, value)?;
            }
        }

        container.remove();
        Ok(())
    }

    /// Stop observing the placeholder label. The rendered list stays so a
    /// page restored from cache still shows it until the next run.
    pub fn teardown(&mut self) {
        self.placeholder = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_centers_parent() {
        assert_eq!(
            EMPTY_PARENT_STYLE,
            [
                ("display", "flex"),
                ("justify-content", "center"),
                ("align-items", "center"),
                ("max-height", "100%"),
            ]
        );
    }
}
