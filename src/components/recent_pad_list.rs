use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::format::pad_url;
use crate::types::{PadEntry, Timestamp};

const ARROW_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-arrow-right w-4 h-4 text-gray-400"><path d="M5 12h14"/><path d="m12 5 7 7-7 7"/></svg>"#;
const CLOCK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-clock w-3 h-3"><circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/></svg>"#;
const MEMBERS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-users w-3 h-3"><path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/></svg>"#;

/// What one list row shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PadView {
    pub name: String,
    pub url: String,
    pub visited: String,
    pub members: String,
}

impl PadView {
    pub fn build(
        entry: &PadEntry,
        base_url: &str,
        prefix: &str,
        format_time: impl Fn(Option<&Timestamp>) -> String,
    ) -> Self {
        Self {
            name: entry.name.clone(),
            url: pad_url(base_url, prefix, &entry.name),
            visited: format_time(entry.timestamp.as_ref()),
            members: entry.members_label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Empty,
    Text(String),
    /// Trusted static markup (icons).
    Markup(&'static str),
    Children(Vec<ElementSpec>),
}

/// An element to create, described up front so rows can be checked without a DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub style: Vec<(&'static str, &'static str)>,
    pub content: Content,
}

impl ElementSpec {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attributes: Vec::new(),
            style: Vec::new(),
            content: Content::Empty,
        }
    }

    fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    fn style(mut self, property: &'static str, value: &'static str) -> Self {
        self.style.push((property, value));
        self
    }

    fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[ElementSpec] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn create(&self, document: &Document) -> Result<Element, JsValue> {
        let el = document.create_element(self.tag)?;
        if let Some(class) = self.class {
            el.set_class_name(class);
        }
        for (name, value) in &self.attributes {
            el.set_attribute(name, value)?;
        }
        if !self.style.is_empty() {
            let style = el.clone().dyn_into::<HtmlElement>()?.style();
            for (property, value) in &self.style {
                style.set_property(property, value)?;
            }
        }
        match &self.content {
            Content::Empty => {}
            Content::Text(text) => el.set_text_content(Some(text.as_str())),
            Content::Markup(markup) => el.set_inner_html(markup),
            Content::Children(children) => {
                for child in children {
                    let child_el = child.create(document)?;
                    el.append_child(&child_el)?;
                }
            }
        }
        Ok(el)
    }
}

/// A list item plus where clicking anywhere on it goes.
#[derive(Clone, Debug, PartialEq)]
pub struct RowSpec {
    pub item: ElementSpec,
    pub navigate_to: String,
}

pub fn row(view: &PadView) -> RowSpec {
    let link = ElementSpec::new("a")
        .attr("href", view.url.clone())
        .style("text-decoration", "none")
        .content(Content::Text(view.name.clone()));
    let arrow = ElementSpec::new("span")
        .class("recent-pad-arrow")
        .content(Content::Markup(ARROW_ICON));
    let info = ElementSpec::new("div")
        .style("display", "flex")
        .style("gap", "10px")
        .style("margin-top", "10px")
        .content(Content::Children(vec![
            ElementSpec::new("span")
                .class("recent-pad-clock")
                .content(Content::Markup(CLOCK_ICON)),
            ElementSpec::new("span")
                .class("recent-pad-time")
                .content(Content::Text(view.visited.clone())),
            ElementSpec::new("span")
                .class("recent-pad-personal")
                .style("margin-left", "5px")
                .content(Content::Markup(MEMBERS_ICON)),
            ElementSpec::new("span")
                .class("recent-pad-members")
                .content(Content::Text(view.members.clone())),
        ]));

    RowSpec {
        item: ElementSpec::new("li")
            .class("recent-pad")
            .style("cursor", "pointer")
            .content(Content::Children(vec![link, arrow, info])),
        navigate_to: view.url.clone(),
    }
}

fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(url) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Rows appended to a container, owning their click handlers.
/// Drop it only after the rows have left the DOM.
pub struct RecentPadList {
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl RecentPadList {
    pub fn mount(
        document: &Document,
        container: &Element,
        views: &[PadView],
    ) -> Result<Self, JsValue> {
        let mut listeners = Vec::with_capacity(views.len());
        for view in views {
            let row = row(view);
            let item = row.item.create(document)?;

            let target = row.navigate_to;
            let onclick = Closure::wrap(Box::new(move |_: Event| navigate(&target))
                as Box<dyn FnMut(Event)>);
            item.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
            listeners.push(onclick);

            container.append_child(&item)?;
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}
