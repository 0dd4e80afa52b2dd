//! Browser implementation of the host traits on top of `web_sys`, plus the
//! two document-level listeners that feed the routing table.

use super::{DomNode, Page};
use crate::delegate::{Effect, EventRoutes, Key};
use crate::errors::UiError;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, HtmlImageElement, HtmlInputElement,
    HtmlSelectElement, KeyboardEvent, MouseEvent, Node, Window,
};

fn host_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl DomNode for Element {
    fn closest_match(&self, selector: &str) -> Option<Self> {
        self.closest(selector).ok().flatten()
    }

    fn contains_node(&self, other: &Self) -> bool {
        let node: &Node = self.as_ref();
        node.contains(Some(other.as_ref()))
    }

    fn query_one(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let Ok(list) = self.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn assign_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.set_attribute(name, value) {
            debug!(name, error = %host_error(&err), "set_attribute failed");
        }
    }

    fn clear_attribute(&self, name: &str) {
        if let Err(err) = self.remove_attribute(name) {
            debug!(name, error = %host_error(&err), "remove_attribute failed");
        }
    }

    fn toggle_flag(&self, name: &str, on: bool) {
        if let Err(err) = self.toggle_attribute_with_force(name, on) {
            debug!(name, error = %host_error(&err), "toggle_attribute failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        if let Err(err) = self.class_list().toggle_with_force(class, on) {
            debug!(class, error = %host_error(&err), "class toggle failed");
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn clone_deep(&self) -> Option<Self> {
        let node: &Node = self.as_ref();
        node.clone_node_with_deep(true)
            .ok()?
            .dyn_into::<Element>()
            .ok()
    }

    fn append_node(&self, child: &Self) {
        let node: &Node = self.as_ref();
        if let Err(err) = node.append_child(child.as_ref()) {
            debug!(error = %host_error(&err), "append_child failed");
        }
    }

    fn detach(&self) {
        self.remove();
    }

    fn set_field_value(&self, value: &str) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn reset_selection(&self) {
        if let Some(select) = self.dyn_ref::<HtmlSelectElement>() {
            select.set_selected_index(0);
        }
    }

    fn image_source(&self) -> String {
        self.dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::src)
            .or_else(|| self.get_attribute("src"))
            .unwrap_or_default()
    }
}

/// The live document and its window.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
    }
}

/// Runs `start` now if the document is parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error if the deferred listener cannot be registered.
pub fn when_ready<F>(document: &Document, start: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());
    if state.as_deref() != Some("loading") {
        start();
        return Ok(());
    }

    let callback = Closure::once(start);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(|err| UiError::Host(host_error(&err)))?;
    callback.forget();
    Ok(())
}

/// Installs the document click and keydown listeners for the page lifetime.
///
/// # Errors
///
/// Returns an error if either listener cannot be registered.
pub fn listen(document: &Document, routes: Rc<EventRoutes<Element>>) -> Result<(), UiError> {
    let click_routes = Rc::clone(&routes);
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = target_element(&event) else {
            return;
        };
        for effect in click_routes.click(&target) {
            apply(&event, effect);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| UiError::Host(host_error(&err)))?;
    on_click.forget();

    let key_routes = routes;
    let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let key = Key::from(event.key().as_str());
        for effect in key_routes.key(&key) {
            apply(&event, effect);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(|err| UiError::Host(host_error(&err)))?;
    on_key.forget();

    Ok(())
}

// Text-node targets resolve to their parent element.
fn target_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element(),
    }
}

fn apply(event: &Event, effect: Effect) {
    match effect {
        Effect::Handled => {}
        Effect::PreventDefault => event.prevent_default(),
        Effect::Navigate(href) => {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) = window.location().set_href(&href) {
                debug!(%href, error = %host_error(&err), "navigation refused");
            }
        }
    }
}
