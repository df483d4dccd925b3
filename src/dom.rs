//! DOM Helpers
//!
//! Thin wrappers over web-sys for reading the server-rendered page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::ClientError;

pub fn document() -> Result<Document, ClientError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClientError::MissingElement("document"))
}

/// Content of `<meta name="...">`
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Text content of the element with `id`
pub fn element_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| el.text_content())
}

/// Text of the first descendant matching `selector`
pub fn child_text(parent: &Element, selector: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// Attribute of the first descendant matching `selector`
pub fn child_attr(parent: &Element, selector: &str, attr: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute(attr))
}

/// Closest ancestor-or-self matching `selector`
pub fn closest(target: &Element, selector: &str) -> Option<Element> {
    target.closest(selector).ok().flatten()
}

/// All elements matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            log::debug!("failed to set {}: {:?}", property, e);
        }
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), ClientError> {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| ClientError::MissingElement("event target"))?;
    cb.forget();
    Ok(())
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

/// Navigate without leaving the current page in history
pub fn replace_location(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().replace(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }
}
