//! Element lookup and adapters over live DOM collections.

use log::warn;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, HtmlElement};

use crate::global::document;

/// An identifier failed to resolve to an element in the active document.
///
/// This signals a structural mismatch between code and markup, not a
/// runtime condition: callers treat it as fatal to the initialization
/// path that needed the node. There is no retry or fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed DOM: cannot find element `{id}`")]
pub struct LookupError {
    /// The identifier that did not resolve.
    pub id: String,
}

/// Looks up an element by its id in the active document.
pub fn element_by_id(id: &str) -> Result<HtmlElement, LookupError> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LookupError { id: id.to_owned() })
}

/// Root of a collection query: the whole document or a single element.
#[derive(Clone, Copy)]
pub enum QueryRoot<'a> {
    Document(&'a Document),
    Element(&'a Element),
}

impl<'a> From<&'a Document> for QueryRoot<'a> {
    fn from(document: &'a Document) -> Self {
        Self::Document(document)
    }
}

impl<'a> From<&'a Element> for QueryRoot<'a> {
    fn from(element: &'a Element) -> Self {
        Self::Element(element)
    }
}

impl<'a> From<&'a HtmlElement> for QueryRoot<'a> {
    fn from(element: &'a HtmlElement) -> Self {
        Self::Element(element)
    }
}

/// Returns all descendants of `root` carrying the given class.
///
/// The result is a snapshot in document order, decoupled from later DOM
/// mutation. No match yields an empty vec, not an error.
pub fn elements_by_class<'a>(root: impl Into<QueryRoot<'a>>, name: &str) -> Vec<HtmlElement> {
    snapshot(match root.into() {
        QueryRoot::Document(document) => document.get_elements_by_class_name(name),
        QueryRoot::Element(element) => element.get_elements_by_class_name(name),
    })
}

/// Returns all descendants of `root` with the given tag name.
///
/// Same snapshot guarantees as [`elements_by_class`].
pub fn elements_by_tag<'a>(root: impl Into<QueryRoot<'a>>, tag: &str) -> Vec<HtmlElement> {
    snapshot(match root.into() {
        QueryRoot::Document(document) => document.get_elements_by_tag_name(tag),
        QueryRoot::Element(element) => element.get_elements_by_tag_name(tag),
    })
}

/// Copies a live `HtmlCollection` into a vec, preserving document order.
fn snapshot(collection: HtmlCollection) -> Vec<HtmlElement> {
    let length = collection.length();
    let mut elements = Vec::with_capacity(length as usize);
    for index in 0..length {
        let Some(element) = collection.item(index) else {
            continue;
        };
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => elements.push(element),
            // Class/tag queries on an HTML document only yield HTML
            // elements; anything else means an exotic document.
            Err(other) => warn!("skipping non-HTML `{}` in collection", other.tag_name()),
        }
    }
    elements
}
