//! Host abstraction over the document. Components only talk to these traits,
//! so the same code runs against `web_sys` in the browser and against the
//! in-memory page in unit tests.
//!
//! Selectors are plain CSS selector strings. Components stick to compound
//! selectors (tag, `#id`, `.class`, `[attr]`, `[attr="value"]`) and comma
//! lists; descendant relationships are expressed with `closest_match` and
//! `contains_node` instead of combinators.

#[cfg(test)]
pub mod test_support;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Handle to a single element. Cloning clones the handle, not the element.
pub trait DomNode: Clone + PartialEq + Sized {
    /// The element itself or its nearest ancestor matching `selector`.
    fn closest_match(&self, selector: &str) -> Option<Self>;
    /// True when `other` is this element or one of its descendants.
    fn contains_node(&self, other: &Self) -> bool;
    fn query_one(&self, selector: &str) -> Option<Self>;
    /// Matching descendants in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    fn attribute(&self, name: &str) -> Option<String>;
    fn assign_attribute(&self, name: &str, value: &str);
    fn clear_attribute(&self, name: &str);
    /// Adds (`on`) or removes a boolean attribute such as `disabled`.
    fn toggle_flag(&self, name: &str, on: bool);

    fn has_class(&self, class: &str) -> bool;
    fn toggle_class(&self, class: &str, on: bool);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Detached deep copy, including current form-field state.
    fn clone_deep(&self) -> Option<Self>;
    fn append_node(&self, child: &Self);
    fn detach(&self);

    /// Sets the value of an `<input>` or `<select>`; other elements ignore it.
    fn set_field_value(&self, value: &str);
    /// Selects the first option of a `<select>`.
    fn reset_selection(&self);
    /// Resolved image URL of an `<img>`.
    fn image_source(&self) -> String;
}

/// The document plus the few window-level facts components need.
pub trait Page {
    type Node: DomNode;

    /// The document element (`<html>`); the whole-document scope.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    /// `(prefers-color-scheme: dark)`, `None` when media queries are unsupported.
    fn prefers_dark(&self) -> Option<bool>;
}
