//! In-memory document used by the unit tests. It implements just enough of the
//! DOM for the components: a tree of elements with attributes, text and
//! form-field state, and a selector matcher for compound selectors
//! (`tag`, `#id`, `.class`, `[attr]`, `[attr="value"]`) and comma lists.

use super::{DomNode, Page};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    selected_index: Option<i32>,
    children: Vec<FakeNode>,
    parent: Weak<RefCell<NodeData>>,
}

#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        write!(formatter, "<{}", data.tag)?;
        for (name, value) in &data.attributes {
            write!(formatter, " {name}=\"{value}\"")?;
        }
        write!(formatter, ">")
    }
}

impl FakeNode {
    pub fn element(tag: &str) -> Self {
        let selected_index = (tag == "select").then_some(0);
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            selected_index,
            ..NodeData::default()
        })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.assign_attribute("id", id);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.assign_attribute("class", class);
        self
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.assign_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    #[must_use]
    pub fn with_child(self, child: FakeNode) -> Self {
        self.append_node(&child);
        self
    }

    pub fn parent(&self) -> Option<FakeNode> {
        self.0.borrow().parent.upgrade().map(FakeNode)
    }

    pub fn children(&self) -> Vec<FakeNode> {
        self.0.borrow().children.clone()
    }

    pub fn select_option(&self, index: i32) {
        self.0.borrow_mut().selected_index = Some(index);
    }

    pub fn field_value(&self) -> String {
        self.0.borrow().value.clone()
    }

    /// `None` for anything but a `<select>`.
    pub fn selected_index(&self) -> Option<i32> {
        self.0.borrow().selected_index
    }

    fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn matches_selector(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .any(|part| Compound::parse(part).is_some_and(|compound| compound.matches(self)))
    }

    fn descendants(&self, out: &mut Vec<FakeNode>) {
        for child in self.children() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl DomNode for FakeNode {
    fn closest_match(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches_selector(selector) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    fn contains_node(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn query_one(&self, selector: &str) -> Option<Self> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter()
            .filter(|node| node.matches_selector(selector))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn assign_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn clear_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn toggle_flag(&self, name: &str, on: bool) {
        if on {
            self.assign_attribute(name, "");
        } else {
            self.clear_attribute(name);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|name| name == class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let mut classes = self.classes();
        classes.retain(|name| name != class);
        if on {
            classes.push(class.to_string());
        }
        self.assign_attribute("class", &classes.join(" "));
    }

    fn text(&self) -> String {
        let data = self.0.borrow();
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&child.text());
        }
        text
    }

    fn set_text(&self, text: &str) {
        let children = self.children();
        for child in children {
            child.detach();
        }
        self.0.borrow_mut().text = text.to_string();
    }

    fn clone_deep(&self) -> Option<Self> {
        let copy = {
            let data = self.0.borrow();
            FakeNode(Rc::new(RefCell::new(NodeData {
                tag: data.tag.clone(),
                attributes: data.attributes.clone(),
                text: data.text.clone(),
                value: data.value.clone(),
                selected_index: data.selected_index,
                ..NodeData::default()
            })))
        };
        for child in self.children() {
            copy.append_node(&child.clone_deep()?);
        }
        Some(copy)
    }

    fn append_node(&self, child: &Self) {
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.0.borrow_mut().children.retain(|node| node != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn set_field_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn reset_selection(&self) {
        let mut data = self.0.borrow_mut();
        if data.selected_index.is_some() {
            data.selected_index = Some(0);
        }
    }

    fn image_source(&self) -> String {
        self.attribute("src").unwrap_or_default()
    }
}

/// One compound selector such as `tr.row-link` or `input[name="cantidad[]"]`.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(selector: &str) -> Option<Self> {
        let mut compound = Compound::default();
        let mut rest = selector;

        let tag_len = rest
            .find(|c: char| matches!(c, '.' | '#' | '['))
            .unwrap_or(rest.len());
        if tag_len > 0 && &rest[..tag_len] != "*" {
            compound.tag = Some(rest[..tag_len].to_ascii_lowercase());
        }
        rest = &rest[tag_len..];

        while let Some(marker) = rest.chars().next() {
            rest = &rest[marker.len_utf8()..];
            match marker {
                '.' | '#' => {
                    let len = rest
                        .find(|c: char| matches!(c, '.' | '#' | '['))
                        .unwrap_or(rest.len());
                    let name = rest[..len].to_string();
                    if marker == '.' {
                        compound.classes.push(name);
                    } else {
                        compound.id = Some(name);
                    }
                    rest = &rest[len..];
                }
                '[' => {
                    let (body, after) = split_attribute(rest)?;
                    compound.attributes.push(parse_attribute(body));
                    rest = after;
                }
                _ => return None,
            }
        }

        Some(compound)
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != node.tag() {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| node.has_class(class)) {
            return false;
        }
        self.attributes
            .iter()
            .all(|(name, expected)| match (node.attribute(name), expected) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == *expected,
                (None, _) => false,
            })
    }
}

// Finds the closing `]`, skipping brackets inside a quoted value.
fn split_attribute(rest: &str) -> Option<(&str, &str)> {
    let mut quoted = false;
    for (index, c) in rest.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ']' if !quoted => return Some((&rest[..index], &rest[index + 1..])),
            _ => {}
        }
    }
    None
}

fn parse_attribute(body: &str) -> (String, Option<String>) {
    match body.split_once('=') {
        Some((name, value)) => (
            name.trim().to_string(),
            Some(value.trim().trim_matches('"').to_string()),
        ),
        None => (body.trim().to_string(), None),
    }
}

/// `<html>` with a `<body>`, plus a scripted colour-scheme preference.
pub struct FakePage {
    root: FakeNode,
    body: FakeNode,
    prefers_dark: Option<bool>,
}

impl FakePage {
    pub fn new() -> Self {
        let body = FakeNode::element("body");
        let root = FakeNode::element("html").with_child(body.clone());
        Self {
            root,
            body,
            prefers_dark: Some(false),
        }
    }

    #[must_use]
    pub fn with_body(self, child: FakeNode) -> Self {
        self.body.append_node(&child);
        self
    }

    #[must_use]
    pub fn preferring_dark(mut self, prefers_dark: Option<bool>) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    pub fn html(&self) -> FakeNode {
        self.root.clone()
    }

    pub fn body_node(&self) -> FakeNode {
        self.body.clone()
    }

    /// Panics when the fixture lacks the element; tests only.
    pub fn get(&self, selector: &str) -> FakeNode {
        match self.root.query_one(selector) {
            Some(node) => node,
            None => panic!("fixture has no element matching {selector}"),
        }
    }
}

impl Page for FakePage {
    type Node = FakeNode;

    fn root(&self) -> Option<FakeNode> {
        Some(self.root.clone())
    }

    fn body(&self) -> Option<FakeNode> {
        Some(self.body.clone())
    }

    fn by_id(&self, id: &str) -> Option<FakeNode> {
        self.root
            .query_all("*")
            .into_iter()
            .find(|node| node.attribute("id").as_deref() == Some(id))
    }

    fn query(&self, selector: &str) -> Option<FakeNode> {
        self.root.query_one(selector)
    }

    fn create_element(&self, tag: &str) -> Option<FakeNode> {
        Some(FakeNode::element(tag))
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> FakeNode {
        FakeNode::element("main").with_child(
            FakeNode::element("div")
                .with_class("row card")
                .with_child(FakeNode::element("input").with_attr("name", "cantidad[]"))
                .with_child(FakeNode::element("button").with_class("rm-row")),
        )
    }

    #[test]
    fn selectors_cover_tags_classes_ids_and_attributes() {
        let main = fixture();
        assert!(main.query_one("div.row").is_some());
        assert!(main.query_one(".card.row").is_some());
        assert!(main.query_one(r#"input[name="cantidad[]"]"#).is_some());
        assert!(main.query_one("input[name]").is_some());
        assert!(main.query_one(r#"input[name="otro"]"#).is_none());
        assert_eq!(main.query_all("button, input").len(), 2);
    }

    #[test]
    fn unknown_characters_after_an_attribute_never_match() {
        let main = fixture();
        assert!(main.query_one(r#"input[name]é"#).is_none());
        assert!(!main.matches_selector("main[id]ñ, .é"));
    }

    #[test]
    fn wildcard_matches_every_descendant() {
        assert_eq!(fixture().query_all("*").len(), 3);
    }

    #[test]
    fn closest_walks_up_from_self() {
        let main = fixture();
        let button = main.query_one(".rm-row").map(|node| node.closest_match(".row"));
        assert_eq!(button.flatten(), main.query_one(".row"));
        assert!(main.contains_node(&main));
    }

    #[test]
    fn clone_deep_is_detached_and_independent() {
        let main = fixture();
        let row = main.query_one(".row").map(|row| row.clone_deep());
        let copy = row.flatten().map(|copy| {
            assert!(copy.parent().is_none());
            copy
        });
        assert!(copy.is_some_and(|copy| copy != main.children()[0]));
    }
}
