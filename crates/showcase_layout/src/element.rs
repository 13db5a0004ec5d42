//! Element tree and queries
//!
//! A rendered page is a tree of [`Node`]s. Builders produce it, the HTML renderer
//! serializes it, and tests and the session driver query it.

use indexmap::IndexMap;
use smallvec::SmallVec;

// ============================================================================
// Nodes
// ============================================================================

/// A node in the element tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// A tagged element with attributes, classes and children
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    /// Attributes in insertion order. An empty value renders as a bare boolean attribute.
    pub attrs: IndexMap<String, String>,
    pub classes: SmallVec<[String; 8]>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            classes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-joined class list
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Direct element children
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // ========================================================================
    // Queries (depth-first, document order, including self)
    // ========================================================================

    /// First element matching `pred`
    pub fn find(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(pred))
    }

    /// Every element matching `pred`
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_matching(pred, &mut out);
        out
    }

    fn collect_matching<'a>(
        &'a self,
        pred: impl Fn(&Element) -> bool + Copy,
        out: &mut Vec<&'a Element>,
    ) {
        if pred(self) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_matching(pred, out);
        }
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(|el| el.attr(name) == Some(value))
    }

    pub fn find_all_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.find_all(|el| el.attr(name) == Some(value))
    }

    pub fn find_by_role(&self, role: &str) -> Option<&Element> {
        self.find_by_attr("role", role)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_by_attr("id", id)
    }

    /// Elements carrying `data-testid`
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.find_by_attr("data-testid", test_id)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|el| el.tag == tag)
    }

    /// First element whose own text content equals `text` after trimming
    pub fn find_by_text(&self, text: &str) -> Option<&Element> {
        self.find(|el| el.text_content().trim() == text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut list = Element::new("ul");
        for (i, label) in ["one", "two"].iter().enumerate() {
            let mut li = Element::new("li");
            li.attrs.insert("data-index".into(), i.to_string());
            li.children.push(Node::Text(label.to_string()));
            list.children.push(li.into());
        }
        let mut root = Element::new("nav");
        root.attrs.insert("role".into(), "navigation".into());
        root.children.push(list.into());
        root
    }

    #[test]
    fn test_text_content_concatenates() {
        assert_eq!(sample().text_content(), "onetwo");
    }

    #[test]
    fn test_queries() {
        let root = sample();
        assert_eq!(root.find_by_role("navigation").map(|e| e.tag), Some("nav"));
        assert_eq!(root.find_all_by_tag("li").len(), 2);
        assert_eq!(
            root.find_by_attr("data-index", "1").map(|e| e.text_content()),
            Some("two".to_string())
        );
        assert!(root.find_by_text("three").is_none());
    }
}
