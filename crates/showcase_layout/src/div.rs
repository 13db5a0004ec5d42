//! Fluent element builder
//!
//! ```ignore
//! use showcase_layout::prelude::*;
//!
//! let card = div()
//!     .class("rounded-2xl bg-surface shadow-card")
//!     .role("region")
//!     .aria("label", "Profile")
//!     .child(h3().text("Ada"))
//!     .child(p().text("Engineer"));
//! ```

use crate::element::{Element, Node};

/// Anything that can be placed into the tree
pub trait ElementBuilder {
    /// Consume the builder, producing a node
    fn build(self) -> Node;
}

impl ElementBuilder for Node {
    fn build(self) -> Node {
        self
    }
}

impl ElementBuilder for Element {
    fn build(self) -> Node {
        Node::Element(self)
    }
}

impl ElementBuilder for String {
    fn build(self) -> Node {
        Node::Text(self)
    }
}

impl ElementBuilder for &str {
    fn build(self) -> Node {
        Node::Text(self.to_string())
    }
}

/// Builder for a single element
#[derive(Clone, Debug, PartialEq)]
pub struct Div {
    element: Element,
}

impl Div {
    /// Create a builder for any tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            element: Element::new(tag),
        }
    }

    /// Add classes (whitespace separated). Duplicates are ignored.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.element.has_class(class) {
                self.element.classes.push(class.to_string());
            }
        }
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.element.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Set a bare boolean attribute such as `disabled`
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, "")
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn role(self, role: &str) -> Self {
        self.attr("role", role)
    }

    /// Set `aria-{name}`
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(&format!("aria-{name}"), value)
    }

    /// Set `data-{name}`
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(&format!("data-{name}"), value)
    }

    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    /// `type` attribute
    pub fn kind(self, kind: &str) -> Self {
        self.attr("type", kind)
    }

    /// Append a child
    pub fn child(mut self, child: impl ElementBuilder) -> Self {
        self.element.children.push(child.build());
        self
    }

    /// Append multiple children
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: ElementBuilder,
    {
        self.element
            .children
            .extend(children.into_iter().map(ElementBuilder::build));
        self
    }

    /// Append a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.children.push(Node::Text(text.into()));
        self
    }

    /// Apply `f` only when `cond` holds
    pub fn when(self, cond: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if cond {
            f(self)
        } else {
            self
        }
    }

    /// Apply `f` with the value when present
    pub fn maybe<T>(self, value: Option<T>, f: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(v) => f(self, v),
            None => self,
        }
    }

    /// Borrow the element built so far
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

impl ElementBuilder for Div {
    fn build(self) -> Node {
        Node::Element(self.element)
    }
}

impl<T: ElementBuilder> ElementBuilder for Option<T> {
    fn build(self) -> Node {
        match self {
            Some(inner) => inner.build(),
            None => Node::Text(String::new()),
        }
    }
}

macro_rules! tag_constructors {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($name), ">` builder")]
            pub fn $name() -> Div {
                Div::new(stringify!($name))
            }
        )*
    };
}

tag_constructors!(
    div, span, p, a, button, nav, header, footer, main, section, article, aside, ul, ol, li,
    h1, h2, h3, h4, form, label, input, textarea, select, option, pre, code, blockquote,
    figure, figcaption, img, strong, small, time, fieldset, legend,
);

/// Create a builder for an arbitrary tag
pub fn el(tag: &'static str) -> Div {
    Div::new(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_dedupes_and_splits() {
        let d = div().class("a b").class("b  c");
        assert_eq!(d.element().class_name(), "a b c");
    }

    #[test]
    fn test_conditional_builders() {
        let d = button()
            .when(true, |b| b.flag("disabled"))
            .when(false, |b| b.aria("busy", "true"))
            .maybe(Some("Close"), |b, label| b.aria("label", label))
            .maybe(None::<&str>, |b, title| b.attr("title", title));
        let el = d.element();
        assert_eq!(el.attr("disabled"), Some(""));
        assert!(!el.has_attr("aria-busy"));
        assert_eq!(el.attr("aria-label"), Some("Close"));
        assert!(!el.has_attr("title"));
    }

    #[test]
    fn test_children_from_iterator() {
        let list = ul().children(["a", "b"].iter().map(|s| li().text(*s)));
        assert_eq!(list.element().children.len(), 2);
        assert_eq!(list.element().text_content(), "ab");
    }
}
