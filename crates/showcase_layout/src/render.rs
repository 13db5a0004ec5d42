//! HTML serialization

use crate::element::{Element, Node};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Serialize a node to compact HTML
pub fn render_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize an element to compact HTML
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(&el.class_name()));
        out.push('"');
    }

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::*;

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let node = a()
            .class("link")
            .href("/search?q=a&b")
            .aria("label", "Say \"hi\"")
            .text("<Home>")
            .build();
        assert_eq!(
            render_html(&node),
            "<a class=\"link\" href=\"/search?q=a&amp;b\" aria-label=\"Say &quot;hi&quot;\">&lt;Home&gt;</a>"
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let node = input().kind("checkbox").flag("checked").build();
        assert_eq!(render_html(&node), "<input type=\"checkbox\" checked>");
    }
}
