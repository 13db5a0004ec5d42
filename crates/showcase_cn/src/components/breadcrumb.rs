//! Breadcrumb trail
//!
//! The last crumb, and any crumb without a target, renders as plain text; the last
//! one is marked as the current page.
//!
//! ```ignore
//! cn::breadcrumbs([
//!     Crumb::link("Home", "/"),
//!     Crumb::link("Demos", "/bentomenu"),
//!     Crumb::current("Breadcrumbs"),
//! ])
//! ```

use showcase_layout::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub to: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: Some(to.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Breadcrumbs {
    items: Vec<Crumb>,
}

impl Breadcrumbs {
    pub fn new(items: impl IntoIterator<Item = Crumb>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn push(mut self, crumb: Crumb) -> Self {
        self.items.push(crumb);
        self
    }
}

fn separator() -> Div {
    span()
        .aria("hidden", "true")
        .class("mx-2 inline-flex items-center text-text/40")
        .text("›")
}

impl ElementBuilder for Breadcrumbs {
    fn build(self) -> Node {
        let last = self.items.len().saturating_sub(1);
        let crumbs = self.items.into_iter().enumerate().map(|(idx, item)| {
            let is_last = idx == last;
            let inner = match item.to {
                Some(to) if !is_last => a()
                    .href(to)
                    .class("truncate max-w-[26ch] text-text/70 hover:text-text underline-offset-2 hover:underline focus:underline focus:outline-none focus-visible:ring-2 focus-visible:ring-[#1840a0] rounded-sm px-0.5")
                    .attr("title", item.label.clone())
                    .text(item.label),
                _ => span()
                    .class("truncate max-w-[28ch] text-text font-medium")
                    .when(is_last, |s| s.aria("current", "page"))
                    .attr("title", item.label.clone())
                    .text(item.label),
            };
            li()
                .class("flex items-center min-w-0")
                .child(inner)
                .when(!is_last, |l| l.child(separator()))
        });

        nav()
            .aria("label", "Breadcrumb")
            .class("w-full")
            .child(
                ol().class("flex flex-wrap items-center text-sm leading-6")
                    .children(crumbs),
            )
            .build()
    }
}

pub fn breadcrumbs(items: impl IntoIterator<Item = Crumb>) -> Breadcrumbs {
    Breadcrumbs::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_crumb_is_current_text() {
        let root = breadcrumbs([
            Crumb::link("Home", "/"),
            Crumb::current("Section"),
            Crumb::link("Page", "/page"),
        ])
        .build()
        .into_element()
        .unwrap();

        let links = root.find_all_by_tag("a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attr("href"), Some("/"));

        let current = root.find_by_attr("aria-current", "page").unwrap();
        assert_eq!(current.tag, "span");
        assert_eq!(current.text_content(), "Page");

        let middle = root.find_by_attr("title", "Section").unwrap();
        assert_eq!(middle.tag, "span");
        assert!(!middle.has_attr("aria-current"));
    }

    #[test]
    fn test_separators_between_items_only() {
        let root = breadcrumbs([Crumb::link("A", "/a"), Crumb::current("B")])
            .build()
            .into_element()
            .unwrap();
        let seps = root.find_all_by_attr("aria-hidden", "true");
        assert_eq!(seps.len(), 1);
    }
}
