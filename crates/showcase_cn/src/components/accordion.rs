//! Accordion component for expandable content sections
//!
//! Each item keeps its own open flag, so any number of sections may be open at once.
//! [`AccordionMode::Single`] restricts that to one.
//!
//! # Example
//!
//! ```ignore
//! use showcase_cn::prelude::*;
//!
//! let faq = Accordion::new(&runtime, "faq")
//!     .item(AccordionItem::new("What is this?").content(p().text("A gallery.")).default_open(true))
//!     .item(AccordionItem::new("Is it fast?").content(p().text("Yes.")));
//!
//! faq.toggle("1");
//! let node = faq.render();
//! ```

use rustc_hash::FxHashSet;
use showcase_core::{ShowcaseRuntime, State};
use showcase_layout::prelude::*;

/// Accordion open behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// Items open and close independently (default)
    #[default]
    Multi,
    /// Opening one item closes the others
    Single,
}

/// Accordion visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionVariant {
    #[default]
    Soft,
    Outline,
}

impl AccordionVariant {
    fn item_classes(&self) -> &'static str {
        match self {
            AccordionVariant::Soft => "bg-surface shadow-soft rounded-2xl overflow-hidden",
            AccordionVariant::Outline => {
                "bg-surface border border-black/10 rounded-2xl overflow-hidden"
            }
        }
    }
}

/// A single section definition
#[derive(Clone, Debug)]
pub struct AccordionItem {
    id: Option<String>,
    title: String,
    content: Vec<Node>,
    default_open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: Vec::new(),
            default_open: false,
        }
    }

    /// Stable key. Defaults to the item's position.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn content(mut self, content: impl ElementBuilder) -> Self {
        self.content.push(content.build());
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }
}

#[derive(Clone, Debug)]
struct ResolvedItem {
    key: String,
    title: String,
    content: Vec<Node>,
}

/// Stateful accordion
#[derive(Clone, Debug)]
pub struct Accordion {
    instance_key: String,
    mode: AccordionMode,
    variant: AccordionVariant,
    items: Vec<ResolvedItem>,
    open: State<FxHashSet<String>>,
}

impl Accordion {
    /// Create an empty accordion. `instance_key` prefixes the generated element ids.
    pub fn new(runtime: &ShowcaseRuntime, instance_key: impl Into<String>) -> Self {
        Self {
            instance_key: instance_key.into(),
            mode: AccordionMode::default(),
            variant: AccordionVariant::default(),
            items: Vec::new(),
            open: runtime.use_state(FxHashSet::default()),
        }
    }

    pub fn mode(mut self, mode: AccordionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn variant(mut self, variant: AccordionVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        let key = item.id.unwrap_or_else(|| self.items.len().to_string());
        if item.default_open {
            let key = key.clone();
            self.open.update(|mut open| {
                open.insert(key);
                open
            });
        }
        self.items.push(ResolvedItem {
            key,
            title: item.title,
            content: item.content,
        });
        self
    }

    /// Item keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.with(|open| open.is_some_and(|set| set.contains(key)))
    }

    /// Flip one item. Unknown keys are ignored. Returns the item's new state.
    pub fn toggle(&self, key: &str) -> bool {
        if !self.items.iter().any(|item| item.key == key) {
            tracing::debug!(key, "accordion toggle for unknown item ignored");
            return false;
        }

        let now_open = !self.is_open(key);
        let mode = self.mode;
        let key = key.to_string();
        self.open.update_rebuild(move |mut open| {
            if now_open {
                if mode == AccordionMode::Single {
                    open.clear();
                }
                open.insert(key);
            } else {
                open.remove(&key);
            }
            open
        });
        now_open
    }

    pub fn render(&self) -> Node {
        div()
            .class("flex flex-col space-y-2 rounded-2xl")
            .role("region")
            .aria("label", "Accordion")
            .children(self.items.iter().map(|item| self.render_item(item)))
            .build()
    }

    fn render_item(&self, item: &ResolvedItem) -> Div {
        let is_open = self.is_open(&item.key);
        let button_id = format!("{}-button-{}", self.instance_key, item.key);
        let panel_id = format!("{}-panel-{}", self.instance_key, item.key);

        let header = el("button")
            .kind("button")
            .id(button_id.clone())
            .class("relative w-full pl-5 pr-5 py-4 flex items-center justify-between text-left transition bg-white text-text hover:bg-gray-50 focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40")
            .aria("expanded", is_open.to_string())
            .aria("controls", panel_id.clone())
            .data("accordion-key", item.key.clone())
            .child(
                span()
                    .class("absolute left-0 top-0 h-full w-1 bg-brand-gradient rounded-tr-sm rounded-br-sm")
                    .aria("hidden", "true"),
            )
            .child(span().class("font-medium").text(item.title.clone()))
            .child(
                span()
                    .class("ml-3 inline-flex h-7 w-7 items-center justify-center rounded-full transition-transform bg-brand-gradient")
                    .when(is_open, |s| s.class("rotate-90"))
                    .aria("hidden", "true")
                    .text("›"),
            );

        let panel = div()
            .id(panel_id)
            .role("region")
            .aria("labelledby", button_id)
            .class("px-5 pb-5 text-sm text-text/90 transition-all origin-top bg-white")
            .class(if is_open { "block animate-slideUp" } else { "hidden" })
            .children(item.content.iter().cloned());

        div()
            .class(self.variant.item_classes())
            .child(h3().class("m-0").child(header))
            .child(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(rt: &ShowcaseRuntime) -> Accordion {
        Accordion::new(rt, "faq")
            .item(AccordionItem::new("First").content("one").default_open(true))
            .item(AccordionItem::new("Second").content("two"))
            .item(AccordionItem::new("Third").id("third").content("three"))
    }

    #[test]
    fn test_default_open_and_keys() {
        let rt = ShowcaseRuntime::new();
        let acc = faq(&rt);
        assert_eq!(acc.keys().collect::<Vec<_>>(), vec!["0", "1", "third"]);
        assert!(acc.is_open("0"));
        assert!(!acc.is_open("1"));
    }

    #[test]
    fn test_toggling_one_item_leaves_others() {
        let rt = ShowcaseRuntime::new();
        let acc = faq(&rt);
        let keys: Vec<String> = acc.keys().map(str::to_string).collect();

        for a in &keys {
            let before: Vec<bool> = keys.iter().map(|k| acc.is_open(k)).collect();
            acc.toggle(a);
            for (i, b) in keys.iter().enumerate() {
                if b != a {
                    assert_eq!(acc.is_open(b), before[i], "toggling {a} changed {b}");
                }
            }
        }
    }

    #[test]
    fn test_single_mode_closes_others() {
        let rt = ShowcaseRuntime::new();
        let acc = faq(&rt).mode(AccordionMode::Single);
        assert!(acc.toggle("1"));
        assert!(acc.is_open("1"));
        assert!(!acc.is_open("0"));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let rt = ShowcaseRuntime::new();
        let acc = faq(&rt);
        assert!(!acc.toggle("missing"));
        assert!(!acc.is_open("missing"));
    }

    #[test]
    fn test_render_reflects_state() {
        let rt = ShowcaseRuntime::new();
        let acc = faq(&rt);
        acc.toggle("third");
        let root = acc.render().into_element().unwrap();

        let second = root.find_by_attr("data-accordion-key", "1").unwrap();
        assert_eq!(second.attr("aria-expanded"), Some("false"));
        let third = root.find_by_attr("data-accordion-key", "third").unwrap();
        assert_eq!(third.attr("aria-controls"), Some("faq-panel-third"));

        let panel = root.find_by_id("faq-panel-third").unwrap();
        assert!(panel.has_class("block"));
        assert_eq!(panel.text_content(), "three");
        assert!(root.find_by_id("faq-panel-1").unwrap().has_class("hidden"));
    }
}
