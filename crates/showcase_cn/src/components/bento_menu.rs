//! Bento grid menu
//!
//! Tiles follow a repeating six-step span pattern (a hero tile, small tiles, a tall
//! tile and a wide tile) unless a tile sets its own span. Tiles with an `href` render
//! as links; the rest render as buttons carrying a `data-action` key.

use showcase_layout::prelude::*;

/// Default grid spans, repeated every six tiles
pub const SPAN_PATTERN: [&str; 6] = [
    "sm:col-span-2 row-span-2",
    "sm:col-span-1 row-span-1",
    "sm:col-span-1 row-span-1",
    "sm:col-span-1 row-span-2",
    "sm:col-span-1 row-span-1",
    "sm:col-span-2 row-span-1",
];

const WRAPPER_CLASSES: &str = "group rounded-2xl focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40 tile-hover-elevate text-left transform-gpu";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BentoItem {
    pub title: String,
    /// Subtitle shown on the gradient header
    pub description: Option<String>,
    /// One or two lines shown in the body
    pub body_text: Option<String>,
    pub icon: Option<String>,
    pub href: Option<String>,
    /// Action key for button tiles
    pub action: Option<String>,
    pub aria_label: Option<String>,
    /// Overrides the pattern span
    pub span: Option<String>,
}

impl BentoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Accessible name, defaulting to "Open {title}"
    pub fn accessible_label(&self) -> String {
        self.aria_label
            .clone()
            .unwrap_or_else(|| format!("Open {}", self.title))
    }

    /// Icon text, falling back to the title's first letter
    pub fn icon_text(&self) -> String {
        match &self.icon {
            Some(icon) => icon.clone(),
            None => self
                .title
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_else(|| "•".to_string()),
        }
    }

    fn is_interactive(&self) -> bool {
        self.href.is_some() || self.action.is_some()
    }
}

/// Grid span for the tile at `index`
pub fn span_for(item: &BentoItem, index: usize) -> String {
    item.span
        .clone()
        .unwrap_or_else(|| SPAN_PATTERN[index % SPAN_PATTERN.len()].to_string())
}

fn chevron() -> Div {
    span()
        .class("pointer-events-none absolute bottom-2 right-2 z-10")
        .aria("hidden", "true")
        .child(
            span()
                .class("inline-flex h-8 w-8 items-center justify-center rounded-full bg-white/80 backdrop-blur-sm border-brand-gradient ring-brand-inner transition-transform duration-200 ease-out")
                .role("presentation")
                .text("›"),
        )
}

fn tile_inner(item: &BentoItem) -> Div {
    let icon = if item.icon.is_some() {
        div().class("h-10 w-10 rounded-xl bg-white/15 text-white grid place-items-center shrink-0 ring-1 ring-white/25")
    } else {
        div().class("h-10 w-10 rounded-xl bg-white text-text grid place-items-center shrink-0")
    }
    .text(item.icon_text());

    let header = div().class("bento-tile-header px-5 py-4").child(
        div()
            .class("flex items-start gap-3")
            .child(icon)
            .child(
                div()
                    .child(
                        div()
                            .class("text-base font-semibold text-white")
                            .text(item.title.clone()),
                    )
                    .maybe(item.description.clone(), |d, desc| {
                        d.child(div().class("text-sm text-white/90 mt-0.5").text(desc))
                    }),
            ),
    );

    let body = match &item.body_text {
        Some(text) => div()
            .class("px-5 py-4 relative")
            .child(p().class("text-sm leading-5 text-text/80 pr-8").text(text.clone())),
        None => div().class("px-5 py-4 relative").child(
            div()
                .class("flex items-center justify-between text-sm pr-8")
                .child(p().class("text-text/80").text("Learn more"))
                .child(
                    span()
                        .class("text-text/50 text-xs")
                        .aria("hidden", "true")
                        .text(if item.is_interactive() { "Open" } else { "" }),
                ),
        ),
    }
    .child(chevron());

    div()
        .class("h-full w-full overflow-hidden rounded-2xl relative app-answer-surface app-answer-border")
        .child(header)
        .child(body)
}

#[derive(Clone, Debug, Default)]
pub struct BentoMenu {
    items: Vec<BentoItem>,
    extra_classes: String,
}

impl BentoMenu {
    pub fn new(items: impl IntoIterator<Item = BentoItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            extra_classes: String::new(),
        }
    }

    pub fn class(mut self, classes: &str) -> Self {
        if !self.extra_classes.is_empty() {
            self.extra_classes.push(' ');
        }
        self.extra_classes.push_str(classes);
        self
    }
}

impl ElementBuilder for BentoMenu {
    fn build(self) -> Node {
        let tiles = self.items.iter().enumerate().map(|(idx, item)| {
            let wrapper = match &item.href {
                Some(href) => a().href(href.clone()),
                None => el("button")
                    .kind("button")
                    .maybe(item.action.clone(), |b, action| b.data("action", action)),
            };
            wrapper
                .class(WRAPPER_CLASSES)
                .class(&span_for(item, idx))
                .aria("label", item.accessible_label())
                .child(tile_inner(item))
        });

        div()
            .class("grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 auto-rows-[minmax(120px,auto)]")
            .class(&self.extra_classes)
            .role("list")
            .aria("label", "Bento Menu")
            .children(tiles)
            .build()
    }
}

pub fn bento_menu(items: impl IntoIterator<Item = BentoItem>) -> BentoMenu {
    BentoMenu::new(items)
}
