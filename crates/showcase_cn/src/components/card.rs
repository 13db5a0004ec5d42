//! Card container with optional header and footer
//!
//! ```ignore
//! cn::card()
//!     .variant(CardVariant::Brand)
//!     .header(h3().text("Settings"))
//!     .child(p().text("Body"))
//!     .footer(cn::button("Save"))
//! ```

use showcase_layout::prelude::*;

/// Card visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Surface,
    Outline,
    Ghost,
    /// White surface with a gradient band on top
    Brand,
    /// Same band as `Brand`, kept for call sites that ask for an outline
    BrandOutline,
    /// Legacy variant, rendered as `Surface`
    BrandGlow,
}

impl CardVariant {
    /// Collapse legacy variants onto the ones that are actually rendered
    pub fn normalized(self) -> Self {
        match self {
            CardVariant::BrandGlow => CardVariant::Surface,
            other => other,
        }
    }

    fn classes(&self) -> &'static str {
        match self.normalized() {
            CardVariant::Outline | CardVariant::Brand | CardVariant::BrandOutline => {
                "bg-white border border-black/10"
            }
            CardVariant::Ghost => "bg-transparent border border-transparent",
            CardVariant::Surface | CardVariant::BrandGlow => {
                "bg-surface shadow-soft border border-black/5"
            }
        }
    }

    fn has_band(&self) -> bool {
        matches!(
            self.normalized(),
            CardVariant::Brand | CardVariant::BrandOutline
        )
    }
}

/// Card component
#[derive(Clone, Debug)]
pub struct Card {
    variant: CardVariant,
    extra_classes: String,
    attrs: Vec<(String, String)>,
    header: Option<Node>,
    body: Vec<Node>,
    footer: Option<Node>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::default(),
            extra_classes: String::new(),
            attrs: Vec::new(),
            header: None,
            body: Vec::new(),
            footer: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        if !self.extra_classes.is_empty() {
            self.extra_classes.push(' ');
        }
        self.extra_classes.push_str(classes);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn header(mut self, header: impl ElementBuilder) -> Self {
        self.header = Some(header.build());
        self
    }

    pub fn footer(mut self, footer: impl ElementBuilder) -> Self {
        self.footer = Some(footer.build());
        self
    }

    /// Append body content
    pub fn child(mut self, child: impl ElementBuilder) -> Self {
        self.body.push(child.build());
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for Card {
    fn build(self) -> Node {
        let mut root = section()
            .class("rounded-2xl overflow-hidden")
            .class(self.variant.classes())
            .class(&self.extra_classes);
        for (name, value) in self.attrs {
            root = root.attr(&name, value);
        }

        root.when(self.variant.has_band(), |s| {
            s.child(
                div()
                    .class("h-1 w-full bg-brand-gradient")
                    .aria("hidden", "true"),
            )
        })
        .maybe(self.header, |s, header| {
            s.child(
                div()
                    .class("px-5 py-4 border-b border-black/5 bg-white")
                    .child(header),
            )
        })
        .child(div().class("p-5 bg-white").children(self.body))
        .maybe(self.footer, |s, footer| {
            s.child(
                div()
                    .class("px-5 py-4 border-t border-black/5 bg-white")
                    .child(footer),
            )
        })
        .build()
    }
}

/// Create a card
pub fn card() -> Card {
    Card::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_glow_renders_as_surface() {
        let el = card()
            .variant(CardVariant::BrandGlow)
            .child("body")
            .build()
            .into_element()
            .unwrap();
        assert!(el.has_class("bg-surface"));
        assert!(el.find(|e| e.has_class("bg-brand-gradient")).is_none());
    }

    #[test]
    fn test_brand_adds_band_and_sections() {
        let el = card()
            .variant(CardVariant::Brand)
            .header(h3().text("Title"))
            .child(p().text("Body"))
            .footer("Footer")
            .build()
            .into_element()
            .unwrap();
        let sections: Vec<_> = el.child_elements().collect();
        assert_eq!(sections.len(), 4);
        assert!(sections[0].has_class("bg-brand-gradient"));
        assert_eq!(sections[1].text_content(), "Title");
        assert_eq!(sections[2].text_content(), "Body");
        assert_eq!(sections[3].text_content(), "Footer");
    }
}
