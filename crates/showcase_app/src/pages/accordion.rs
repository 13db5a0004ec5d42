//! Accordion demo: six FAQ entries, the first open

use super::{gradient_header, PageContext};
use showcase_cn::{Accordion, AccordionItem, AccordionVariant};
use showcase_layout::prelude::*;

const FAQ: [(&str, &str); 6] = [
    (
        "What is the Ocean theme?",
        "A modern aesthetic using blue and amber accents, subtle shadows and smooth transitions.",
    ),
    (
        "Is the accordion accessible?",
        "Yes. It uses proper aria attributes, keyboard focus styles and semantic buttons.",
    ),
    (
        "Can I customize styles?",
        "Absolutely. Pass variant or apply custom classes around the component as needed.",
    ),
    (
        "Can multiple panels be open at the same time?",
        "Yes. This accordion allows multiple sections to be expanded simultaneously for quick comparisons.",
    ),
    (
        "How do I set a section to be open by default?",
        "Mark the item with default_open(true) to have it initially expanded.",
    ),
    (
        "Does it support keyboard interactions?",
        "Absolutely. Focus headers with Tab and toggle using Enter or Space. Screen readers announce states via ARIA.",
    ),
];

#[derive(Debug)]
pub struct AccordionPage {
    accordion: Accordion,
}

impl AccordionPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        let accordion = FAQ.iter().enumerate().fold(
            Accordion::new(ctx.runtime, "faq").variant(AccordionVariant::Soft),
            |acc, (i, (title, body))| {
                acc.item(
                    AccordionItem::new(*title)
                        .content(p().text(*body))
                        .default_open(i == 0),
                )
            },
        );
        Self { accordion }
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn render(&self) -> Node {
        section()
            .class("space-y-6")
            .child(gradient_header(
                "Accordion",
                "Expand and collapse content panels with accessible semantics.",
            ))
            .child(self.accordion.render())
            .child(
                div()
                    .class("text-sm text-text/70")
                    .text("Tip: Use Tab to focus headers and Enter/Space to toggle."),
            )
            .build()
    }
}
