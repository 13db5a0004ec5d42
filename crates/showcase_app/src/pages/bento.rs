//! Bento menu demo

use super::surface_header;
use showcase_cn::{bento_menu, BentoItem};
use showcase_layout::prelude::*;

pub fn items() -> Vec<BentoItem> {
    [
        ("Accordion", "Collapsible content", "/accordion", "🧩"),
        ("Breadcrumbs", "Navigation trail", "/breadcrumbs", "🧭"),
        ("Carousel", "Sliding content", "/carousel", "🎞️"),
        ("Chatbot", "Conversational UI", "/chatbot", "🤖"),
        ("Form Wizard", "Multi-step forms", "/form-wizard", "🪄"),
        ("Testimonial", "Customer quotes", "/testimonial", "💬"),
    ]
    .into_iter()
    .map(|(title, description, href, icon)| {
        BentoItem::new(title)
            .description(description)
            .href(href)
            .icon(icon)
    })
    .collect()
}

pub fn render() -> Node {
    section()
        .class("space-y-6")
        .child(surface_header(
            "Bento Menu",
            "A modern grid-based navigation menu. Fully responsive and keyboard accessible.",
        ))
        .child(bento_menu(items()))
        .build()
}
