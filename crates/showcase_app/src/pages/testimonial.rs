//! Testimonial demo: a grid of quotes and the same quotes in a slider

use super::{surface_header, PageContext};
use showcase_cn::{Testimonial, TestimonialSlider};
use showcase_layout::prelude::*;

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "These UI components made our development faster while keeping a polished look.",
            "Alex Johnson",
        )
        .role("Frontend Lead")
        .company("BlueWave Inc."),
        Testimonial::new(
            "Clean design, great accessibility, and easy to customize.",
            "Priya Patel",
        )
        .role("Product Designer")
        .company("Ripple Labs"),
        Testimonial::new(
            "The Ocean theme looks professional and modern across all screens.",
            "Marco Rossi",
        )
        .role("Engineering Manager")
        .company("SeaSight"),
    ]
}

#[derive(Debug)]
pub struct TestimonialPage {
    slider: TestimonialSlider,
}

impl TestimonialPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        Self {
            slider: TestimonialSlider::new(ctx.runtime, testimonials()),
        }
    }

    pub fn slider(&self) -> &TestimonialSlider {
        &self.slider
    }

    pub fn render(&self) -> Node {
        section()
            .class("space-y-6")
            .child(surface_header(
                "Testimonial",
                "Customer quotes with avatars and details. Fully responsive cards.",
            ))
            .child(
                div()
                    .class("grid sm:grid-cols-2 lg:grid-cols-3 gap-4")
                    .children(testimonials()),
            )
            .child(self.slider.render())
            .build()
    }
}
