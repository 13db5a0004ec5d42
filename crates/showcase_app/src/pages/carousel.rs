//! Carousel demo: two photos and a custom slide, autoplaying

use super::PageContext;
use showcase_cn::{page_header, Carousel, CarouselSlide};
use showcase_layout::prelude::*;

#[derive(Debug)]
pub struct CarouselPage {
    carousel: Carousel,
}

impl CarouselPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        let custom = div()
            .class("h-full w-full grid place-items-center bg-gradient-to-br from-blue-50 to-amber-50")
            .child(
                div()
                    .class("ocean-surface p-6 border border-black/5 text-center")
                    .child(div().class("text-2xl font-bold text-primary").text("Custom Slide"))
                    .child(
                        p().class("text-sm text-text/70 mt-2")
                            .text("You can render any content inside the carousel."),
                    ),
            );

        let carousel = Carousel::new(ctx.runtime, ctx.config.carousel.clone()).slides([
            CarouselSlide::image(
                "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1600&auto=format&fit=crop",
                "Ocean waves",
            ),
            CarouselSlide::image(
                "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1600&auto=format&fit=crop",
                "Mountain valley",
            ),
            CarouselSlide::content(custom),
        ]);
        carousel.mount();
        Self { carousel }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn render(&self) -> Node {
        section()
            .class("space-y-6")
            .child(page_header("Carousel").subtitle(
                "Slide through content with autoplay, indicators, keyboard and swipe support.",
            ))
            .child(self.carousel.render())
            .build()
    }
}
