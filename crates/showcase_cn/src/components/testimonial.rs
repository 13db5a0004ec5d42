//! Testimonial quote card and slider

use crate::components::carousel::{Carousel, CarouselConfig, CarouselSlide};
use showcase_core::ShowcaseRuntime;
use showcase_layout::prelude::*;

/// A customer quote
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// "role • company", or "Customer" when neither is set
    pub fn meta_line(&self) -> String {
        let parts: Vec<&str> = [self.role.as_deref(), self.company.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "Customer".to_string()
        } else {
            parts.join(" • ")
        }
    }

    /// First letter of the author, or "?"
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "?".to_string())
    }
}

impl ElementBuilder for Testimonial {
    fn build(self) -> Node {
        let avatar = div()
            .class("h-12 w-12 rounded-full overflow-hidden bg-primary/10 grid place-items-center text-primary font-semibold");
        let avatar = match &self.avatar_url {
            Some(url) => avatar.child(
                img()
                    .attr("src", url.clone())
                    .attr("alt", format!("{} avatar", self.author))
                    .class("h-full w-full object-cover"),
            ),
            None => avatar.text(self.initial()),
        };
        let meta = self.meta_line();

        figure()
            .class("ocean-surface p-6 border border-black/5")
            .child(
                blockquote()
                    .class("text-lg text-text/90")
                    .text(format!("“{}”", self.quote)),
            )
            .child(
                figcaption()
                    .class("mt-4 flex items-center gap-3")
                    .child(avatar)
                    .child(
                        div()
                            .child(div().class("font-semibold text-text").text(self.author))
                            .child(div().class("text-sm text-text/60").text(meta)),
                    ),
            )
            .build()
    }
}

/// Slider over testimonial cards, sharing the carousel's wrap and swipe behavior.
/// Autoplay is off unless the config enables it.
pub struct TestimonialSlider {
    items: Vec<Testimonial>,
    carousel: Carousel,
}

impl TestimonialSlider {
    pub fn new(runtime: &ShowcaseRuntime, items: impl IntoIterator<Item = Testimonial>) -> Self {
        Self::with_config(
            runtime,
            CarouselConfig {
                autoplay: false,
                ..CarouselConfig::default()
            },
            items,
        )
    }

    pub fn with_config(
        runtime: &ShowcaseRuntime,
        config: CarouselConfig,
        items: impl IntoIterator<Item = Testimonial>,
    ) -> Self {
        let items: Vec<Testimonial> = items.into_iter().collect();
        let carousel = Carousel::new(runtime, config).slides(
            items
                .iter()
                .cloned()
                .map(CarouselSlide::content),
        );
        Self { items, carousel }
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.carousel.index())
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn next(&self) {
        self.carousel.next();
    }

    pub fn prev(&self) {
        self.carousel.prev();
    }

    pub fn render(&self) -> Node {
        section()
            .aria("label", "Testimonials")
            .class("space-y-2")
            .child(self.carousel.render())
            .build()
    }
}

impl std::fmt::Debug for TestimonialSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestimonialSlider")
            .field("count", &self.items.len())
            .field("index", &self.index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::SchedulerExt;

    #[test]
    fn test_meta_line_and_initial() {
        let t = Testimonial::new("Great", "Priya Patel")
            .role("Product Designer")
            .company("Ripple Labs");
        assert_eq!(t.meta_line(), "Product Designer • Ripple Labs");
        assert_eq!(t.initial(), "P");

        let bare = Testimonial::new("Nice", "");
        assert_eq!(bare.meta_line(), "Customer");
        assert_eq!(bare.initial(), "?");
        assert_eq!(
            Testimonial::new("q", "a").company("Acme").meta_line(),
            "Acme"
        );
    }

    #[test]
    fn test_card_markup() {
        let root = Testimonial::new("Fast and clean", "Alex")
            .avatar_url("/alex.png")
            .build()
            .into_element()
            .unwrap();
        assert_eq!(root.tag, "figure");
        let quote = root.find_all_by_tag("blockquote");
        assert_eq!(quote[0].text_content(), "“Fast and clean”");
        assert!(root.find_by_attr("alt", "Alex avatar").is_some());
    }

    #[test]
    fn test_slider_wraps() {
        let rt = ShowcaseRuntime::new();
        let slider = TestimonialSlider::new(
            &rt,
            [
                Testimonial::new("one", "A"),
                Testimonial::new("two", "B"),
                Testimonial::new("three", "C"),
            ],
        );
        slider.prev();
        assert_eq!(slider.current().map(|t| t.author.as_str()), Some("C"));
        slider.next();
        assert_eq!(slider.index(), 0);

        slider.carousel().mount();
        assert_eq!(rt.timers().pending_count(), 0);
    }
}
