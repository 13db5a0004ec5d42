//! Carousel with arrows, indicators, keyboard, swipe and autoplay
//!
//! The current slide is a wrapped index in `[0, count)`. Autoplay is an interval on
//! the runtime's timer queue; any manual navigation re-arms it so the next automatic
//! advance is a full period away. Dropping the carousel (or calling
//! [`Carousel::unmount`]) cancels the interval.
//!
//! ```ignore
//! let carousel = Carousel::new(&runtime, CarouselConfig::default())
//!     .slide(CarouselSlide::image("/img/a.png", "Reef"))
//!     .slide(CarouselSlide::content(h3().text("Custom")));
//! carousel.mount();
//! runtime.advance_by(4000); // index 1
//! ```

use serde::{Deserialize, Serialize};
use showcase_core::{SchedulerExt, ShowcaseRuntime, State, TimerId};
use showcase_layout::prelude::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Carousel behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval_ms: u64,
    /// Minimum horizontal travel for a touch gesture to count as a swipe
    pub swipe_threshold_px: f32,
    pub show_arrows: bool,
    pub show_indicators: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: 4000,
            swipe_threshold_px: 40.0,
            show_arrows: true,
            show_indicators: true,
        }
    }
}

/// One slide: an image URL or arbitrary content
#[derive(Clone, Debug)]
pub enum CarouselSlide {
    Image { src: String, alt: Option<String> },
    Content(Node),
}

impl CarouselSlide {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        CarouselSlide::Image {
            src: src.into(),
            alt: Some(alt.into()),
        }
    }

    pub fn content(content: impl ElementBuilder) -> Self {
        CarouselSlide::Content(content.build())
    }
}

/// Direction of a recognized swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide
    Next,
    /// Finger moved right: show the previous slide
    Previous,
}

#[derive(Default)]
struct TouchTrack {
    start_x: f32,
    end_x: f32,
}

/// Stateful carousel
pub struct Carousel {
    runtime: ShowcaseRuntime,
    config: CarouselConfig,
    slides: Vec<CarouselSlide>,
    index: State<usize>,
    autoplay_timer: Mutex<Option<TimerId>>,
    touch: Mutex<Option<TouchTrack>>,
}

impl Carousel {
    pub fn new(runtime: &ShowcaseRuntime, config: CarouselConfig) -> Self {
        Self {
            runtime: runtime.clone(),
            config,
            slides: Vec::new(),
            index: runtime.use_state(0),
            autoplay_timer: Mutex::new(None),
            touch: Mutex::new(None),
        }
    }

    pub fn slide(mut self, slide: CarouselSlide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn slides(mut self, slides: impl IntoIterator<Item = CarouselSlide>) -> Self {
        self.slides.extend(slides);
        self
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Whether autoplay applies: enabled and more than one slide
    pub fn autoplays(&self) -> bool {
        self.config.autoplay && self.count() > 1
    }

    /// Whether the autoplay interval is currently scheduled
    pub fn is_autoplay_armed(&self) -> bool {
        self.timer_slot()
            .is_some_and(|id| self.runtime.timers().is_pending(id))
    }

    /// Start autoplay
    pub fn mount(&self) {
        self.arm_autoplay();
    }

    /// Stop autoplay
    pub fn unmount(&self) {
        self.disarm_autoplay();
    }

    /// Jump to `n`, wrapping in both directions
    pub fn go_to(&self, n: isize) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let next = n.rem_euclid(count as isize) as usize;
        tracing::debug!(from = self.index(), to = next, "carousel navigate");
        self.index.set_rebuild(next);
        self.arm_autoplay();
    }

    pub fn next(&self) {
        self.go_to(self.index() as isize + 1);
    }

    pub fn prev(&self) {
        self.go_to(self.index() as isize - 1);
    }

    /// Keyboard navigation. Returns true when the key was handled.
    pub fn handle_key(&self, key: &str) -> bool {
        match key {
            "ArrowRight" => {
                self.next();
                true
            }
            "ArrowLeft" => {
                self.prev();
                true
            }
            _ => false,
        }
    }

    pub fn touch_start(&self, x: f32) {
        *self.touch_lock() = Some(TouchTrack {
            start_x: x,
            end_x: x,
        });
    }

    pub fn touch_move(&self, x: f32) {
        if let Some(track) = self.touch_lock().as_mut() {
            track.end_x = x;
        }
    }

    /// Finish a gesture, navigating when it travelled past the threshold
    pub fn touch_end(&self) -> Option<SwipeDirection> {
        let track = self.touch_lock().take()?;
        let direction = self.classify_swipe(track.end_x - track.start_x)?;
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.prev(),
        }
        Some(direction)
    }

    /// Map a horizontal delta to a swipe, if it is long enough
    pub fn classify_swipe(&self, delta_x: f32) -> Option<SwipeDirection> {
        if delta_x.abs() <= self.config.swipe_threshold_px {
            None
        } else if delta_x < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    fn timer_slot(&self) -> Option<TimerId> {
        *self
            .autoplay_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn touch_lock(&self) -> MutexGuard<'_, Option<TouchTrack>> {
        self.touch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn disarm_autoplay(&self) {
        let mut slot = self
            .autoplay_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = slot.take() {
            self.runtime.timers().clear(id);
        }
    }

    fn arm_autoplay(&self) {
        self.disarm_autoplay();
        if !self.autoplays() {
            return;
        }

        let index = self.index.clone();
        let count = self.count();
        let id = self
            .runtime
            .timers()
            .set_interval(self.config.interval_ms, "carousel-autoplay", move || {
                let next = (index.get() + 1) % count;
                index.set_rebuild(next);
            });
        *self
            .autoplay_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(id);
    }

    pub fn render(&self) -> Node {
        let idx = self.index();
        let count = self.count();
        let multi = count > 1;

        let track = div()
            .class("flex transition-transform duration-500 ease-out")
            .attr("style", format!("transform: translateX(-{}%)", idx * 100))
            .role("group")
            .aria("label", "Slides")
            .children(self.slides.iter().enumerate().map(|(i, slide)| {
                let inner = match slide {
                    CarouselSlide::Image { src, alt } => el("img")
                        .attr("src", src.clone())
                        .attr(
                            "alt",
                            alt.clone().unwrap_or_else(|| format!("Slide {}", i + 1)),
                        )
                        .class("h-full w-full object-cover")
                        .build(),
                    CarouselSlide::Content(node) => node.clone(),
                };
                div()
                    .class("min-w-full p-4")
                    .role("tabpanel")
                    .aria("hidden", (i != idx).to_string())
                    .child(
                        div()
                            .class("h-64 sm:h-80 md:h-96 rounded-xl bg-gray-100 overflow-hidden grid place-items-center")
                            .child(inner),
                    )
            }));

        const ARROW: &str = "absolute top-1/2 -translate-y-1/2 h-10 w-10 rounded-full bg-white/80 hover:bg-white shadow-soft grid place-items-center";

        div()
            .class("relative overflow-hidden rounded-2xl border border-black/5 bg-surface")
            .aria("roledescription", "carousel")
            .data("index", idx.to_string())
            .child(track)
            .when(self.config.show_arrows && multi, |d| {
                d.child(
                    el("button")
                        .kind("button")
                        .aria("label", "Previous slide")
                        .class(ARROW)
                        .class("left-3")
                        .text("‹"),
                )
                .child(
                    el("button")
                        .kind("button")
                        .aria("label", "Next slide")
                        .class(ARROW)
                        .class("right-3")
                        .text("›"),
                )
            })
            .when(self.config.show_indicators && multi, |d| {
                d.child(
                    div()
                        .class("absolute bottom-3 left-0 right-0 flex items-center justify-center gap-2")
                        .children((0..count).map(|i| {
                            el("button")
                                .kind("button")
                                .aria("label", format!("Go to slide {}", i + 1))
                                .aria("current", (i == idx).to_string())
                                .class("h-2.5 rounded-full transition-all")
                                .class(if i == idx {
                                    "w-6 bg-primary"
                                } else {
                                    "w-2.5 bg-black/20"
                                })
                        })),
                )
            })
            .build()
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.disarm_autoplay();
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("count", &self.count())
            .field("index", &self.index())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three(rt: &ShowcaseRuntime) -> Carousel {
        Carousel::new(rt, CarouselConfig::default()).slides([
            CarouselSlide::image("/a.png", "A"),
            CarouselSlide::image("/b.png", "B"),
            CarouselSlide::content(p().text("C")),
        ])
    }

    #[test]
    fn test_next_count_times_returns_to_start() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        c.go_to(1);
        for _ in 0..c.count() {
            c.next();
        }
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_prev_wraps() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        c.prev();
        assert_eq!(c.index(), 2);
        c.go_to(-4);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_autoplay_advances_and_rearms_on_navigation() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        c.mount();

        rt.advance_by(4000);
        assert_eq!(c.index(), 1);

        rt.advance_by(3000);
        c.next(); // index 2, re-armed at t=7000
        rt.advance_by(3999);
        assert_eq!(c.index(), 2);
        rt.advance_by(1);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_single_slide_never_autoplays() {
        let rt = ShowcaseRuntime::new();
        let c = Carousel::new(&rt, CarouselConfig::default())
            .slide(CarouselSlide::image("/a.png", "A"));
        c.mount();
        assert!(!c.is_autoplay_armed());
        assert_eq!(rt.timers().pending_count(), 0);

        let root = c.render().into_element().unwrap();
        assert!(root.find_by_attr("aria-label", "Next slide").is_none());
    }

    #[test]
    fn test_unmount_and_drop_cancel_autoplay() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        c.mount();
        c.unmount();
        assert_eq!(rt.timers().pending_count(), 0);

        let c = three(&rt);
        c.mount();
        drop(c);
        assert_eq!(rt.timers().pending_count(), 0);
    }

    #[test]
    fn test_swipe_threshold() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);

        c.touch_start(200.0);
        c.touch_move(170.0);
        assert_eq!(c.touch_end(), None);
        assert_eq!(c.index(), 0);

        c.touch_start(200.0);
        c.touch_move(150.0);
        assert_eq!(c.touch_end(), Some(SwipeDirection::Next));
        assert_eq!(c.index(), 1);

        c.touch_start(100.0);
        c.touch_move(141.0);
        assert_eq!(c.touch_end(), Some(SwipeDirection::Previous));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_keyboard() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.index(), 2);
        assert!(!c.handle_key("Enter"));
    }

    #[test]
    fn test_render_marks_current_indicator() {
        let rt = ShowcaseRuntime::new();
        let c = three(&rt);
        c.go_to(2);
        let root = c.render().into_element().unwrap();
        let current = root.find_by_attr("aria-label", "Go to slide 3").unwrap();
        assert_eq!(current.attr("aria-current"), Some("true"));
        assert_eq!(
            root.find_by_attr("alt", "A").map(|img| img.tag),
            Some("img")
        );
    }
}
