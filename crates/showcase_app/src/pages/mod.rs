//! Demo pages
//!
//! Stateless pages are plain render functions. Pages that own widgets are mounted
//! when their route becomes active and dropped when the user navigates away, which
//! cancels any timers their widgets scheduled.

pub mod accordion;
pub mod bento;
pub mod breadcrumbs;
pub mod carousel;
pub mod chatbot;
pub mod form_wizard;
pub mod home;
pub mod not_found;
pub mod testimonial;
pub mod toast;

use crate::config::AppConfig;
use crate::router::Route;
use showcase_core::{Scope, ShowcaseRuntime};
use showcase_layout::prelude::*;

pub use accordion::AccordionPage;
pub use carousel::CarouselPage;
pub use chatbot::ChatbotPage;
pub use form_wizard::FormWizardPage;
pub use testimonial::TestimonialPage;
pub use toast::ToastPage;

/// What a page needs to mount
pub struct PageContext<'a> {
    pub runtime: &'a ShowcaseRuntime,
    /// The page's own scope, below the layout
    pub scope: &'a Scope,
    pub config: &'a AppConfig,
}

/// The mounted page for the current route
#[derive(Debug)]
pub enum ActivePage {
    Home,
    Accordion(AccordionPage),
    BentoMenu,
    Breadcrumbs,
    Carousel(CarouselPage),
    Chatbot(ChatbotPage),
    FormWizard(FormWizardPage),
    Testimonial(TestimonialPage),
    Toast(ToastPage),
    NotFound,
}

impl ActivePage {
    pub fn mount(route: Route, ctx: &PageContext<'_>) -> Self {
        tracing::debug!(%route, "page mounted");
        match route {
            Route::Home => ActivePage::Home,
            Route::Accordion => ActivePage::Accordion(AccordionPage::new(ctx)),
            Route::BentoMenu => ActivePage::BentoMenu,
            Route::Breadcrumbs => ActivePage::Breadcrumbs,
            Route::Carousel => ActivePage::Carousel(CarouselPage::new(ctx)),
            Route::Chatbot => ActivePage::Chatbot(ChatbotPage::new(ctx)),
            Route::FormWizard => ActivePage::FormWizard(FormWizardPage::new(ctx)),
            Route::Testimonial => ActivePage::Testimonial(TestimonialPage::new(ctx)),
            Route::Toast => ActivePage::Toast(ToastPage::new(ctx)),
            Route::NotFound => ActivePage::NotFound,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActivePage::Home => Route::Home,
            ActivePage::Accordion(_) => Route::Accordion,
            ActivePage::BentoMenu => Route::BentoMenu,
            ActivePage::Breadcrumbs => Route::Breadcrumbs,
            ActivePage::Carousel(_) => Route::Carousel,
            ActivePage::Chatbot(_) => Route::Chatbot,
            ActivePage::FormWizard(_) => Route::FormWizard,
            ActivePage::Testimonial(_) => Route::Testimonial,
            ActivePage::Toast(_) => Route::Toast,
            ActivePage::NotFound => Route::NotFound,
        }
    }

    pub fn render(&self) -> Node {
        match self {
            ActivePage::Home => home::render(),
            ActivePage::Accordion(page) => page.render(),
            ActivePage::BentoMenu => bento::render(),
            ActivePage::Breadcrumbs => breadcrumbs::render(),
            ActivePage::Carousel(page) => page.render(),
            ActivePage::Chatbot(page) => page.render(),
            ActivePage::FormWizard(page) => page.render(),
            ActivePage::Testimonial(page) => page.render(),
            ActivePage::Toast(page) => page.render(),
            ActivePage::NotFound => not_found::render(),
        }
    }
}

/// Gradient page header used by several demos
pub(crate) fn gradient_header(title: &str, subtitle: &str) -> Div {
    header()
        .class("rounded-2xl overflow-hidden border border-black/5")
        .child(
            div().class("bg-brand-gradient").child(
                div()
                    .class("surface-overlay-soft px-6 py-6")
                    .child(h1().class("text-2xl font-bold text-white").text(title))
                    .child(p().class("text-white/90 mt-1").text(subtitle)),
            ),
        )
}

/// Plain surface page header
pub(crate) fn surface_header(title: &str, subtitle: &str) -> Div {
    header()
        .class("ocean-surface p-6")
        .child(h1().class("text-2xl font-bold").text(title))
        .child(p().class("text-text/70 mt-1").text(subtitle))
}
