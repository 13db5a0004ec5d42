//! Themed components built on showcase_layout primitives
//!
//! Stateless components follow the builder pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant/size enums (e.g., `ButtonVariant`)
//! - Implements `ElementBuilder` for rendering
//!
//! Stateful widgets (accordion, carousel, chatbot, form wizard, toasts, dropdown) are
//! controllers created from a `ShowcaseRuntime`. They expose event methods and a
//! `render` method that reads their current state.

pub mod accordion;
pub mod badge;
pub mod bento_menu;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod carousel;
pub mod chatbot;
pub mod dropdown;
pub mod form_wizard;
pub mod header;
pub mod navbar;
pub mod testimonial;
pub mod toast;

pub use accordion::{Accordion, AccordionItem, AccordionMode, AccordionVariant};
pub use badge::{badge, Badge, BadgeSize, BadgeTone, BadgeVariant};
pub use bento_menu::{bento_menu, span_for, BentoItem, BentoMenu, SPAN_PATTERN};
pub use breadcrumb::{breadcrumbs, Breadcrumbs, Crumb};
pub use button::{button, Button, ButtonSize, ButtonVariant};
pub use card::{card, Card, CardVariant};
pub use carousel::{Carousel, CarouselConfig, CarouselSlide, SwipeDirection};
pub use chatbot::{mock_reply, ChatLauncher, ChatMessage, ChatRole, Chatbot, ChatbotConfig, GREETING};
pub use dropdown::{place_panel, DropdownMenu, MenuLink, Placement};
pub use form_wizard::{
    field_text, field_truthy, FormData, FormWizard, StepContext, StepStatus, WizardOutcome,
    WizardStep,
};
pub use header::{page_header, Footer, Header, FOOTER_LINKS};
pub use navbar::{NavItem, Navbar, NAV_ITEMS};
pub use testimonial::{Testimonial, TestimonialSlider};
pub use toast::{
    try_use_toast, use_toast, Corner, ParseToneError, Toast, ToastConfig, ToastId, ToastProvider,
    ToastSpec, ToastTone,
};
