//! The showcase application
//!
//! `ShowcaseApp` wires the runtime, the root scope, the layout shell, the router and the
//! mounted page together. Everything is driven through [`ShowcaseApp::dispatch`] with
//! [`AppEvent`]s and observed through [`ShowcaseApp::render`].
//!
//! # Example
//!
//! ```ignore
//! use showcase_app::prelude::*;
//!
//! let mut app = ShowcaseApp::new(AppConfig::default(), EnvConfig::default());
//! app.dispatch(AppEvent::Navigate("/toast".into()))?;
//! app.dispatch(AppEvent::ToastFire(ToastTone::Success))?;
//! app.advance(3500);
//! ```

use crate::config::AppConfig;
use crate::env::EnvConfig;
use crate::error::{AppError, Result};
use crate::layout::MainLayout;
use crate::pages::{ActivePage, PageContext};
use crate::router::{Route, Router};
use serde_json::Value;
use showcase_cn::{Footer, ToastId, ToastProvider, ToastSpec, ToastTone};
use showcase_core::{Scope, ShowcaseRuntime};
use showcase_layout::prelude::*;
use showcase_theme::{ColorScheme, ThemeState};

/// A user interaction
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Navigate(String),
    Back,
    ToggleTheme,
    /// The navbar "Demos" trigger
    MenuToggle,
    Key { key: String, shift: bool },

    AccordionToggle(String),

    CarouselNext,
    CarouselPrev,
    CarouselGoTo(isize),
    /// A horizontal drag from one x coordinate to another
    CarouselSwipe { from: f32, to: f32 },

    ChatToggle,
    ChatInput(String),
    ChatSend,

    WizardSet { key: String, value: Value },
    WizardConsent(bool),
    WizardNext,
    WizardBack,

    TestimonialNext,
    TestimonialPrev,

    /// One of the toast page's per-tone buttons
    ToastFire(ToastTone),
    ToastSticky,
    /// Enqueue an arbitrary toast from anywhere
    ToastShow(ToastSpec),
    ToastDismiss(ToastId),
    ToastClear,
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Navigate(_) => "navigate",
            AppEvent::Back => "back",
            AppEvent::ToggleTheme => "toggle-theme",
            AppEvent::MenuToggle => "menu toggle",
            AppEvent::Key { .. } => "key",
            AppEvent::AccordionToggle(_) => "accordion toggle",
            AppEvent::CarouselNext => "carousel next",
            AppEvent::CarouselPrev => "carousel prev",
            AppEvent::CarouselGoTo(_) => "carousel go",
            AppEvent::CarouselSwipe { .. } => "carousel swipe",
            AppEvent::ChatToggle => "chat open",
            AppEvent::ChatInput(_) => "chat input",
            AppEvent::ChatSend => "chat send",
            AppEvent::WizardSet { .. } => "wizard set",
            AppEvent::WizardConsent(_) => "wizard consent",
            AppEvent::WizardNext => "wizard next",
            AppEvent::WizardBack => "wizard back",
            AppEvent::TestimonialNext => "testimonial next",
            AppEvent::TestimonialPrev => "testimonial prev",
            AppEvent::ToastFire(_) => "toast",
            AppEvent::ToastSticky => "toast sticky",
            AppEvent::ToastShow(_) => "toast show",
            AppEvent::ToastDismiss(_) => "dismiss",
            AppEvent::ToastClear => "clear-toasts",
        }
    }
}

/// The running application
pub struct ShowcaseApp {
    // Dropped first so page timers are cancelled before the shell goes away
    page: ActivePage,
    layout: MainLayout,
    router: Router,
    toasts: ToastProvider,
    theme: ThemeState,
    page_scope: Scope,
    root: Scope,
    config: AppConfig,
    env: EnvConfig,
    runtime: ShowcaseRuntime,
}

impl ShowcaseApp {
    /// Build the app and mount the home page
    pub fn new(config: AppConfig, env: EnvConfig) -> Self {
        Self::with_runtime(ShowcaseRuntime::new(), config, env)
    }

    /// Build the app on an existing runtime
    pub fn with_runtime(runtime: ShowcaseRuntime, config: AppConfig, env: EnvConfig) -> Self {
        let root = Scope::root();
        let toasts = ToastProvider::new(&runtime, config.toast.clone());
        toasts.provide(&root);

        let theme = ThemeState::new(&runtime, config.theme.initial);
        root.provide(theme.clone());

        let footer = match config.site.copyright_year {
            Some(year) => Footer::new().year(year),
            None => Footer::new(),
        };
        let layout = MainLayout::new(&runtime, theme.clone(), footer);
        let page_scope = root.child("layout").child("page");
        let router = Router::new(&runtime, "/");

        let page = ActivePage::mount(
            router.route(),
            &PageContext {
                runtime: &runtime,
                scope: &page_scope,
                config: &config,
            },
        );

        tracing::debug!(
            node_env = %env.node_env,
            scheme = %theme.scheme(),
            "showcase app started"
        );

        Self {
            page,
            layout,
            router,
            toasts,
            theme,
            page_scope,
            root,
            config,
            env,
            runtime,
        }
    }

    pub fn runtime(&self) -> &ShowcaseRuntime {
        &self.runtime
    }

    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn root_scope(&self) -> &Scope {
        &self.root
    }

    pub fn toasts(&self) -> &ToastProvider {
        &self.toasts
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn layout(&self) -> &MainLayout {
        &self.layout
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn page(&self) -> &ActivePage {
        &self.page
    }

    pub fn current_route(&self) -> Route {
        self.page.route()
    }

    pub fn location(&self) -> String {
        self.router.location()
    }

    /// Navigate and mount the page for `path`
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = self.router.navigate(path);
        self.remount(route);
        route
    }

    /// Go back one history entry
    pub fn back(&mut self) -> Option<Route> {
        let route = self.router.back()?;
        self.remount(route);
        Some(route)
    }

    fn remount(&mut self, route: Route) {
        self.layout.navbar().demos().close();
        // Unmount before mounting so the old page's timers are gone first
        self.page = ActivePage::NotFound;
        self.page = ActivePage::mount(
            route,
            &PageContext {
                runtime: &self.runtime,
                scope: &self.page_scope,
                config: &self.config,
            },
        );
    }

    /// Move the virtual clock. Returns the number of timers that fired.
    pub fn advance(&self, ms: u64) -> usize {
        self.runtime.advance_by(ms)
    }

    /// The shell with the current page inside
    pub fn render(&self) -> Node {
        self.layout
            .render(&self.location(), self.page.render(), &self.toasts)
    }

    /// A complete HTML document for the current page
    pub fn render_html(&self) -> String {
        let route = self.current_route();
        let document = self.layout.render_document(
            &self.location(),
            route.title(),
            self.page.render(),
            &self.toasts,
        );
        format!("<!doctype html>\n{}", render_html(&document))
    }

    fn not_on_page(&self, event: &AppEvent) -> AppError {
        AppError::NotOnPage {
            event: event.name(),
            route: self.current_route().title().to_string(),
        }
    }

    /// Apply one interaction
    pub fn dispatch(&mut self, event: AppEvent) -> Result<()> {
        tracing::debug!(event = event.name(), route = %self.current_route(), "dispatch");
        match &event {
            AppEvent::Navigate(path) => {
                self.navigate(path);
            }
            AppEvent::Back => {
                if self.back().is_none() {
                    tracing::debug!("history is at its start");
                }
            }
            AppEvent::ToggleTheme => {
                self.layout.navbar().toggle_theme();
            }
            AppEvent::MenuToggle => {
                self.layout.navbar().demos().toggle();
            }
            AppEvent::Key { key, shift } => self.handle_key(key, *shift),
            AppEvent::ToastShow(spec) => {
                self.toasts.show_toast(spec.clone());
            }
            AppEvent::ToastDismiss(id) => self.toasts.dismiss(*id),
            AppEvent::ToastClear => self.toasts.clear(),
            _ => return self.dispatch_to_page(&event),
        }
        Ok(())
    }

    fn handle_key(&self, key: &str, shift: bool) {
        if self.layout.navbar().demos().handle_key(key) {
            return;
        }
        match &self.page {
            ActivePage::Carousel(p) => {
                p.carousel().handle_key(key);
            }
            ActivePage::Testimonial(p) => {
                p.slider().carousel().handle_key(key);
            }
            ActivePage::Chatbot(p) => {
                p.launcher().with_chatbot(|bot| bot.handle_key(key, shift));
            }
            _ => {}
        }
    }

    /// Events that target a widget on the mounted page
    fn dispatch_to_page(&self, event: &AppEvent) -> Result<()> {
        match (event, &self.page) {
            (AppEvent::AccordionToggle(key), ActivePage::Accordion(p)) => {
                p.accordion().toggle(key);
            }

            (AppEvent::CarouselNext, ActivePage::Carousel(p)) => p.carousel().next(),
            (AppEvent::CarouselPrev, ActivePage::Carousel(p)) => p.carousel().prev(),
            (AppEvent::CarouselGoTo(n), ActivePage::Carousel(p)) => p.carousel().go_to(*n),
            (AppEvent::CarouselSwipe { from, to }, ActivePage::Carousel(p)) => {
                let carousel = p.carousel();
                carousel.touch_start(*from);
                carousel.touch_move(*to);
                carousel.touch_end();
            }

            (AppEvent::ChatToggle, ActivePage::Chatbot(p)) => {
                p.launcher().toggle();
            }
            (AppEvent::ChatInput(text), ActivePage::Chatbot(p)) => {
                p.launcher()
                    .with_chatbot(|bot| bot.set_input(text.clone()))
                    .ok_or_else(|| self.not_on_page(event))?;
            }
            (AppEvent::ChatSend, ActivePage::Chatbot(p)) => {
                p.launcher()
                    .with_chatbot(|bot| bot.send())
                    .ok_or_else(|| self.not_on_page(event))?;
            }

            (AppEvent::WizardSet { key, value }, ActivePage::FormWizard(p)) => {
                p.set_field(key, value.clone());
            }
            (AppEvent::WizardConsent(checked), ActivePage::FormWizard(p)) => {
                p.set_consent(*checked);
            }
            (AppEvent::WizardNext, ActivePage::FormWizard(p)) => {
                let outcome = p.next();
                tracing::debug!(?outcome, "wizard next");
            }
            (AppEvent::WizardBack, ActivePage::FormWizard(p)) => {
                p.back();
            }

            (AppEvent::TestimonialNext, ActivePage::Testimonial(p)) => p.slider().next(),
            (AppEvent::TestimonialPrev, ActivePage::Testimonial(p)) => p.slider().prev(),

            (AppEvent::ToastFire(tone), ActivePage::Toast(p)) => {
                p.fire(*tone);
            }
            (AppEvent::ToastSticky, ActivePage::Toast(p)) => {
                p.sticky();
            }

            _ => return Err(self.not_on_page(event)),
        }
        Ok(())
    }

    /// Switch to a scheme directly
    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.theme.set(scheme);
    }
}

impl std::fmt::Debug for ShowcaseApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcaseApp")
            .field("location", &self.location())
            .field("page", &self.page)
            .field("scheme", &self.theme.scheme())
            .field("toasts", &self.toasts.len())
            .finish()
    }
}
