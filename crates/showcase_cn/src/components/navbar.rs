//! Site navigation bar
//!
//! Brand on the left, primary links in the middle, a "Demos" dropdown and the theme
//! toggle on the right. A stacked copy of the links renders below the bar for small
//! screens.

use crate::components::dropdown::{DropdownMenu, MenuLink};
use showcase_core::ShowcaseRuntime;
use showcase_layout::prelude::*;
use showcase_theme::{ColorScheme, ThemeState};

/// One primary navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub to: &'static str,
    pub label: &'static str,
    /// Only active on an exact path match
    pub end: bool,
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { to: "/", label: "Home", end: true },
    NavItem { to: "/accordion", label: "Accordion", end: false },
    NavItem { to: "/bentomenu", label: "Bento", end: false },
    NavItem { to: "/breadcrumbs", label: "Breadcrumbs", end: false },
    NavItem { to: "/carousel", label: "Carousel", end: false },
    NavItem { to: "/chatbot", label: "Chatbot", end: false },
    NavItem { to: "/form-wizard", label: "Form Wizard", end: false },
    NavItem { to: "/testimonial", label: "Testimonial", end: false },
    NavItem { to: "/toast", label: "Toast", end: false },
];

impl NavItem {
    /// Exact match for `end` items, segment-prefix match otherwise
    pub fn is_active(&self, path: &str) -> bool {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        if self.end {
            return path == self.to;
        }
        path == self.to
            || path
                .strip_prefix(self.to)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

const BASE_LINK: &str = "px-3 py-2 rounded-lg text-sm font-medium transition focus:outline-none focus-visible:ring-2 focus-visible:ring-white/50";
const ACTIVE_LINK: &str = "bg-white/90 text-text shadow-soft underline underline-offset-4 decoration-white";
const INACTIVE_LINK: &str = "text-white/90 hover:text-white hover:bg-white/10";

pub struct Navbar {
    theme: ThemeState,
    demos: DropdownMenu,
}

impl Navbar {
    pub fn new(runtime: &ShowcaseRuntime, theme: ThemeState) -> Self {
        let demos = DropdownMenu::new(runtime, "Demos").links(
            NAV_ITEMS
                .iter()
                .filter(|item| !item.end)
                .map(|item| MenuLink::new(item.label, item.to)),
        );
        Self { theme, demos }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn demos(&self) -> &DropdownMenu {
        &self.demos
    }

    /// Theme toggle click
    pub fn toggle_theme(&self) -> ColorScheme {
        self.theme.toggle()
    }

    fn theme_toggle(&self) -> Div {
        let text = match self.theme.scheme() {
            ColorScheme::Light => "🌙 Dark",
            ColorScheme::Dark => "☀️ Light",
        };
        el("button")
            .kind("button")
            .class("inline-flex items-center gap-2 px-3 py-2 text-sm font-semibold rounded-xl bg-primary text-white hover:bg-blue-600 transition shadow-soft")
            .aria("label", self.theme.toggle_label())
            .data("action", "toggle-theme")
            .text(text)
    }

    pub fn render(&self, current_path: &str) -> Node {
        let desktop_links = NAV_ITEMS.iter().map(|item| {
            let active = item.is_active(current_path);
            a().href(item.to)
                .class(BASE_LINK)
                .class(if active { ACTIVE_LINK } else { INACTIVE_LINK })
                .when(active, |l| l.aria("current", "page"))
                .text(item.label)
        });

        let mobile_links = NAV_ITEMS.iter().map(|item| {
            let active = item.is_active(current_path);
            a().href(item.to)
                .class("px-3 py-2 rounded-lg text-sm font-medium transition focus:outline-none focus-visible:ring-2 focus-visible:ring-[#1840a0]")
                .class(if active {
                    "bg-primary text-white shadow-soft"
                } else {
                    "text-text hover:bg-black/5"
                })
                .when(active, |l| l.aria("current", "page"))
                .text(item.label)
        });

        let brand = a()
            .href("/")
            .class("flex items-center gap-2")
            .aria("label", "Home")
            .child(
                div()
                    .class("h-8 w-8 rounded-xl bg-white text-text grid place-items-center font-bold shadow-soft")
                    .text("UI"),
            )
            .child(
                span()
                    .class("text-base sm:text-lg font-semibold text-white truncate")
                    .text("Components Showcase"),
            );

        let bar = div().class("w-full app-header-major").child(
            div().class("app-header-inner").child(
                div().class("mx-auto max-w-6xl px-4").child(
                    div()
                        .class("h-14 flex items-center justify-between gap-3")
                        .child(div().class("min-w-0").child(brand))
                        .child(
                            div()
                                .class("hidden md:flex items-center justify-center gap-1.5")
                                .role("navigation")
                                .aria("label", "Primary")
                                .children(desktop_links),
                        )
                        .child(
                            div()
                                .class("flex items-center justify-end gap-2")
                                .child(self.demos.render(current_path))
                                .child(self.theme_toggle()),
                        ),
                ),
            ),
        );

        nav()
            .class("sticky top-0 z-40")
            .aria("label", "Site")
            .child(bar)
            .child(
                div()
                    .class("md:hidden border-t border-white/15 bg-white")
                    .role("navigation")
                    .aria("label", "Mobile")
                    .child(
                        div()
                            .class("mx-auto max-w-6xl px-4 py-2 flex flex-wrap gap-2")
                            .children(mobile_links),
                    ),
            )
            .build()
    }
}

impl std::fmt::Debug for Navbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navbar")
            .field("scheme", &self.theme.scheme())
            .field("demos", &self.demos)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_matches_exactly_others_by_prefix() {
        let home = NAV_ITEMS[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/toast"));

        let toast = NAV_ITEMS[8];
        assert!(toast.is_active("/toast"));
        assert!(toast.is_active("/toast/"));
        assert!(toast.is_active("/toast/history"));
        assert!(!toast.is_active("/toaster"));
    }

    #[test]
    fn test_theme_toggle_label_tracks_scheme() {
        let rt = ShowcaseRuntime::new();
        let navbar = Navbar::new(&rt, ThemeState::new(&rt, ColorScheme::Light));

        let root = navbar.render("/").into_element().unwrap();
        let toggle = root.find_by_attr("data-action", "toggle-theme").unwrap();
        assert_eq!(toggle.attr("aria-label"), Some("Switch to dark mode"));

        assert_eq!(navbar.toggle_theme(), ColorScheme::Dark);
        let root = navbar.render("/").into_element().unwrap();
        let toggle = root.find_by_attr("data-action", "toggle-theme").unwrap();
        assert_eq!(toggle.attr("aria-label"), Some("Switch to light mode"));
    }

    #[test]
    fn test_active_link_marked_in_both_lists() {
        let rt = ShowcaseRuntime::new();
        let navbar = Navbar::new(&rt, ThemeState::new(&rt, ColorScheme::Light));
        let root = navbar.render("/carousel").into_element().unwrap();
        let current = root.find_all_by_attr("aria-current", "page");
        assert_eq!(current.len(), 2);
        assert!(current.iter().all(|l| l.attr("href") == Some("/carousel")));
        assert_eq!(navbar.demos().items().len(), 8);
    }
}
