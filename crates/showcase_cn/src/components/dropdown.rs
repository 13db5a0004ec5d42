//! Dropdown menu anchored under a trigger
//!
//! Placement is a pure function of the trigger's bounds and the viewport size; the
//! menu recomputes it whenever it opens or the caller reports a new layout.

use showcase_core::{Bounds, ShowcaseRuntime, Size, State};
use showcase_layout::prelude::*;
use std::sync::{Mutex, PoisonError};

/// Minimum panel width
pub const MIN_PANEL_WIDTH: f32 = 220.0;
/// Gap kept between the panel and the viewport edges
pub const VIEWPORT_MARGIN: f32 = 8.0;
/// Vertical gap between trigger and panel
pub const PANEL_OFFSET: f32 = 8.0;

/// Where the panel goes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Place a panel under `trigger`, at least as wide as the trigger (and never
/// narrower than [`MIN_PANEL_WIDTH`] unless the viewport is), kept inside the
/// viewport with a [`VIEWPORT_MARGIN`] on both sides.
pub fn place_panel(trigger: Bounds, viewport: Size) -> Placement {
    let max_width = (viewport.width - VIEWPORT_MARGIN * 2.0).max(0.0);
    let width = trigger.width.max(MIN_PANEL_WIDTH).min(max_width);
    let max_x = (viewport.width - width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let x = trigger.x.clamp(VIEWPORT_MARGIN, max_x);
    Placement {
        x,
        y: trigger.bottom() + PANEL_OFFSET,
        width,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    pub to: String,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
        }
    }
}

#[derive(Clone, Copy, Default)]
struct Layout {
    trigger: Bounds,
    viewport: Size,
}

/// Stateful dropdown: open flag plus the last known layout
pub struct DropdownMenu {
    label: String,
    links: Vec<MenuLink>,
    open: State<bool>,
    layout: Mutex<Layout>,
}

impl DropdownMenu {
    pub fn new(runtime: &ShowcaseRuntime, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            links: Vec::new(),
            open: runtime.use_state(false),
            layout: Mutex::new(Layout::default()),
        }
    }

    pub fn link(mut self, link: MenuLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = MenuLink>) -> Self {
        self.links.extend(links);
        self
    }

    pub fn items(&self) -> &[MenuLink] {
        &self.links
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open(&self) {
        self.open.set_rebuild(true);
    }

    pub fn close(&self) {
        if self.is_open() {
            self.open.set_rebuild(false);
        }
    }

    pub fn toggle(&self) -> bool {
        let next = !self.is_open();
        self.open.set_rebuild(next);
        next
    }

    /// Escape closes. Returns true when the key was handled.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Record the trigger's measured bounds and the viewport size
    pub fn set_layout(&self, trigger: Bounds, viewport: Size) {
        *self.layout.lock().unwrap_or_else(PoisonError::into_inner) = Layout { trigger, viewport };
    }

    pub fn placement(&self) -> Placement {
        let layout = *self.layout.lock().unwrap_or_else(PoisonError::into_inner);
        place_panel(layout.trigger, layout.viewport)
    }

    /// Render with `current_path` used to mark the active link
    pub fn render(&self, current_path: &str) -> Node {
        let open = self.is_open();
        let trigger = el("button")
            .kind("button")
            .class("px-3 py-2 rounded-lg text-sm font-medium text-white/90 hover:text-white hover:bg-white/10 inline-flex items-center gap-1")
            .aria("haspopup", "menu")
            .aria("expanded", open.to_string())
            .data("action", "toggle-menu")
            .text(self.label.clone())
            .child(span().aria("hidden", "true").text("▾"));

        div()
            .class("relative")
            .child(trigger)
            .when(open, |d| {
                let place = self.placement();
                d.child(
                    div()
                        .role("menu")
                        .aria("label", self.label.clone())
                        .class("fixed z-50 rounded-xl border border-black/10 bg-surface shadow-card p-1")
                        .attr(
                            "style",
                            format!(
                                "left: {}px; top: {}px; width: {}px",
                                place.x, place.y, place.width
                            ),
                        )
                        .children(self.links.iter().map(|link| {
                            let active = current_path == link.to
                                || current_path.starts_with(&format!("{}/", link.to));
                            a().href(link.to.clone())
                                .role("menuitem")
                                .class("block px-3 py-2 rounded-lg text-sm")
                                .class(if active {
                                    "bg-primary text-white"
                                } else {
                                    "text-text hover:bg-black/5"
                                })
                                .when(active, |l| l.aria("current", "page"))
                                .text(link.label.clone())
                        })),
                )
            })
            .build()
    }
}

impl std::fmt::Debug for DropdownMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("label", &self.label)
            .field("links", &self.links.len())
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_is_at_least_min_width_and_below_trigger() {
        let p = place_panel(Bounds::new(100.0, 10.0, 80.0, 40.0), Size::new(1280.0, 800.0));
        assert_eq!(p.width, MIN_PANEL_WIDTH);
        assert_eq!(p.y, 58.0);
        assert_eq!(p.x, 100.0);

        let wide = place_panel(Bounds::new(100.0, 0.0, 300.0, 40.0), Size::new(1280.0, 800.0));
        assert_eq!(wide.width, 300.0);
    }

    #[test]
    fn test_panel_stays_inside_viewport() {
        let right = place_panel(Bounds::new(1200.0, 0.0, 60.0, 40.0), Size::new(1280.0, 800.0));
        assert_eq!(right.x, 1280.0 - 220.0 - 8.0);

        let left = place_panel(Bounds::new(-20.0, 0.0, 60.0, 40.0), Size::new(1280.0, 800.0));
        assert_eq!(left.x, 8.0);

        let narrow = place_panel(Bounds::new(50.0, 0.0, 60.0, 40.0), Size::new(200.0, 800.0));
        assert_eq!(narrow.width, 184.0);
        assert_eq!(narrow.x, 8.0);
    }

    #[test]
    fn test_open_close_and_render() {
        let rt = ShowcaseRuntime::new();
        let menu = DropdownMenu::new(&rt, "Demos")
            .link(MenuLink::new("Accordion", "/accordion"))
            .link(MenuLink::new("Toast", "/toast"));
        menu.set_layout(Bounds::new(10.0, 0.0, 90.0, 40.0), Size::new(1024.0, 768.0));

        let closed = menu.render("/toast").into_element().unwrap();
        assert!(closed.find_by_role("menu").is_none());

        assert!(menu.toggle());
        let root = menu.render("/toast").into_element().unwrap();
        let panel = root.find_by_role("menu").unwrap();
        assert_eq!(panel.attr("style"), Some("left: 10px; top: 48px; width: 220px"));
        let current = root.find_by_attr("aria-current", "page").unwrap();
        assert_eq!(current.text_content(), "Toast");

        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
        assert!(!menu.handle_key("Escape"));
    }
}
