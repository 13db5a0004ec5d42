//! Layout shell: navbar, page content and footer
//!
//! The layout owns the document root's attributes. An effect mirrors the theme
//! scheme into `data-theme` so the attribute follows every toggle without the
//! toggle handler knowing about the document.

use indexmap::IndexMap;
use showcase_cn::{Footer, Navbar, ToastProvider};
use showcase_core::{Effect, ShowcaseRuntime};
use showcase_layout::prelude::*;
use showcase_theme::ThemeState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Attributes set on the document root element
#[derive(Clone, Debug, Default)]
pub struct Document {
    attrs: Arc<Mutex<IndexMap<String, String>>>,
}

impl Document {
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, String>> {
        self.attrs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_attr(&self, name: &str, value: impl Into<String>) {
        self.lock().insert(name.to_string(), value.into());
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    /// Current `data-theme` value
    pub fn data_theme(&self) -> Option<String> {
        self.attr("data-theme")
    }

    pub fn attrs(&self) -> IndexMap<String, String> {
        self.lock().clone()
    }
}

pub struct MainLayout {
    runtime: ShowcaseRuntime,
    theme: ThemeState,
    navbar: Navbar,
    footer: Footer,
    document: Document,
    theme_effect: Effect,
}

impl MainLayout {
    pub fn new(runtime: &ShowcaseRuntime, theme: ThemeState, footer: Footer) -> Self {
        let document = Document::default();
        let signal = theme.signal();
        let doc = document.clone();
        let theme_effect = runtime.create_effect(move |graph| {
            if let Some(scheme) = graph.get(signal) {
                tracing::debug!(%scheme, "data-theme applied");
                doc.set_attr("data-theme", scheme.as_str());
            }
        });

        Self {
            runtime: runtime.clone(),
            navbar: Navbar::new(runtime, theme.clone()),
            theme,
            footer,
            document,
            theme_effect,
        }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The app shell around `page`, with the toast stack on top
    pub fn render(&self, current_path: &str, page: Node, toasts: &ToastProvider) -> Node {
        let shell = div()
            .class("min-h-screen flex flex-col bg-app-gradient text-text")
            .child(self.navbar.render(current_path))
            .child(
                main()
                    .class("flex-1")
                    .child(div().class("mx-auto max-w-6xl px-4 py-8").child(page)),
            )
            .child(self.footer.clone());
        toasts.render(shell)
    }

    /// A full HTML document: theme variables in the head, shell in the body
    pub fn render_document(&self, current_path: &str, title: &str, page: Node, toasts: &ToastProvider) -> Node {
        let attrs = self.document.attrs();
        let html = attrs
            .into_iter()
            .fold(el("html").attr("lang", "en"), |html, (name, value)| {
                html.attr(&name, value)
            });

        let theme = self.theme.theme();
        html.child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(el("title").text(format!("{title} · Components Showcase")))
                .child(el("style").text(theme.to_css_block())),
        )
        .child(el("body").child(self.render(current_path, page, toasts)))
        .build()
    }
}

impl Drop for MainLayout {
    fn drop(&mut self) {
        self.runtime.dispose_effect(self.theme_effect);
    }
}

impl std::fmt::Debug for MainLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainLayout")
            .field("scheme", &self.theme.scheme())
            .field("document", &self.document.attrs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_cn::ToastConfig;
    use showcase_theme::ColorScheme;

    #[test]
    fn test_data_theme_follows_toggle() {
        let rt = ShowcaseRuntime::new();
        let theme = ThemeState::new(&rt, ColorScheme::Light);
        let layout = MainLayout::new(&rt, theme.clone(), Footer::new());
        assert_eq!(layout.document().data_theme().as_deref(), Some("light"));

        theme.toggle();
        assert_eq!(layout.document().data_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_shell_structure() {
        let rt = ShowcaseRuntime::new();
        let layout = MainLayout::new(&rt, ThemeState::new(&rt, ColorScheme::Dark), Footer::new());
        let toasts = ToastProvider::new(&rt, ToastConfig::default());

        let doc = layout
            .render_document("/", "Home", p().text("hello").build(), &toasts)
            .into_element()
            .unwrap();
        assert_eq!(doc.attr("data-theme"), Some("dark"));
        assert!(doc.find_by_role("region").is_some());
        assert!(doc.find_all_by_tag("main")[0].text_content().contains("hello"));
        assert!(doc.find_all_by_tag("style")[0]
            .text_content()
            .contains("[data-theme=\"dark\"]"));
    }
}
