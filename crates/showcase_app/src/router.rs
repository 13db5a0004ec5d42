//! Static route table and navigation history

use serde::Serialize;
use showcase_core::{ShowcaseRuntime, State};

/// Every page the app can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Accordion,
    BentoMenu,
    Breadcrumbs,
    Carousel,
    Chatbot,
    FormWizard,
    Testimonial,
    Toast,
    NotFound,
}

impl Route {
    /// Canonical path. `NotFound` has none.
    pub fn path(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|entry| entry.route == *self)
            .map(|entry| entry.path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Accordion => "Accordion",
            Route::BentoMenu => "Bento Menu",
            Route::Breadcrumbs => "Breadcrumbs",
            Route::Carousel => "Carousel",
            Route::Chatbot => "Chatbot",
            Route::FormWizard => "Form Wizard",
            Route::Testimonial => "Testimonial",
            Route::Toast => "Toast",
            Route::NotFound => "Page not found",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
}

pub const ROUTES: [RouteEntry; 9] = [
    RouteEntry { path: "/", route: Route::Home },
    RouteEntry { path: "/accordion", route: Route::Accordion },
    RouteEntry { path: "/bentomenu", route: Route::BentoMenu },
    RouteEntry { path: "/breadcrumbs", route: Route::Breadcrumbs },
    RouteEntry { path: "/carousel", route: Route::Carousel },
    RouteEntry { path: "/chatbot", route: Route::Chatbot },
    RouteEntry { path: "/form-wizard", route: Route::FormWizard },
    RouteEntry { path: "/testimonial", route: Route::Testimonial },
    RouteEntry { path: "/toast", route: Route::Toast },
];

/// Legacy paths that redirect. The legacy path never enters history.
pub const REDIRECTS: [(&str, &str); 1] = [("/home", "/")];

/// What a path resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    Redirect(&'static str),
}

/// Strip query and fragment, force a leading slash, drop trailing slashes
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolve a path against the route table
pub fn resolve(path: &str) -> Resolution {
    let path = normalize_path(path);
    if let Some((_, to)) = REDIRECTS.iter().find(|(from, _)| *from == path) {
        return Resolution::Redirect(*to);
    }
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .map_or(Resolution::Page(Route::NotFound), |entry| {
            Resolution::Page(entry.route)
        })
}

/// Entries kept for `back`; older ones are dropped
pub const HISTORY_LIMIT: usize = 50;

/// Current location plus history
#[derive(Clone, Debug)]
pub struct Router {
    location: State<String>,
    history: State<Vec<String>>,
}

impl Router {
    pub fn new(runtime: &ShowcaseRuntime, initial: &str) -> Self {
        let router = Self {
            location: runtime.use_state(String::new()),
            history: runtime.use_state(Vec::new()),
        };
        router.navigate(initial);
        router
    }

    pub fn location(&self) -> String {
        self.location.get()
    }

    pub fn route(&self) -> Route {
        match resolve(&self.location()) {
            Resolution::Page(route) => route,
            Resolution::Redirect(_) => Route::NotFound,
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.get()
    }

    /// Go to `path`, following redirects. Returns the route now shown.
    pub fn navigate(&self, path: &str) -> Route {
        let mut path = normalize_path(path);
        let route = loop {
            match resolve(&path) {
                Resolution::Page(route) => break route,
                Resolution::Redirect(to) => {
                    tracing::debug!(from = %path, to, "redirect");
                    path = to.to_string();
                }
            }
        };

        tracing::debug!(%path, %route, "navigate");
        self.location.set_rebuild(path.clone());
        self.history.update(|mut history| {
            history.push(path);
            let overflow = history.len().saturating_sub(HISTORY_LIMIT);
            history.drain(..overflow);
            history
        });
        route
    }

    /// Go back one entry. Returns the route now shown, or None at the start.
    pub fn back(&self) -> Option<Route> {
        let mut history = self.history();
        if history.len() < 2 {
            return None;
        }
        history.pop();
        let previous = history.last().cloned()?;
        self.history.set(history);
        self.location.set_rebuild(previous);
        Some(self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_fallback() {
        assert_eq!(resolve("/toast"), Resolution::Page(Route::Toast));
        assert_eq!(resolve("/form-wizard/"), Resolution::Page(Route::FormWizard));
        assert_eq!(resolve("carousel?x=1"), Resolution::Page(Route::Carousel));
        assert_eq!(resolve(""), Resolution::Page(Route::Home));
        assert_eq!(resolve("/nope"), Resolution::Page(Route::NotFound));
        assert_eq!(resolve("/home"), Resolution::Redirect("/"));
    }

    #[test]
    fn test_every_route_has_its_path() {
        for entry in ROUTES {
            assert_eq!(entry.route.path(), Some(entry.path));
        }
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_redirect_keeps_legacy_path_out_of_history() {
        let rt = ShowcaseRuntime::new();
        let router = Router::new(&rt, "/toast");
        assert_eq!(router.navigate("/home"), Route::Home);
        assert_eq!(router.location(), "/");
        assert_eq!(router.history(), vec!["/toast", "/"]);

        assert_eq!(router.back(), Some(Route::Toast));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_history_keeps_latest_entries() {
        let rt = ShowcaseRuntime::new();
        let router = Router::new(&rt, "/");
        for _ in 0..HISTORY_LIMIT {
            router.navigate("/toast");
            router.navigate("/carousel");
        }

        let history = router.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.last().map(String::as_str), Some("/carousel"));
        assert_eq!(router.back(), Some(Route::Toast));
    }
}
