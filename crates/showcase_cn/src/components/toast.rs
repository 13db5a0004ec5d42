//! Toast notifications
//!
//! A [`ToastProvider`] is mounted once near the root and handed to descendants through
//! a [`Scope`]. Any widget can then enqueue, dismiss or clear notifications:
//!
//! ```ignore
//! let toasts = ToastProvider::new(&runtime, ToastConfig::default());
//! toasts.provide(&root_scope);
//!
//! // somewhere below
//! let id = use_toast(&page_scope).show_toast(ToastSpec::new().title("Saved").tone(ToastTone::Success));
//! ```
//!
//! # Lifecycle
//!
//! - Identifiers are unique and strictly increasing for the provider's lifetime.
//! - A toast with a positive timeout gets its own expiry timer; zero or negative
//!   timeouts persist until dismissed or cleared.
//! - Dismissing an identifier that is already gone is a no-op, so expiry racing an
//!   explicit dismiss is harmless.
//! - Each addition sets the announcement text for screen readers and schedules it to
//!   be cleared shortly after. Removals never touch it.
//! - Unmounting (or dropping the last handle) cancels every pending timer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use showcase_core::{ContextError, SchedulerExt, Scope, ShowcaseRuntime, State, TimerId};
use showcase_layout::prelude::*;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use thiserror::Error;

/// Visual tone of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTone {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
}

impl ToastTone {
    pub const ALL: [ToastTone; 5] = [
        ToastTone::Default,
        ToastTone::Success,
        ToastTone::Info,
        ToastTone::Warning,
        ToastTone::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastTone::Default => "default",
            ToastTone::Success => "success",
            ToastTone::Warning => "warning",
            ToastTone::Error => "error",
            ToastTone::Info => "info",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ToastTone::Success => "✓",
            ToastTone::Warning => "⚠",
            ToastTone::Error => "⨯",
            ToastTone::Info => "ℹ",
            ToastTone::Default => "•",
        }
    }

    fn border_class(&self) -> &'static str {
        match self {
            ToastTone::Default => "border-black/10",
            ToastTone::Success => "border-green-500/30",
            ToastTone::Warning => "border-amber-500/30",
            ToastTone::Error => "border-red-500/30",
            ToastTone::Info => "border-blue-500/30",
        }
    }
}

impl std::fmt::Display for ToastTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tone name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown toast tone `{0}` (expected default, success, warning, error or info)")]
pub struct ParseToneError(pub String);

impl FromStr for ToastTone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ToastTone::Default),
            "success" => Ok(ToastTone::Success),
            "warning" => Ok(ToastTone::Warning),
            "error" => Ok(ToastTone::Error),
            "info" => Ok(ToastTone::Info),
            _ => Err(ParseToneError(s.to_string())),
        }
    }
}

/// Screen corner the toast stack is pinned to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    fn classes(&self) -> &'static str {
        match self {
            Corner::TopRight => "top-4 right-4 items-end",
            Corner::TopLeft => "top-4 left-4 items-start",
            Corner::BottomRight => "bottom-4 right-4 items-end",
            Corner::BottomLeft => "bottom-4 left-4 items-start",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub position: Corner,
    /// Timeout applied when a toast does not set its own
    pub duration_ms: u64,
    /// How long the announcement text stays before it is cleared
    pub announcement_clear_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Corner::TopRight,
            duration_ms: 3500,
            announcement_clear_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to show. Everything is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSpec {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tone: ToastTone,
    /// Milliseconds until expiry; `None` uses the provider default, `<= 0` persists
    pub timeout_ms: Option<i64>,
}

impl ToastSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tone(mut self, tone: ToastTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Stay until dismissed
    pub fn sticky(self) -> Self {
        self.timeout_ms(0)
    }
}

/// A live notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tone: ToastTone,
    pub timeout_ms: i64,
    pub created_at_ms: u64,
}

impl Toast {
    pub fn is_sticky(&self) -> bool {
        self.timeout_ms <= 0
    }

    /// Text announced to assistive technology
    pub fn announcement(&self) -> String {
        let title = self.title.as_deref().unwrap_or("Notification");
        match self.description.as_deref() {
            Some(desc) => format!("{title}: {desc}"),
            None => title.to_string(),
        }
    }
}

struct ToastInner {
    runtime: ShowcaseRuntime,
    config: ToastConfig,
    toasts: State<Vec<Toast>>,
    live: State<String>,
    next_id: AtomicU64,
    expiry: Mutex<FxHashMap<ToastId, TimerId>>,
    announce_timer: Mutex<Option<TimerId>>,
}

impl ToastInner {
    fn expiry_lock(&self) -> MutexGuard<'_, FxHashMap<ToastId, TimerId>> {
        self.expiry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn announce_lock(&self) -> MutexGuard<'_, Option<TimerId>> {
        self.announce_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: ToastId) -> bool {
        let mut removed = false;
        self.toasts.update_rebuild(|mut list| {
            let before = list.len();
            list.retain(|t| t.id != id);
            removed = list.len() != before;
            list
        });
        removed
    }

    fn cancel_all(&self) {
        let timers = self.runtime.timers();
        for (_, timer) in self.expiry_lock().drain() {
            timers.clear(timer);
        }
        if let Some(timer) = self.announce_lock().take() {
            timers.clear(timer);
        }
    }
}

impl Drop for ToastInner {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Shared notification queue (cheap to clone)
#[derive(Clone)]
pub struct ToastProvider {
    inner: Arc<ToastInner>,
}

impl ToastProvider {
    pub fn new(runtime: &ShowcaseRuntime, config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(ToastInner {
                runtime: runtime.clone(),
                config,
                toasts: runtime.use_state(Vec::new()),
                live: runtime.use_state(String::new()),
                next_id: AtomicU64::new(1),
                expiry: Mutex::new(FxHashMap::default()),
                announce_timer: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.inner.config
    }

    /// Make this provider visible to `scope` and its descendants
    pub fn provide(&self, scope: &Scope) {
        scope.provide(self.clone());
    }

    /// Enqueue a toast and return its identifier
    pub fn show_toast(&self, spec: ToastSpec) -> ToastId {
        let inner = &self.inner;
        let id = ToastId(inner.next_id.fetch_add(1, Ordering::SeqCst));
        let timeout_ms = spec
            .timeout_ms
            .unwrap_or_else(|| i64::try_from(inner.config.duration_ms).unwrap_or(i64::MAX));
        let toast = Toast {
            id,
            title: spec.title,
            description: spec.description,
            tone: spec.tone,
            timeout_ms,
            created_at_ms: inner.runtime.now_ms(),
        };
        let announcement = toast.announcement();
        tracing::debug!(%id, tone = %toast.tone, timeout_ms, "toast added");

        inner.toasts.update_rebuild(|mut list| {
            list.push(toast);
            list
        });

        if timeout_ms > 0 {
            let weak = Arc::downgrade(inner);
            let timer = inner.runtime.timers().set_timeout(
                timeout_ms as u64,
                "toast-expiry",
                move || expire(&weak, id),
            );
            inner.expiry_lock().insert(id, timer);
        }

        self.announce(announcement);
        id
    }

    fn announce(&self, message: String) {
        let inner = &self.inner;
        inner.live.set_rebuild(message);

        let timers = inner.runtime.timers();
        let mut slot = inner.announce_lock();
        if let Some(previous) = slot.take() {
            timers.clear(previous);
        }
        let live = inner.live.clone();
        *slot = Some(timers.set_timeout(
            inner.config.announcement_clear_ms,
            "toast-announcement",
            move || live.set_rebuild(String::new()),
        ));
    }

    /// Remove a toast. Unknown identifiers are ignored.
    pub fn dismiss(&self, id: ToastId) {
        if let Some(timer) = self.inner.expiry_lock().remove(&id) {
            self.inner.runtime.timers().clear(timer);
        }
        if self.inner.remove(id) {
            tracing::debug!(%id, "toast dismissed");
        }
    }

    /// Remove every toast
    pub fn clear(&self) {
        let timers = self.inner.runtime.timers();
        for (_, timer) in self.inner.expiry_lock().drain() {
            timers.clear(timer);
        }
        self.inner.toasts.set_rebuild(Vec::new());
        tracing::debug!("toasts cleared");
    }

    /// Current toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.get()
    }

    pub fn ids(&self) -> Vec<ToastId> {
        self.inner
            .toasts
            .with(|list| list.map(|l| l.iter().map(|t| t.id).collect()).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.with(|list| list.map_or(0, Vec::len))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current announcement text
    pub fn live_message(&self) -> String {
        self.inner.live.get()
    }

    /// Cancel all pending timers. Toasts already shown stay in the list.
    pub fn unmount(&self) {
        self.inner.cancel_all();
    }

    /// Number of expiry timers still scheduled
    pub fn pending_expiries(&self) -> usize {
        self.inner.expiry_lock().len()
    }

    fn render_card(toast: &Toast) -> Div {
        div()
            .class("min-w-[260px] max-w-[360px] rounded-2xl bg-surface shadow-card border p-4 animate-slideUp")
            .class(toast.tone.border_class())
            .data("toast-id", toast.id.to_string())
            .data("tone", toast.tone.as_str())
            .child(
                div()
                    .class("flex items-start gap-3")
                    .child(
                        div()
                            .class("h-7 w-7 rounded-xl bg-primary text-white grid place-items-center shrink-0")
                            .text(toast.tone.glyph()),
                    )
                    .child(
                        div()
                            .class("flex-1")
                            .maybe(toast.title.clone(), |d, title| {
                                d.child(div().class("font-semibold text-text").text(title))
                            })
                            .maybe(toast.description.clone(), |d, desc| {
                                d.child(div().class("text-sm text-text/70 mt-0.5").text(desc))
                            }),
                    )
                    .child(
                        el("button")
                            .kind("button")
                            .class("ml-2 text-text/50 hover:text-text rounded p-1 focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40")
                            .aria("label", "Dismiss notification")
                            .data("dismiss", toast.id.to_string())
                            .text("✕"),
                    ),
            )
    }

    /// The fixed-position toast stack
    pub fn render_region(&self) -> Node {
        let toasts = self.toasts();
        div()
            .class("fixed z-50 flex flex-col gap-2")
            .class(self.inner.config.position.classes())
            .role("region")
            .aria("label", "Notifications")
            .children(toasts.iter().map(Self::render_card))
            .build()
    }

    /// The polite live region carrying the announcement
    pub fn render_live_region(&self) -> Node {
        div()
            .aria("live", "polite")
            .aria("atomic", "true")
            .class("sr-only")
            .text(self.live_message())
            .build()
    }

    /// Wrap `children` with the toast stack and live region
    pub fn render(&self, children: impl ElementBuilder) -> Node {
        div()
            .class("contents")
            .child(children)
            .child(self.render_region())
            .child(self.render_live_region())
            .build()
    }
}

fn expire(weak: &Weak<ToastInner>, id: ToastId) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    inner.expiry_lock().remove(&id);
    if inner.remove(id) {
        tracing::debug!(%id, "toast expired");
    }
}

impl std::fmt::Debug for ToastProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastProvider")
            .field("toasts", &self.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Look up the provider from a scope
///
/// # Panics
///
/// Panics when no ancestor scope provides a [`ToastProvider`].
#[track_caller]
pub fn use_toast(scope: &Scope) -> ToastProvider {
    scope.expect_context("use_toast", "ToastProvider")
}

/// Look up the provider without panicking
pub fn try_use_toast(scope: &Scope) -> Result<ToastProvider, ContextError> {
    scope.try_use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(rt: &ShowcaseRuntime) -> ToastProvider {
        ToastProvider::new(rt, ToastConfig::default())
    }

    fn titles(p: &ToastProvider) -> Vec<String> {
        p.toasts()
            .into_iter()
            .map(|t| t.title.unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_insert_dismiss_clear_scenario() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let a = p.show_toast(ToastSpec::new().title("A").tone(ToastTone::Success));
        let b = p.show_toast(ToastSpec::new().title("B"));
        assert!(b > a);
        assert_eq!(titles(&p), vec!["A", "B"]);
        assert_eq!(p.toasts()[1].tone, ToastTone::Default);

        p.dismiss(a);
        assert_eq!(titles(&p), vec!["B"]);
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.pending_expiries(), 0);
    }

    #[test]
    fn test_ids_strictly_increase_across_clear() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let first = p.show_toast(ToastSpec::new());
        p.clear();
        let second = p.show_toast(ToastSpec::new());
        assert!(second > first);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let a = p.show_toast(ToastSpec::new().title("A"));
        p.show_toast(ToastSpec::new().title("B"));
        p.dismiss(a);
        let once = p.toasts();
        p.dismiss(a);
        assert_eq!(p.toasts(), once);
        p.dismiss(ToastId(999));
        assert_eq!(p.toasts(), once);
    }

    #[test]
    fn test_default_ttl_expires() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        p.show_toast(ToastSpec::new().title("A"));
        rt.advance_by(3499);
        assert_eq!(p.len(), 1);
        rt.advance_by(1);
        assert!(p.is_empty());
        assert_eq!(p.pending_expiries(), 0);
    }

    #[test]
    fn test_sticky_and_negative_ttl_persist() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let sticky = p.show_toast(ToastSpec::new().title("S").sticky());
        p.show_toast(ToastSpec::new().title("N").timeout_ms(-5));
        rt.advance_by(60_000);
        assert_eq!(p.len(), 2);
        assert!(p.toasts().iter().all(Toast::is_sticky));
        p.dismiss(sticky);
        assert_eq!(titles(&p), vec!["N"]);
    }

    #[test]
    fn test_independent_expiry_timers() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        p.show_toast(ToastSpec::new().title("slow").timeout_ms(1000));
        rt.advance_by(200);
        p.show_toast(ToastSpec::new().title("fast").timeout_ms(300));
        rt.advance_by(300);
        assert_eq!(titles(&p), vec!["slow"]);
        rt.advance_by(500);
        assert!(p.is_empty());
    }

    #[test]
    fn test_expiry_after_dismiss_is_noop() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let a = p.show_toast(ToastSpec::new().title("A").timeout_ms(100));
        p.show_toast(ToastSpec::new().title("B").sticky());
        p.dismiss(a);
        rt.advance_by(200);
        assert_eq!(titles(&p), vec!["B"]);
    }

    #[test]
    fn test_announcement_tracks_additions_only() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        let a = p.show_toast(ToastSpec::new().title("Saved").description("All good").sticky());
        assert_eq!(p.live_message(), "Saved: All good");

        rt.advance_by(500);
        assert_eq!(p.live_message(), "");

        p.show_toast(ToastSpec::new().sticky());
        assert_eq!(p.live_message(), "Notification");
        p.dismiss(a);
        assert_eq!(p.live_message(), "Notification");
    }

    #[test]
    fn test_unmount_cancels_timers() {
        let rt = ShowcaseRuntime::new();
        let p = provider(&rt);
        p.show_toast(ToastSpec::new().title("A"));
        p.unmount();
        assert_eq!(rt.timers().pending_count(), 0);

        let q = provider(&rt);
        q.show_toast(ToastSpec::new().title("B"));
        drop(q);
        assert_eq!(rt.timers().pending_count(), 0);
    }

    #[test]
    fn test_use_toast_through_scope() {
        let rt = ShowcaseRuntime::new();
        let root = Scope::root();
        provider(&rt).provide(&root);

        let page = root.child("page");
        use_toast(&page).show_toast(ToastSpec::new().title("hi"));
        assert_eq!(use_toast(&root).len(), 1);
    }

    #[test]
    #[should_panic(expected = "use_toast must be used within <ToastProvider>")]
    fn test_use_toast_outside_provider_panics() {
        let _ = use_toast(&Scope::root().child("orphan"));
    }

    #[test]
    fn test_try_use_toast_reports_missing() {
        assert!(try_use_toast(&Scope::root()).is_err());
    }

    #[test]
    fn test_render_region() {
        let rt = ShowcaseRuntime::new();
        let p = ToastProvider::new(
            &rt,
            ToastConfig {
                position: Corner::BottomLeft,
                ..ToastConfig::default()
            },
        );
        p.show_toast(ToastSpec::new().title("Oops").tone(ToastTone::Error));

        let region = p.render_region().into_element().unwrap();
        assert_eq!(region.attr("aria-label"), Some("Notifications"));
        assert!(region.has_class("bottom-4") && region.has_class("left-4"));
        let card = region.find_by_attr("data-tone", "error").unwrap();
        assert!(card.has_class("border-red-500/30"));
        assert!(card.text_content().contains('⨯'));
        assert!(region.find_by_attr("aria-label", "Dismiss notification").is_some());

        let live = p.render_live_region().into_element().unwrap();
        assert_eq!(live.attr("aria-live"), Some("polite"));
        assert_eq!(live.text_content(), "Oops");
    }

    #[test]
    fn test_tone_and_corner_parsing() {
        assert_eq!("Warning".parse::<ToastTone>(), Ok(ToastTone::Warning));
        assert!("loud".parse::<ToastTone>().is_err());

        #[derive(Deserialize)]
        struct Wrap {
            toast: ToastConfig,
        }
        let parsed: Wrap =
            serde_json::from_str(r#"{"toast":{"position":"bottom-right"}}"#).unwrap();
        assert_eq!(parsed.toast.position, Corner::BottomRight);
        assert_eq!(parsed.toast.duration_ms, 3500);
    }
}
