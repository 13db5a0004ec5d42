//! Toast demo: one button per tone, a sticky toast and clear-all

use super::{gradient_header, PageContext};
use showcase_cn::{use_toast, ToastId, ToastProvider, ToastSpec, ToastTone};
use showcase_layout::prelude::*;

pub struct ToastPage {
    toasts: ToastProvider,
}

/// Title and description the demo uses for `tone`
pub fn demo_copy(tone: ToastTone) -> (String, String) {
    match tone {
        ToastTone::Default => (
            "Heads up".to_string(),
            "This is a neutral notification.".to_string(),
        ),
        other => {
            let name = other.as_str();
            let mut title = name.to_string();
            if let Some(first) = title.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            (title, format!("This is a {name} message."))
        }
    }
}

impl ToastPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        Self {
            toasts: use_toast(ctx.scope),
        }
    }

    /// "Show {tone}"
    pub fn fire(&self, tone: ToastTone) -> ToastId {
        let (title, description) = demo_copy(tone);
        self.toasts
            .show_toast(ToastSpec::new().title(title).description(description).tone(tone))
    }

    /// "Show sticky"
    pub fn sticky(&self) -> ToastId {
        self.toasts.show_toast(
            ToastSpec::new()
                .title("Sticky")
                .description("This one stays until dismissed.")
                .tone(ToastTone::Info)
                .sticky(),
        )
    }

    pub fn render(&self) -> Node {
        let tone_buttons = ToastTone::ALL.iter().map(|tone| {
            el("button")
                .kind("button")
                .class("px-4 py-2 rounded-xl bg-primary text-white hover:bg-blue-600 transition")
                .data("action", format!("toast-{}", tone.as_str()))
                .text(format!("Show {}", tone.as_str()))
        });

        section()
            .class("space-y-6")
            .child(gradient_header(
                "Toast",
                "Ephemeral notifications rendered via a provider with an aria-live region.",
            ))
            .child(
                div()
                    .class("ocean-surface p-6 flex flex-wrap gap-3")
                    .children(tone_buttons)
                    .child(
                        el("button")
                            .kind("button")
                            .class("px-4 py-2 rounded-xl bg-gray-200 text-text hover:bg-gray-300 transition")
                            .data("action", "toast-sticky")
                            .text("Show sticky"),
                    )
                    .child(
                        el("button")
                            .kind("button")
                            .class("px-4 py-2 rounded-xl bg-red-50 text-red-700 border border-red-200 hover:bg-red-100 transition")
                            .data("action", "toast-clear")
                            .text("Clear all"),
                    ),
            )
            .build()
    }
}

impl std::fmt::Debug for ToastPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastPage")
            .field("toasts", &self.toasts.len())
            .finish()
    }
}
