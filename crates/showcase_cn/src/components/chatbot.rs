//! Mock chatbot with a typing indicator and a floating launcher
//!
//! Replies are canned, keyword-matched and delivered after an artificial delay on the
//! runtime's timer queue. Unmounting cancels replies that have not arrived yet.

use serde::{Deserialize, Serialize};
use showcase_core::{SchedulerExt, ShowcaseRuntime, State, TimerId};
use showcase_layout::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

pub const GREETING: &str = "Hi! Ask me about the UI demos. ✨";

/// Canned reply for a user message
pub fn mock_reply(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    const REPLIES: [(&str, &str); 6] = [
        ("accordion", "Accordion shows collapsible content with accessible semantics. Try the Accordion demo page."),
        ("bento", "The Bento Menu presents navigation as a modern grid of cards with icons."),
        ("carousel", "Carousel slides content with autoplay, indicators and keyboard support."),
        ("toast", "Toast are ephemeral notifications with different tones like success or error."),
        ("form", "The Form Wizard guides users through multi-step submission with validation."),
        ("testimonial", "Testimonials highlight customer quotes with avatars and company details."),
    ];
    REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or("I can help you explore the UI demos. Ask about accordion, bento, carousel, toast, form wizard, or testimonial!")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    pub title: String,
    /// Shown as the region's description
    pub system_prompt: String,
    pub reply_delay_ms: u64,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            title: "Assistant".to_string(),
            system_prompt: "You are a helpful assistant.".to_string(),
            reply_delay_ms: 700,
        }
    }
}

type OnSendFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Stateful chat window
pub struct Chatbot {
    runtime: ShowcaseRuntime,
    config: ChatbotConfig,
    messages: State<Vec<ChatMessage>>,
    input: State<String>,
    /// Replies scheduled but not yet delivered
    in_flight: State<usize>,
    reply_timers: Mutex<Vec<TimerId>>,
    on_send: Option<OnSendFn>,
}

impl Chatbot {
    pub fn new(runtime: &ShowcaseRuntime, config: ChatbotConfig) -> Self {
        Self {
            runtime: runtime.clone(),
            config,
            messages: runtime.use_state(vec![ChatMessage::assistant(GREETING)]),
            input: runtime.use_state(String::new()),
            in_flight: runtime.use_state(0),
            reply_timers: Mutex::new(Vec::new()),
            on_send: None,
        }
    }

    /// Observe every message the user sends
    pub fn on_send(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_send = Some(Arc::new(f));
        self
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.get()
    }

    pub fn input(&self) -> String {
        self.input.get()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.input.set_rebuild(text.into());
    }

    /// Whether the composer holds something worth sending
    pub fn can_send(&self) -> bool {
        self.input.with(|v| v.is_some_and(|s| !s.trim().is_empty()))
    }

    pub fn is_typing(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Send the composer contents. Blank input is ignored.
    pub fn send(&self) -> Option<String> {
        let text = self.input().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.messages.update_rebuild(|mut msgs| {
            msgs.push(ChatMessage::user(text.clone()));
            msgs
        });
        self.input.set_rebuild(String::new());
        if let Some(on_send) = &self.on_send {
            on_send(&text);
        }

        self.in_flight.update_rebuild(|n| n + 1);
        let messages = self.messages.clone();
        let in_flight = self.in_flight.clone();
        let reply = mock_reply(&text);
        let id = self.runtime.timers().set_timeout(
            self.config.reply_delay_ms,
            "chatbot-reply",
            move || {
                messages.update_rebuild(|mut msgs| {
                    msgs.push(ChatMessage::assistant(reply));
                    msgs
                });
                in_flight.update_rebuild(|n| n.saturating_sub(1));
            },
        );

        let timers = self.runtime.timers();
        let mut pending = self.reply_timers.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|t| timers.is_pending(*t));
        pending.push(id);

        tracing::debug!(len = text.len(), "chat message sent");
        Some(text)
    }

    /// Composer key handling: Enter without Shift sends
    pub fn handle_key(&self, key: &str, shift: bool) -> bool {
        if key == "Enter" && !shift {
            self.send();
            true
        } else {
            false
        }
    }

    /// Cancel replies that have not arrived
    pub fn unmount(&self) {
        let mut pending = self.reply_timers.lock().unwrap_or_else(PoisonError::into_inner);
        for id in pending.drain(..) {
            self.runtime.timers().clear(id);
        }
        self.in_flight.set_rebuild(0);
    }

    pub fn render(&self) -> Node {
        let header = div()
            .class("px-5 py-3 border-b border-black/5 bg-white/70 flex items-center justify-between")
            .child(
                div()
                    .class("flex items-center gap-2")
                    .child(
                        div()
                            .class("h-8 w-8 rounded-xl bg-primary text-white grid place-items-center")
                            .text("🤖"),
                    )
                    .child(div().class("font-semibold text-text").text(self.config.title.clone())),
            )
            .child(span().class("text-xs text-text/60").text("Mock mode"));

        let bubbles = self.messages().into_iter().map(|m| {
            let is_user = m.role == ChatRole::User;
            div()
                .class("flex")
                .class(if is_user { "justify-end" } else { "justify-start" })
                .data("role", if is_user { "user" } else { "assistant" })
                .child(
                    div()
                        .class("max-w-[80%] rounded-2xl px-4 py-2 shadow-soft")
                        .class(if is_user {
                            "bg-primary text-white rounded-br-sm"
                        } else {
                            "bg-white text-text rounded-bl-sm border border-black/5"
                        })
                        .child(span().class("whitespace-pre-wrap text-sm").text(m.content)),
                )
        });

        let log = div()
            .class("h-72 sm:h-96 overflow-y-auto px-4 py-4 space-y-3 bg-gray-50")
            .role("log")
            .children(bubbles)
            .when(self.is_typing(), |d| {
                d.child(
                    div()
                        .class("flex items-center gap-2 text-text/60 text-sm")
                        .data("testid", "typing-indicator")
                        .children((0..3).map(|i| {
                            div()
                                .class("h-2 w-2 rounded-full bg-text/40 animate-bounce")
                                .class(&format!("[animation-delay:{}ms]", i * 150))
                        }))
                        .child(span().text("Assistant is typing...")),
                )
            });

        let composer = form()
            .class("p-3 border-t border-black/5 bg-white flex items-end gap-2")
            .aria("label", "Message composer")
            .child(
                textarea()
                    .attr("rows", "1")
                    .attr("placeholder", "Ask something...")
                    .class("flex-1 resize-none rounded-xl border border-black/10 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary/40")
                    .aria("label", "Message input")
                    .text(self.input()),
            )
            .child(
                el("button")
                    .kind("submit")
                    .class("px-4 py-2 rounded-xl bg-primary text-white hover:bg-blue-600 transition disabled:opacity-50")
                    .when(!self.can_send(), |b| b.flag("disabled"))
                    .aria("label", "Send message")
                    .text("Send"),
            );

        div()
            .class("ocean-surface p-0 overflow-hidden")
            .role("region")
            .aria("label", "Chatbot")
            .aria("description", self.config.system_prompt.clone())
            .child(header)
            .child(log)
            .child(composer)
            .build()
    }
}

impl Drop for Chatbot {
    fn drop(&mut self) {
        let mut pending = self.reply_timers.lock().unwrap_or_else(PoisonError::into_inner);
        for id in pending.drain(..) {
            self.runtime.timers().clear(id);
        }
    }
}

impl std::fmt::Debug for Chatbot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chatbot")
            .field("messages", &self.messages.try_get().map(|m| m.len()))
            .field("typing", &self.is_typing())
            .finish()
    }
}

/// Floating action button that mounts a chat panel on demand
///
/// Closing the panel drops its chatbot, so a reopened panel starts a fresh
/// conversation.
pub struct ChatLauncher {
    runtime: ShowcaseRuntime,
    config: ChatbotConfig,
    panel: Mutex<Option<Chatbot>>,
}

impl ChatLauncher {
    pub fn new(runtime: &ShowcaseRuntime, config: ChatbotConfig) -> Self {
        Self {
            runtime: runtime.clone(),
            config,
            panel: Mutex::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn open(&self) {
        let mut panel = self.panel.lock().unwrap_or_else(PoisonError::into_inner);
        if panel.is_none() {
            tracing::debug!("chat panel opened");
            *panel = Some(Chatbot::new(&self.runtime, self.config.clone()));
            self.runtime.request_rebuild();
        }
    }

    pub fn close(&self) {
        let closed = self
            .panel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(bot) = closed {
            tracing::debug!("chat panel closed");
            bot.unmount();
            self.runtime.request_rebuild();
        }
    }

    pub fn toggle(&self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Run `f` against the open chatbot
    pub fn with_chatbot<R>(&self, f: impl FnOnce(&Chatbot) -> R) -> Option<R> {
        self.panel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(f)
    }

    pub fn render(&self) -> Node {
        let open = self.is_open();
        let fab = el("button")
            .kind("button")
            .aria("label", if open { "Close chatbot" } else { "Open chatbot" })
            .class("fixed bottom-[max(1rem,env(safe-area-inset-bottom))] right-[max(1rem,env(safe-area-inset-right))] h-14 w-14 rounded-full bg-primary text-white shadow-floating hover:bg-blue-600 transition grid place-items-center z-40")
            .text(if open { "✕" } else { "💬" });

        let panel = self.with_chatbot(|bot| {
            div()
                .class("fixed z-40 transition-all right-[max(1rem,env(safe-area-inset-right))] bottom-[calc(max(1rem,env(safe-area-inset-bottom))+4.5rem)] w-[min(calc(100vw-1rem),22rem)] md:w-[min(calc(100vw-1rem),26rem)] max-h-[85vh]")
                .role("dialog")
                .aria("modal", "false")
                .aria("label", "Floating chatbot panel")
                .child(
                    div()
                        .class("ocean-surface overflow-hidden flex flex-col")
                        .child(
                            div().class("sticky top-0 z-10 px-5 py-3 border-b border-black/5 bg-white/80 backdrop-blur flex items-center justify-between")
                                .child(div().class("font-semibold text-text").text(self.config.title.clone()))
                                .child(
                                    el("button")
                                        .kind("button")
                                        .class("text-text/60 hover:text-text rounded p-1")
                                        .aria("label", "Close chatbot panel")
                                        .text("✕"),
                                ),
                        )
                        .child(div().class("flex-1 min-h-0").child(bot.render())),
                )
        });

        div().class("contents").child(fab).child(panel).build()
    }
}

impl Drop for ChatLauncher {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reply_keywords() {
        assert!(mock_reply("Tell me about the CAROUSEL").starts_with("Carousel slides"));
        assert!(mock_reply("form wizard?").starts_with("The Form Wizard"));
        assert!(mock_reply("hello").starts_with("I can help"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let rt = ShowcaseRuntime::new();
        let bot = Chatbot::new(&rt, ChatbotConfig::default());
        bot.set_input("   ");
        assert!(!bot.can_send());
        assert_eq!(bot.send(), None);
        assert_eq!(bot.messages().len(), 1);
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let rt = ShowcaseRuntime::new();
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sent_clone = sent.clone();
        let bot = Chatbot::new(&rt, ChatbotConfig::default())
            .on_send(move |m| sent_clone.lock().unwrap().push(m.to_string()));

        bot.set_input("  what is a toast?  ");
        assert!(bot.handle_key("Enter", false));
        assert_eq!(bot.input(), "");
        assert!(bot.is_typing());
        assert_eq!(*sent.lock().unwrap(), vec!["what is a toast?"]);

        rt.advance_by(699);
        assert_eq!(bot.messages().len(), 2);
        rt.advance_by(1);
        let msgs = bot.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[2].role, ChatRole::Assistant);
        assert!(msgs[2].content.starts_with("Toast are"));
        assert!(!bot.is_typing());
    }

    #[test]
    fn test_shift_enter_does_not_send() {
        let rt = ShowcaseRuntime::new();
        let bot = Chatbot::new(&rt, ChatbotConfig::default());
        bot.set_input("hi");
        assert!(!bot.handle_key("Enter", true));
        assert_eq!(bot.messages().len(), 1);
    }

    #[test]
    fn test_unmount_cancels_pending_reply() {
        let rt = ShowcaseRuntime::new();
        let bot = Chatbot::new(&rt, ChatbotConfig::default());
        bot.set_input("bento");
        bot.send();
        bot.unmount();
        rt.advance_by(5000);
        assert_eq!(bot.messages().len(), 2);
        assert!(!bot.is_typing());
    }

    #[test]
    fn test_launcher_mounts_and_unmounts_panel() {
        let rt = ShowcaseRuntime::new();
        let launcher = ChatLauncher::new(&rt, ChatbotConfig::default());
        let root = launcher.render().into_element().unwrap();
        assert!(root.find_by_role("dialog").is_none());
        assert!(root.find_by_attr("aria-label", "Open chatbot").is_some());

        assert!(launcher.toggle());
        launcher.with_chatbot(|bot| {
            bot.set_input("accordion");
            bot.send();
        });
        let root = launcher.render().into_element().unwrap();
        assert!(root.find_by_role("dialog").is_some());
        assert!(root.find_by_test_id("typing-indicator").is_some());

        assert!(!launcher.toggle());
        assert_eq!(rt.timers().pending_count(), 0);

        launcher.open();
        let fresh = launcher.with_chatbot(|bot| bot.messages().len());
        assert_eq!(fresh, Some(1));
    }
}
