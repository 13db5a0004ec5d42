//! Chatbot demo: only the floating button until it is opened

use super::PageContext;
use showcase_cn::ChatLauncher;
use showcase_layout::prelude::*;

pub struct ChatbotPage {
    launcher: ChatLauncher,
}

impl ChatbotPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        Self {
            launcher: ChatLauncher::new(ctx.runtime, ctx.config.chatbot.clone()),
        }
    }

    pub fn launcher(&self) -> &ChatLauncher {
        &self.launcher
    }

    pub fn render(&self) -> Node {
        self.launcher.render()
    }
}

impl std::fmt::Debug for ChatbotPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatbotPage")
            .field("open", &self.launcher.is_open())
            .finish()
    }
}
