//! Landing page

use showcase_layout::prelude::*;

pub fn render() -> Node {
    section()
        .class("animate-fadeIn space-y-6")
        .child(
            div().class("app-answer-surface app-answer-border").child(
                div().class("px-6 py-10 sm:px-10 sm:py-14").child(
                    div()
                        .class("max-w-3xl")
                        .child(
                            h1().class("text-3xl sm:text-4xl app-answer-heading")
                                .text("UI Components Showcase"),
                        )
                        .child(
                            p().class("mt-3 text-base sm:text-lg app-answer-subtle").text(
                                "Explore accessible, modern components styled with a refined brand palette. \
                                 Use the navigation above to jump into demos like Accordion, Bento, Carousel, \
                                 Chatbot, Toast, and more.",
                            ),
                        ),
                ),
            ),
        )
        .child(
            div()
                .class("app-answer-surface app-answer-border px-4 py-3 shadow-hairline")
                .child(
                    div()
                        .class("flex items-start gap-3")
                        .child(
                            div()
                                .class("h-8 w-8 rounded-xl bg-primary text-white grid place-items-center shrink-0")
                                .text("✨"),
                        )
                        .child(div().class("text-sm app-answer-subtle").text(
                            "Tip: Panels and content surfaces use lighter tones for comfort and clarity. \
                             Try the Accordion demo to see the palette in action.",
                        )),
                ),
        )
        .child(
            div()
                .class("app-answer-surface app-answer-border px-4 py-3 text-sm app-answer-subtle")
                .text("Use the Navbar links to jump directly to a component demo."),
        )
        .build()
}
