//! Page header and site footer

use showcase_layout::prelude::*;

/// Titled header band used at the top of pages
#[derive(Clone, Debug, Default)]
pub struct Header {
    title: String,
    subtitle: Option<String>,
    extra_classes: String,
    actions: Vec<Node>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        if !self.extra_classes.is_empty() {
            self.extra_classes.push(' ');
        }
        self.extra_classes.push_str(classes);
        self
    }

    /// Content shown on the right side
    pub fn action(mut self, action: impl ElementBuilder) -> Self {
        self.actions.push(action.build());
        self
    }
}

impl ElementBuilder for Header {
    fn build(self) -> Node {
        let has_actions = !self.actions.is_empty();
        header()
            .class("app-answer-surface app-answer-border")
            .class(&self.extra_classes)
            .child(
                div().class("px-6 py-6 sm:px-8").child(
                    div().class("mx-auto max-w-6xl").child(
                        div()
                            .class("flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between")
                            .child(
                                div()
                                    .child(
                                        h1().class("text-2xl sm:text-3xl app-answer-heading")
                                            .text(self.title),
                                    )
                                    .maybe(self.subtitle, |d, sub| {
                                        d.child(
                                            p().class("mt-1 text-sm sm:text-base app-answer-subtle")
                                                .text(sub),
                                        )
                                    }),
                            )
                            .when(has_actions, |d| {
                                d.child(
                                    div()
                                        .class("mt-2 sm:mt-0 flex items-center gap-2")
                                        .children(self.actions),
                                )
                            }),
                    ),
                ),
            )
            .build()
    }
}

pub fn page_header(title: impl Into<String>) -> Header {
    Header::new(title)
}

/// Links listed under "Quick links"
pub const FOOTER_LINKS: [(&str, &str); 8] = [
    ("/", "Home"),
    ("/accordion", "Accordion"),
    ("/bentomenu", "Bento Menu"),
    ("/carousel", "Carousel"),
    ("/chatbot", "Chatbot"),
    ("/form-wizard", "Form Wizard"),
    ("/testimonial", "Testimonial"),
    ("/toast", "Toast"),
];

const CONTACT_LINK: &str = "inline-flex items-center gap-2 rounded-none px-2 py-1 app-answer-subtle hover:text-text focus:outline-none focus-visible:ring-2 focus-visible:ring-[#1840a0]";

/// Site footer
#[derive(Clone, Debug, Default)]
pub struct Footer {
    year: Option<i32>,
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Year shown in the copyright line
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn copyright(&self) -> String {
        match self.year {
            Some(year) => format!("© {year} UI Components Showcase. All rights reserved."),
            None => "© UI Components Showcase. All rights reserved.".to_string(),
        }
    }
}

impl ElementBuilder for Footer {
    fn build(self) -> Node {
        let brand = div()
            .child(
                div()
                    .class("flex items-center gap-2")
                    .child(
                        div()
                            .class("h-9 w-9 rounded-none bg-primary text-white grid place-items-center font-bold shadow-soft")
                            .text("UI"),
                    )
                    .child(
                        div()
                            .class("text-lg font-semibold text-text")
                            .text("Components Showcase"),
                    ),
            )
            .child(
                p().class("mt-2 text-sm app-answer-subtle")
                    .text("Modern, accessible components styled with the Ocean Professional theme."),
            )
            .child(
                p().class("mt-3 text-xs app-answer-subtle")
                    .text(self.copyright()),
            );

        let quick_links = nav()
            .aria("label", "Footer navigation")
            .class("sm:mx-auto")
            .child(div().class("text-sm font-semibold text-text mb-2").text("Quick links"))
            .child(ul().class("space-y-1 text-sm").children(FOOTER_LINKS.iter().map(
                |(href, label)| {
                    li().child(
                        a().href(*href)
                            .class("inline-flex items-center gap-2 rounded-none px-2 py-1 text-text/70 hover:text-text focus:outline-none focus-visible:ring-2 focus-visible:ring-[#1840a0]")
                            .aria("label", format!("Go to {label}"))
                            .child(span().aria("hidden", "true").class("text-text/40").text("→"))
                            .text(*label),
                    )
                },
            )));

        let contact = div()
            .class("sm:justify-self-end")
            .child(div().class("text-sm font-semibold text-text mb-2").text("Connect"))
            .child(
                ul().class("space-y-2 text-sm")
                    .child(li().child(
                        a().href("mailto:hello@example.com")
                            .class(CONTACT_LINK)
                            .aria("label", "Email us")
                            .text("✉ Email"),
                    ))
                    .child(li().child(
                        a().href("https://github.com/")
                            .attr("target", "_blank")
                            .attr("rel", "noreferrer")
                            .class(CONTACT_LINK)
                            .aria("label", "Visit our GitHub")
                            .text("⎇ GitHub"),
                    ))
                    .child(li().child(
                        span()
                            .class("inline-flex items-center gap-2 rounded-none px-2 py-1 app-answer-subtle")
                            .text("Theme: Ocean Professional"),
                    )),
            );

        footer()
            .class("mt-12")
            .aria("labelledby", "site-footer-heading")
            .child(div().class("border-t border-black/10").aria("hidden", "true"))
            .child(
                div().class("app-header-major rounded-none").child(
                    div().class("app-header-inner").child(
                        div()
                            .class("mx-auto max-w-6xl px-4 py-8")
                            .child(h2().id("site-footer-heading").class("sr-only").text("Footer"))
                            .child(
                                div()
                                    .class("app-answer-surface app-answer-border px-6 py-6 rounded-none")
                                    .child(
                                        div()
                                            .class("grid grid-cols-1 sm:grid-cols-3 gap-6")
                                            .child(brand)
                                            .child(quick_links)
                                            .child(contact),
                                    ),
                            )
                            .child(
                                div()
                                    .class("mt-4 text-xs text-white/85")
                                    .text("Crafted with attention to accessibility and responsive design."),
                            ),
                    ),
                ),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_subtitle_and_actions_optional() {
        let bare = page_header("Toast").build().into_element().unwrap();
        assert_eq!(bare.find_all_by_tag("p").len(), 0);
        assert_eq!(bare.find_all_by_tag("h1")[0].text_content(), "Toast");

        let full = page_header("Toast")
            .subtitle("Ephemeral notifications")
            .action(span().text("x"))
            .build()
            .into_element()
            .unwrap();
        assert_eq!(full.find_all_by_tag("p").len(), 1);
        assert!(full.find_by_text("x").is_some());
    }

    #[test]
    fn test_footer_links_and_copyright() {
        let root = Footer::new().year(2025).build().into_element().unwrap();
        assert!(root.find_by_attr("aria-label", "Go to Form Wizard").is_some());
        assert!(root
            .find_by_text("© 2025 UI Components Showcase. All rights reserved.")
            .is_some());
        assert_eq!(
            Footer::new().copyright(),
            "© UI Components Showcase. All rights reserved."
        );
    }
}
