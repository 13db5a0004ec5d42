//! Form wizard demo: Account, Personal Info, Preferences, Review
//!
//! The review step gates Finish on a consent checkbox. Submitted data is shown as
//! pretty-printed JSON below the wizard.

use super::{surface_header, PageContext};
use regex::Regex;
use serde_json::Value;
use showcase_cn::{
    field_text, field_truthy, FormData, FormWizard, StepContext, WizardOutcome, WizardStep,
};
use showcase_core::State;
use showcase_layout::prelude::*;
use std::sync::OnceLock;

const INPUT: &str = "w-full rounded-xl border border-black/10 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-primary/40";
const LABEL: &str = "block text-sm font-medium text-text mb-1";

fn email_pattern() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r".+@.+\..+").ok()).as_ref()
}

fn looks_like_email(email: &str) -> bool {
    match email_pattern() {
        Some(re) => re.is_match(email),
        None => email.contains('@'),
    }
}

pub fn validate_account(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();
    let email = field_text(data, "email");
    if email.is_empty() {
        errors.push("Email is required.".to_string());
    } else if !looks_like_email(&email) {
        errors.push("Email must be valid.".to_string());
    }
    if field_text(data, "password").chars().count() < 6 {
        errors.push("Password must be at least 6 characters.".to_string());
    }
    errors
}

pub fn validate_personal(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();
    if !field_truthy(data, "firstName") {
        errors.push("First name is required.".to_string());
    }
    if !field_truthy(data, "lastName") {
        errors.push("Last name is required.".to_string());
    }
    errors
}

pub fn validate_review(data: &FormData) -> Vec<String> {
    if field_truthy(data, "consent") {
        Vec::new()
    } else {
        vec!["Consent is required to submit.".to_string()]
    }
}

fn text_field(id: &'static str, label_text: &str, kind: &str, value: String, placeholder: &str) -> Div {
    div()
        .child(label().class(LABEL).attr("for", id).text(label_text))
        .child(
            input()
                .id(id)
                .kind(kind)
                .attr("name", id)
                .attr("value", value)
                .attr("placeholder", placeholder)
                .class(INPUT),
        )
}

fn checkbox(id: &'static str, checked: bool) -> Div {
    input()
        .id(id)
        .kind("checkbox")
        .attr("name", id)
        .class("h-4 w-4 rounded border-gray-300 text-primary focus:ring-primary/40")
        .when(checked, |i| i.flag("checked"))
}

fn render_account(ctx: &StepContext<'_>) -> Node {
    div()
        .class("grid gap-4")
        .child(text_field("email", "Email", "email", field_text(ctx.data, "email"), "you@example.com"))
        .child(text_field(
            "password",
            "Password",
            "password",
            field_text(ctx.data, "password"),
            "********",
        ))
        .build()
}

fn render_personal(ctx: &StepContext<'_>) -> Node {
    div()
        .class("grid gap-4 sm:grid-cols-2")
        .child(text_field("firstName", "First name", "text", field_text(ctx.data, "firstName"), "Jane"))
        .child(text_field("lastName", "Last name", "text", field_text(ctx.data, "lastName"), "Doe"))
        .child(
            div()
                .class("sm:col-span-2")
                .child(label().class(LABEL).attr("for", "bio").text("Short bio"))
                .child(
                    textarea()
                        .id("bio")
                        .attr("name", "bio")
                        .attr("rows", "3")
                        .attr("placeholder", "Tell us something about yourself...")
                        .class(INPUT)
                        .text(field_text(ctx.data, "bio")),
                ),
        )
        .build()
}

fn pref_theme(data: &FormData) -> String {
    match field_text(data, "prefTheme") {
        t if t.is_empty() => "system".to_string(),
        t => t,
    }
}

fn render_preferences(ctx: &StepContext<'_>) -> Node {
    let current = pref_theme(ctx.data);
    div()
        .class("grid gap-4")
        .child(
            div()
                .class("flex items-center gap-2")
                .child(checkbox("newsletter", field_truthy(ctx.data, "newsletter")))
                .child(
                    label()
                        .attr("for", "newsletter")
                        .class("text-sm text-text")
                        .text("Subscribe to newsletter"),
                ),
        )
        .child(
            div()
                .child(label().class(LABEL).attr("for", "prefTheme").text("Theme"))
                .child(
                    select()
                        .id("prefTheme")
                        .attr("name", "prefTheme")
                        .class(INPUT)
                        .children([("system", "System"), ("light", "Light"), ("dark", "Dark")].map(
                            |(value, text)| {
                                option()
                                    .attr("value", value)
                                    .when(current == value, |o| o.flag("selected"))
                                    .text(text)
                            },
                        )),
                ),
        )
        .build()
}

fn review_field(label_text: &str, value: String) -> Div {
    let value = if value.is_empty() { "—".to_string() } else { value };
    div()
        .child(div().class("text-xs uppercase text-text/50 mb-1").text(label_text))
        .child(
            div()
                .class("rounded-xl border border-black/10 bg-gray-50 p-3")
                .data("field", label_text)
                .text(value),
        )
}

fn render_review(ctx: &StepContext<'_>) -> Node {
    let data = ctx.data;
    let masked = "•".repeat(field_text(data, "password").chars().count());
    let newsletter = if field_truthy(data, "newsletter") { "Subscribed" } else { "No" };

    div()
        .class("space-y-4")
        .child(div().class("text-text/70").text("Confirm your details before submitting."))
        .child(
            div()
                .class("grid grid-cols-2 gap-3 text-sm")
                .child(review_field("Email", field_text(data, "email")))
                .child(review_field("Password", masked))
                .child(review_field("First name", field_text(data, "firstName")))
                .child(review_field("Last name", field_text(data, "lastName")))
                .child(review_field("Newsletter", newsletter.to_string()))
                .child(review_field("Theme", pref_theme(data)))
                .child(review_field("Bio", field_text(data, "bio")).class("col-span-2")),
        )
        .child(
            div()
                .class("flex items-start gap-2 rounded-xl border border-black/10 bg-white p-3")
                .child(checkbox("consent", field_truthy(data, "consent")).class("mt-1"))
                .child(
                    label()
                        .attr("for", "consent")
                        .class("text-sm text-text")
                        .text("I agree to the Terms and Privacy Policy."),
                ),
        )
        .child(
            div()
                .class("text-xs text-text/60")
                .text("You must provide consent to enable submission."),
        )
        .build()
}

/// The four demo steps
pub fn steps() -> Vec<WizardStep> {
    vec![
        WizardStep::new("Account")
            .validate(validate_account)
            .render(render_account),
        WizardStep::new("Personal Info")
            .validate(validate_personal)
            .render(render_personal),
        WizardStep::new("Preferences").render(render_preferences),
        WizardStep::new("Review")
            .validate(validate_review)
            .render(render_review),
    ]
}

#[derive(Debug)]
pub struct FormWizardPage {
    wizard: FormWizard,
    submitted: State<Option<FormData>>,
}

impl FormWizardPage {
    pub fn new(ctx: &PageContext<'_>) -> Self {
        let submitted = ctx.runtime.use_state(None);
        let on_finish = submitted.clone();
        let wizard = steps()
            .into_iter()
            .fold(FormWizard::new(ctx.runtime), FormWizard::step)
            .on_finish(move |data| {
                tracing::debug!(fields = data.len(), "form submitted");
                on_finish.set_rebuild(Some(data.clone()));
            });
        Self { wizard, submitted }
    }

    pub fn wizard(&self) -> &FormWizard {
        &self.wizard
    }

    pub fn set_field(&self, key: &str, value: Value) {
        self.wizard.set_field(key, value);
    }

    /// The review step's consent checkbox: records the value and opens or closes Finish
    pub fn set_consent(&self, checked: bool) {
        self.wizard.set_field("consent", checked);
        self.wizard.set_can_finish(checked);
    }

    pub fn next(&self) -> WizardOutcome {
        self.wizard.on_next()
    }

    pub fn back(&self) -> bool {
        self.wizard.on_prev()
    }

    pub fn submitted(&self) -> Option<FormData> {
        self.submitted.get()
    }

    pub fn render(&self) -> Node {
        let submitted = self.submitted().map(|data| {
            let json = serde_json::to_string_pretty(&data).unwrap_or_default();
            div()
                .class("ocean-surface p-5")
                .data("testid", "submitted-data")
                .child(h2().class("text-lg font-semibold").text("Submitted data"))
                .child(
                    pre()
                        .class("mt-2 text-sm bg-gray-50 rounded-xl p-3 overflow-x-auto")
                        .text(json),
                )
        });

        section()
            .class("space-y-6")
            .child(surface_header(
                "Form Wizard",
                "Multi-step forms with validation and accessible progress indicators.",
            ))
            .child(self.wizard.render())
            .child(submitted)
            .build()
    }
}
