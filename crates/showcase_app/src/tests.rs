//! End-to-end tests for showcase_app
//!
//! Every scenario drives a `ShowcaseApp` through events on the virtual clock and checks
//! the rendered tree or the widget state behind it.

use crate::pages::ActivePage;
use crate::prelude::*;
use serde_json::json;
use showcase_core::SchedulerExt;

fn app() -> ShowcaseApp {
    ShowcaseApp::new(AppConfig::default(), EnvConfig::default())
}

fn app_at(path: &str) -> ShowcaseApp {
    let mut app = app();
    app.navigate(path);
    app
}

fn rendered(app: &ShowcaseApp) -> Element {
    app.render().into_element().unwrap()
}

fn toast_titles(app: &ShowcaseApp) -> Vec<String> {
    app.toasts()
        .toasts()
        .into_iter()
        .map(|t| t.title.unwrap_or_default())
        .collect()
}

#[test]
fn test_starts_on_home() {
    let app = app();
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.location(), "/");
    assert_eq!(app.layout().document().data_theme().as_deref(), Some("light"));
}

#[test]
fn test_enqueue_dismiss_clear_scenario() {
    let mut app = app();
    app.dispatch(AppEvent::ToastShow(
        ToastSpec::new().title("A").tone(ToastTone::Success),
    ))
    .unwrap();
    app.dispatch(AppEvent::ToastShow(ToastSpec::new().title("B")))
        .unwrap();
    assert_eq!(toast_titles(&app), vec!["A", "B"]);

    let ids = app.toasts().ids();
    assert!(ids[0] < ids[1]);

    app.dispatch(AppEvent::ToastDismiss(ids[0])).unwrap();
    assert_eq!(toast_titles(&app), vec!["B"]);
    app.dispatch(AppEvent::ToastDismiss(ids[0])).unwrap();
    assert_eq!(toast_titles(&app), vec!["B"]);

    app.dispatch(AppEvent::ToastClear).unwrap();
    assert!(app.toasts().is_empty());
}

#[test]
fn test_toast_expires_after_its_ttl() {
    let mut app = app_at("/toast");
    app.dispatch(AppEvent::ToastFire(ToastTone::Success)).unwrap();
    app.dispatch(AppEvent::ToastSticky).unwrap();

    let root = rendered(&app);
    let region = root.find_by_role("region").unwrap();
    assert_eq!(region.find_all_by_attr("data-tone", "success").len(), 1);
    assert!(root.find_by_text("This is a success message.").is_some());

    app.advance(3499);
    assert_eq!(app.toasts().len(), 2);
    app.advance(2);
    assert_eq!(toast_titles(&app), vec!["Sticky"]);

    app.advance(60_000);
    assert_eq!(toast_titles(&app), vec!["Sticky"]);
}

#[test]
fn test_toast_announcement_clears() {
    let mut app = app_at("/toast");
    app.dispatch(AppEvent::ToastFire(ToastTone::Default)).unwrap();

    let live = |app: &ShowcaseApp| {
        rendered(app)
            .find_by_attr("aria-live", "polite")
            .map(|e| e.text_content())
            .unwrap_or_default()
    };
    assert_eq!(live(&app), "Heads up: This is a neutral notification.");
    app.advance(500);
    assert_eq!(live(&app), "");
}

#[test]
fn test_toast_buttons_need_the_toast_page() {
    let mut app = app();
    let err = app.dispatch(AppEvent::ToastFire(ToastTone::Info)).unwrap_err();
    assert!(matches!(err, AppError::NotOnPage { event: "toast", .. }));
    assert!(app.toasts().is_empty());
}

#[test]
fn test_toasts_survive_navigation() {
    let mut app = app_at("/toast");
    app.dispatch(AppEvent::ToastSticky).unwrap();
    app.navigate("/accordion");
    assert_eq!(app.toasts().len(), 1);
    assert!(rendered(&app).find_by_attr("data-toast-id", "1").is_some());
}

#[test]
fn test_theme_toggle_updates_document() {
    let mut app = app();
    app.dispatch(AppEvent::ToggleTheme).unwrap();
    assert_eq!(app.theme().scheme(), ColorScheme::Dark);
    assert_eq!(app.layout().document().data_theme().as_deref(), Some("dark"));

    let html = app.render_html();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("data-theme=\"dark\""));
    assert!(rendered(&app)
        .find_by_attr("aria-label", "Switch to light mode")
        .is_some());
}

#[test]
fn test_initial_theme_from_config() {
    let config = AppConfig::from_toml_str("[theme]\ninitial = \"dark\"").unwrap();
    let app = ShowcaseApp::new(config, EnvConfig::default());
    assert_eq!(app.layout().document().data_theme().as_deref(), Some("dark"));
}

#[test]
fn test_home_redirect_and_fallback() {
    let mut app = app_at("/toast");
    assert_eq!(app.navigate("/home"), Route::Home);
    assert_eq!(app.location(), "/");
    assert_eq!(app.router().history(), vec!["/", "/toast", "/"]);

    assert_eq!(app.navigate("/missing"), Route::NotFound);
    assert!(rendered(&app).find_by_text("Page not found").is_some());

    app.dispatch(AppEvent::Back).unwrap();
    assert_eq!(app.current_route(), Route::Home);
}

#[test]
fn test_accordion_items_are_independent() {
    let mut app = app_at("/accordion");
    let ActivePage::Accordion(page) = app.page() else {
        panic!("accordion page not mounted");
    };
    assert!(page.accordion().is_open("0"));
    assert!(!page.accordion().is_open("1"));

    app.dispatch(AppEvent::AccordionToggle("1".into())).unwrap();
    let ActivePage::Accordion(page) = app.page() else {
        panic!("accordion page not mounted");
    };
    assert!(page.accordion().is_open("0"));
    assert!(page.accordion().is_open("1"));
}

#[test]
fn test_carousel_wraps_and_autoplays() {
    let mut app = app_at("/carousel");
    let index = |app: &ShowcaseApp| match app.page() {
        ActivePage::Carousel(page) => page.carousel().index(),
        _ => usize::MAX,
    };

    for _ in 0..3 {
        app.dispatch(AppEvent::CarouselNext).unwrap();
    }
    assert_eq!(index(&app), 0);

    app.dispatch(AppEvent::CarouselPrev).unwrap();
    assert_eq!(index(&app), 2);

    app.advance(4000);
    assert_eq!(index(&app), 0);

    app.dispatch(AppEvent::CarouselSwipe { from: 200.0, to: 100.0 })
        .unwrap();
    assert_eq!(index(&app), 1);
    app.dispatch(AppEvent::CarouselSwipe { from: 100.0, to: 80.0 })
        .unwrap();
    assert_eq!(index(&app), 1);

    app.dispatch(AppEvent::Key {
        key: "ArrowLeft".into(),
        shift: false,
    })
    .unwrap();
    assert_eq!(index(&app), 0);
}

#[test]
fn test_leaving_carousel_cancels_autoplay() {
    let mut app = app_at("/carousel");
    assert!(app.runtime().timers().pending_count() > 0);
    app.navigate("/");
    assert_eq!(app.runtime().timers().pending_count(), 0);
}

#[test]
fn test_chatbot_round_trip() {
    let mut app = app_at("/chatbot");
    let err = app.dispatch(AppEvent::ChatSend).unwrap_err();
    assert!(matches!(err, AppError::NotOnPage { .. }));

    app.dispatch(AppEvent::ChatToggle).unwrap();
    app.dispatch(AppEvent::ChatInput("tell me about the carousel".into()))
        .unwrap();
    app.dispatch(AppEvent::Key {
        key: "Enter".into(),
        shift: false,
    })
    .unwrap();

    let messages = |app: &ShowcaseApp| match app.page() {
        ActivePage::Chatbot(page) => page
            .launcher()
            .with_chatbot(|bot| bot.messages())
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    assert_eq!(messages(&app).len(), 2);

    app.advance(700);
    let after = messages(&app);
    assert_eq!(after.len(), 3);
    assert!(after[2].content.starts_with("Carousel slides content"));
}

#[test]
fn test_wizard_finishes_once_with_consent() {
    let mut app = app_at("/form-wizard");
    app.dispatch(AppEvent::WizardNext).unwrap();
    assert!(rendered(&app).find_by_text("Email is required.").is_some());

    for (key, value) in [
        ("email", json!("jane@example.com")),
        ("password", json!("hunter22")),
    ] {
        app.dispatch(AppEvent::WizardSet {
            key: key.into(),
            value,
        })
        .unwrap();
    }
    app.dispatch(AppEvent::WizardNext).unwrap();

    for (key, value) in [("firstName", json!("Jane")), ("lastName", json!("Doe"))] {
        app.dispatch(AppEvent::WizardSet {
            key: key.into(),
            value,
        })
        .unwrap();
    }
    app.dispatch(AppEvent::WizardNext).unwrap();
    app.dispatch(AppEvent::WizardNext).unwrap();

    let ActivePage::FormWizard(page) = app.page() else {
        panic!("wizard page not mounted");
    };
    assert_eq!(page.wizard().step_index(), 3);
    assert_eq!(
        page.next(),
        WizardOutcome::Blocked(vec!["Consent is required to submit.".to_string()])
    );
    page.set_consent(false);
    assert_eq!(page.next(), WizardOutcome::FinishLocked);
    assert!(page.submitted().is_none());

    let root = rendered(&app);
    assert!(root.find_by_text("••••••••").is_some());
    assert!(root.find_by_text("system").is_some());

    app.dispatch(AppEvent::WizardConsent(true)).unwrap();
    app.dispatch(AppEvent::WizardNext).unwrap();

    let ActivePage::FormWizard(page) = app.page() else {
        panic!("wizard page not mounted");
    };
    let submitted = page.submitted().unwrap();
    assert_eq!(submitted["email"], json!("jane@example.com"));
    assert_eq!(submitted["consent"], json!(true));
    assert_eq!(page.wizard().step_index(), 3);

    let pre = rendered(&app)
        .find_by_test_id("submitted-data")
        .map(|e| e.text_content())
        .unwrap_or_default();
    assert!(pre.contains("\"firstName\": \"Jane\""));
}

#[test]
fn test_testimonial_slider_wraps() {
    let mut app = app_at("/testimonial");
    app.dispatch(AppEvent::TestimonialPrev).unwrap();
    let ActivePage::Testimonial(page) = app.page() else {
        panic!("testimonial page not mounted");
    };
    assert_eq!(page.slider().index(), 2);
    assert_eq!(page.slider().current().map(|t| t.author.as_str()), Some("Marco Rossi"));
}

#[test]
fn test_menu_toggle_and_escape() {
    let mut app = app();
    app.dispatch(AppEvent::MenuToggle).unwrap();
    assert!(app.layout().navbar().demos().is_open());
    assert!(rendered(&app).find_by_role("menu").is_some());

    app.dispatch(AppEvent::Key {
        key: "Escape".into(),
        shift: false,
    })
    .unwrap();
    assert!(!app.layout().navbar().demos().is_open());

    app.dispatch(AppEvent::MenuToggle).unwrap();
    app.navigate("/toast");
    assert!(!app.layout().navbar().demos().is_open());
}

#[test]
fn test_script_replay() {
    let mut app = app();
    let mut outputs = Vec::new();
    let count = run_script(
        &mut app,
        "# toast scenario\n\
         navigate /toast\n\
         toast success\n\
         toast show info 0 Pinned\n\
         \n\
         advance 3500\n\
         status\n",
        |text| outputs.push(text),
    )
    .unwrap();

    assert_eq!(count, 5);
    assert_eq!(toast_titles(&app), vec!["Pinned"]);
    assert_eq!(
        outputs,
        vec!["route=Toast path=/toast theme=light toasts=1 t=3500ms"]
    );
}

#[test]
fn test_script_reports_failing_line() {
    let mut app = app();
    let err = run_script(&mut app, "navigate /\ncarousel next\n", |_| {}).unwrap_err();
    match err {
        AppError::Script { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, AppError::NotOnPage { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_navigation_frees_page_state() {
    let mut app = app_at("/carousel");
    app.navigate("/");
    let baseline = app.runtime().stats().signal_count;

    for _ in 0..100 {
        app.navigate("/carousel");
        app.navigate("/form-wizard");
        app.navigate("/chatbot");
        app.navigate("/");
    }

    assert_eq!(app.runtime().stats().signal_count, baseline);
    assert_eq!(app.runtime().timers().pending_count(), 0);
}

#[test]
fn test_clear_all_button_clears_sticky_toasts() {
    let mut app = app_at("/toast");
    app.dispatch(AppEvent::ToastFire(ToastTone::Info)).unwrap();
    app.dispatch(AppEvent::ToastSticky).unwrap();
    assert_eq!(app.toasts().len(), 2);

    let root = rendered(&app);
    let clear = root.find_by_attr("data-action", "toast-clear").unwrap();
    assert_eq!(clear.text_content(), "Clear all");
    assert_eq!(AppEvent::ToastClear.name(), "clear-toasts");

    app.dispatch(AppEvent::ToastClear).unwrap();
    assert!(app.toasts().is_empty());
    app.advance(10_000);
    assert!(app.toasts().is_empty());
}
