//! Breadcrumbs demo: two trails

use showcase_cn::{breadcrumbs, page_header, Crumb};
use showcase_layout::prelude::*;

fn demo_block(trail: Vec<Crumb>, note: &str) -> Div {
    div()
        .class("app-answer-surface app-answer-border p-5 space-y-3 rounded-2xl")
        .child(breadcrumbs(trail))
        .child(div().class("text-sm app-answer-subtle").text(note))
}

pub fn render() -> Node {
    section()
        .class("space-y-6")
        .child(
            page_header("Breadcrumbs")
                .subtitle("Hierarchical navigation trail to indicate the current location."),
        )
        .child(demo_block(
            vec![
                Crumb::link("Hero Section", "/"),
                Crumb::link("Components", "/accordion"),
                Crumb::current("Breadcrumbs"),
            ],
            "Use links for intermediate segments and a static label for the current page.",
        ))
        .child(demo_block(
            vec![
                Crumb::link("Hero Section", "/"),
                Crumb::link("Demos", "/toast"),
                Crumb::link("Form Wizard", "/form-wizard"),
                Crumb::current("Summary"),
            ],
            "Works with any number of segments. Responsive and wraps on small screens.",
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_trails_each_with_a_current_page() {
        let root = render().into_element().unwrap();
        let current = root.find_all_by_attr("aria-current", "page");
        let labels: Vec<String> = current.iter().map(|e| e.text_content()).collect();
        assert_eq!(labels, vec!["Breadcrumbs", "Summary"]);
    }
}
