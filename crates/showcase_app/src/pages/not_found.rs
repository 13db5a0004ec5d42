//! Fallback for unmatched paths

use showcase_layout::prelude::*;

pub fn render() -> Node {
    div()
        .class("ocean-surface p-8 text-center")
        .child(h1().class("text-2xl font-bold").text("Page not found"))
        .child(
            p().class("mt-2 text-text/70")
                .text("The page you are looking for doesn’t exist or has been moved."),
        )
        .child(
            a().href("/")
                .class("inline-flex mt-4 px-4 py-2 bg-primary text-white rounded-xl hover:bg-blue-600 transition shadow-soft")
                .text("Go back home"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_home() {
        let root = render().into_element().unwrap();
        let link = root.find_by_text("Go back home").unwrap();
        assert_eq!(link.attr("href"), Some("/"));
    }
}
