//! Button component with visual variants
//!
//! # Example
//!
//! ```ignore
//! use showcase_cn::prelude::*;
//!
//! cn::button("Save").variant(ButtonVariant::Primary)
//! cn::button("Delete").variant(ButtonVariant::Danger).size(ButtonSize::Small)
//! cn::button("Docs").variant(ButtonVariant::BrandOutline).link("/docs")
//! cn::button("Saving").loading(true)
//! ```

use showcase_layout::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 font-semibold rounded-xl transition focus:outline-none focus-visible:ring-2 focus-visible:ring-primary/40 disabled:opacity-60 disabled:cursor-not-allowed";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary color (default)
    #[default]
    Primary,
    /// Solid secondary (amber)
    Secondary,
    /// Transparent, no border
    Ghost,
    /// Transparent with a hairline border
    Outline,
    /// Destructive red
    Danger,
    /// Brand gradient background
    Brand,
    /// Gradient border on a white surface
    BrandOutline,
    /// Solid primary with a brand glow
    BrandGlow,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-white hover:bg-blue-600 shadow-soft",
            ButtonVariant::Secondary => "bg-secondary text-white hover:bg-amber-600 shadow-soft",
            ButtonVariant::Ghost => {
                "bg-transparent text-text hover:bg-black/5 border border-transparent"
            }
            ButtonVariant::Outline => {
                "bg-transparent text-text hover:bg-white/60 border border-black/10"
            }
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 shadow-soft",
            ButtonVariant::Brand => {
                "bg-brand-gradient text-white shadow-soft hover:brightness-110 focus-visible:ring-white"
            }
            ButtonVariant::BrandOutline => {
                "border-brand-gradient bg-white text-text hover:bg-gray-50 focus-visible:ring-[#1840a0]"
            }
            ButtonVariant::BrandGlow => {
                "bg-primary text-white glow-brand hover:bg-blue-600 focus-visible:ring-white"
            }
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "text-sm px-3 py-1.5",
            ButtonSize::Medium => "text-sm px-4 py-2",
            ButtonSize::Large => "text-base px-5 py-2.5",
        }
    }
}

/// Button component
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    disabled: bool,
    href: Option<String>,
    left_icon: Option<String>,
    right_icon: Option<String>,
    extra_classes: String,
    attrs: Vec<(String, String)>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
            href: None,
            left_icon: None,
            right_icon: None,
            extra_classes: String::new(),
            attrs: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Show a spinner, disable the control and mark it busy
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render as an anchor instead of a `<button>`
    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Append extra classes
    pub fn class(mut self, classes: &str) -> Self {
        if !self.extra_classes.is_empty() {
            self.extra_classes.push(' ');
        }
        self.extra_classes.push_str(classes);
        self
    }

    /// Forward an attribute to the rendered element
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Whether the control is inert
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }
}

impl ElementBuilder for Button {
    fn build(self) -> Node {
        let is_disabled = self.is_disabled();
        let root = match &self.href {
            Some(href) => a().href(href.clone()),
            None => el("button").kind("button").when(is_disabled, |b| b.flag("disabled")),
        };

        let mut root = root
            .class(BASE_CLASSES)
            .class(self.variant.classes())
            .class(self.size.classes())
            .class(&self.extra_classes)
            .when(self.loading, |b| b.aria("busy", "true"));

        for (name, value) in self.attrs {
            root = root.attr(&name, value);
        }

        root.maybe(self.left_icon, |b, icon| {
            b.child(span().class("shrink-0").text(icon))
        })
        .child(
            span()
                .when(self.loading, |s| s.class("opacity-80"))
                .text(self.label),
        )
        .maybe(self.right_icon, |b, icon| {
            b.child(span().class("shrink-0").text(icon))
        })
        .when(self.loading, |b| {
            b.child(
                span()
                    .class("ml-1 h-4 w-4 inline-block border-2 border-white/60 border-t-white rounded-full animate-spin")
                    .aria("hidden", "true"),
            )
        })
        .build()
    }
}

/// Create a button
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}
