//! Badge component for status labels
//!
//! ```ignore
//! cn::badge("New")
//! cn::badge("Live").tone(BadgeTone::Success).variant(BadgeVariant::Solid)
//! cn::badge("Beta").tone(BadgeTone::Brand).variant(BadgeVariant::Outline).size(BadgeSize::Small)
//! ```

use showcase_layout::prelude::*;

/// Badge color families
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
    Info,
    Brand,
}

/// Badge fill styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Solid,
    #[default]
    Soft,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
}

impl BadgeSize {
    fn classes(&self) -> &'static str {
        match self {
            BadgeSize::Small => "text-[11px] px-2 py-0.5",
            BadgeSize::Medium => "text-xs px-2.5 py-1",
        }
    }
}

fn tone_classes(tone: BadgeTone, variant: BadgeVariant) -> &'static str {
    use BadgeTone as T;
    use BadgeVariant as V;
    match (tone, variant) {
        (T::Neutral, V::Solid) => "bg-gray-800 text-white",
        (T::Neutral, V::Soft) => "bg-gray-100 text-gray-800",
        (T::Neutral, V::Outline) => "border border-gray-300 text-gray-800",
        (T::Primary, V::Solid) => "bg-primary text-white",
        (T::Primary, V::Soft) => "bg-blue-50 text-blue-700",
        (T::Primary, V::Outline) => "border border-blue-200 text-blue-700",
        (T::Success, V::Solid) => "bg-emerald-600 text-white",
        (T::Success, V::Soft) => "bg-emerald-50 text-emerald-700",
        (T::Success, V::Outline) => "border border-emerald-200 text-emerald-700",
        (T::Warning, V::Solid) => "bg-amber-600 text-white",
        (T::Warning, V::Soft) => "bg-amber-50 text-amber-800",
        (T::Warning, V::Outline) => "border border-amber-200 text-amber-800",
        (T::Error, V::Solid) => "bg-red-600 text-white",
        (T::Error, V::Soft) => "bg-red-50 text-red-700",
        (T::Error, V::Outline) => "border border-red-200 text-red-700",
        (T::Info, V::Solid) => "bg-sky-600 text-white",
        (T::Info, V::Soft) => "bg-sky-50 text-sky-700",
        (T::Info, V::Outline) => "border border-sky-200 text-sky-700",
        (T::Brand, V::Solid) => "bg-brand-gradient text-white",
        (T::Brand, V::Soft) => "bg-blue-50 text-blue-700",
        (T::Brand, V::Outline) => "border-brand-gradient bg-white text-text",
    }
}

/// Badge component
#[derive(Clone, Debug)]
pub struct Badge {
    label: String,
    tone: BadgeTone,
    variant: BadgeVariant,
    size: BadgeSize,
    icon: Option<String>,
    extra_classes: String,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: BadgeTone::default(),
            variant: BadgeVariant::default(),
            size: BadgeSize::default(),
            icon: None,
            extra_classes: String::new(),
        }
    }

    pub fn tone(mut self, tone: BadgeTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        if !self.extra_classes.is_empty() {
            self.extra_classes.push(' ');
        }
        self.extra_classes.push_str(classes);
        self
    }
}

impl ElementBuilder for Badge {
    fn build(self) -> Node {
        span()
            .class("inline-flex items-center gap-1 rounded-full font-medium")
            .class(self.size.classes())
            .class(tone_classes(self.tone, self.variant))
            .class(&self.extra_classes)
            .maybe(self.icon, |b, icon| b.child(span().class("shrink-0").text(icon)))
            .child(span().text(self.label))
            .build()
    }
}

/// Create a badge
pub fn badge(label: impl Into<String>) -> Badge {
    Badge::new(label)
}
