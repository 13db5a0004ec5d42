//! # Showcase Component Library (showcase_cn)
//!
//! Themed components built on `showcase_layout` primitives.
//!
//! - **Primitives**: `showcase_layout` provides the element tree and builders
//! - **Theme**: `showcase_theme` provides the color schemes and the shared theme state
//! - **State**: `showcase_core` provides `State<T>`, timers and scoped context
//! - **Components**: this crate
//!
//! ## Example
//!
//! ```ignore
//! use showcase_cn::prelude::*;
//!
//! cn::button("Save").variant(ButtonVariant::Primary);
//!
//! cn::badge("New").tone(BadgeTone::Success);
//!
//! let toasts = ToastProvider::new(&runtime, ToastConfig::default());
//! toasts.show_toast(ToastSpec::new().title("Saved").tone(ToastTone::Success));
//! ```

pub mod components;

pub use components::*;

/// Convenience module for accessing builder functions with a `cn::` prefix
pub mod cn {
    pub use crate::components::badge::badge;
    pub use crate::components::bento_menu::bento_menu;
    pub use crate::components::breadcrumb::breadcrumbs;
    pub use crate::components::button::button;
    pub use crate::components::card::card;
    pub use crate::components::header::page_header;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::*;
    pub use showcase_theme::{ColorScheme, ShowcaseTheme, ThemeState};
}
