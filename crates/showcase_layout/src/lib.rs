//! Showcase element tree
//!
//! Builders ([`div`], [`button`], ...) produce a tree of [`Node`]s that components
//! return from their `build` step. The tree can be queried ([`Element::find_by_role`]
//! and friends) and serialized with [`render_html`].

pub mod div;
pub mod element;
pub mod render;

pub use div::{el, Div, ElementBuilder};
pub use element::{Element, Node};
pub use render::{render_element, render_html};

/// Commonly used builders and traits
pub mod prelude {
    pub use crate::div::*;
    pub use crate::element::{Element, Node};
    pub use crate::render::{render_element, render_html};
}
