//! Components Showcase application
//!
//! The application shell around the `showcase_cn` components: environment resolution,
//! routing, the layout with its theme toggle and toast stack, and one page per demo.
//!
//! # Example
//!
//! ```ignore
//! use showcase_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut app = ShowcaseApp::new(AppConfig::default(), EnvConfig::from_env());
//!
//!     app.dispatch(AppEvent::Navigate("/carousel".into()))?;
//!     app.dispatch(AppEvent::CarouselNext)?;
//!     app.advance(4000);
//!
//!     println!("{}", app.render_html());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod env;
mod error;
pub mod layout;
pub mod pages;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use app::{AppEvent, ShowcaseApp};
pub use config::AppConfig;
pub use env::EnvConfig;
pub use error::{AppError, Result};
pub use layout::{Document, MainLayout};
pub use router::{Route, Router, ROUTES};
pub use session::{run_script, Command};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{AppEvent, ShowcaseApp};
    pub use crate::config::AppConfig;
    pub use crate::env::EnvConfig;
    pub use crate::error::{AppError, Result};
    pub use crate::router::{Route, ROUTES};
    pub use crate::session::{run_script, Command};

    // Components and layout builders
    pub use showcase_cn::prelude::*;
    pub use showcase_layout::prelude::*;
}
