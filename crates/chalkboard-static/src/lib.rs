//! Static page generation for chalkboard menus.
//!
//! Renders a validated menu into a single self-contained HTML document and
//! writes it to the output path.

pub mod builder;
pub mod stylesheet;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, PageBuilder};
pub use templates::PageTemplates;
