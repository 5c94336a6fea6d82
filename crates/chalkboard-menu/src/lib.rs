//! Menu document loading and schema validation.
//!
//! This crate reads a YAML menu document into an untyped node tree, checks it
//! against the menu schema, and narrows it into the typed [`Menu`] model the
//! page builder consumes.

pub mod loader;
pub mod menu;
pub mod validate;

pub use loader::{load_document, LoadError};
pub use menu::{Item, Menu, Price, Section};
pub use validate::{validate, SchemaError};
