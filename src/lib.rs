//! Story Catalog - an embeddable catalog of UI component examples
//!
//! Example authors register named, lazily rendered examples per component;
//! a host display shell navigates the catalog and renders examples on
//! demand, receiving an engine-agnostic [`storybook::RenderTree`].

pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod storybook;

pub use error::{CatalogError, RenderFailure, Result};
