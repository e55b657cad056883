//! Storybook - component example catalog
//!
//! Registers named examples ("stories") of UI components and serves them to
//! a host display shell.
//!
//! # Components
//!
//! - [`Registry`] - instance-owned store of components and their examples
//! - [`ExampleBuilder`] - fluent registration of several examples at once
//! - [`CatalogIndex`] - read-only navigation (listing, categories, search)
//! - [`RenderDispatcher`] - invokes producers, isolates failures, optional memoization
//! - [`RenderTree`] - engine-agnostic output handed to the host
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use story_catalog::storybook::*;
//!
//! let registry = Arc::new(Registry::new());
//! registry
//!     .for_component("Link")
//!     .add_example("Primary", || Ok(RenderTree::element("link").flag("primary")))
//!     .register()?;
//!
//! let catalog = CatalogIndex::new(Arc::clone(&registry));
//! let dispatcher = RenderDispatcher::new(registry, DispatchOptions::default());
//! for label in catalog.list_examples("Link")? {
//!     let tree = dispatcher.render("Link", &label)?;
//! }
//! ```

mod builder;
mod catalog;
mod dispatcher;
mod layout;
mod registry;
mod render_tree;
mod story;

pub use builder::ExampleBuilder;
pub use catalog::{CatalogIndex, ComponentList};
pub use dispatcher::{DispatchOptions, RenderDispatcher, RenderOutcome, RenderReport};
pub use layout::{code_block, story_container, story_divider, story_item, story_section};
pub use registry::{ComponentOutline, Registry, DEFAULT_CATEGORY};
pub use render_tree::RenderTree;
pub use story::{ExampleEntry, Producer, StoryKey};

#[cfg(test)]
#[path = "storybook_tests.rs"]
mod tests;
