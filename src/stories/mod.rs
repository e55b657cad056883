//! Bundled story definitions
//!
//! Each component's stories live in their own module and are registered
//! through [`register_all_stories`].

mod link_stories;

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::storybook::Registry;

pub use link_stories::LINK_COMPONENT;

/// Register every bundled story into `registry`
pub fn register_all_stories(registry: &Registry) -> Result<usize> {
    let added = link_stories::register(registry)?;
    info!(
        event_type = "catalog_register",
        components = registry.component_count(),
        examples = added,
        "Registered bundled stories"
    );
    Ok(added)
}

/// Fresh registry holding the bundled stories
pub fn builtin_registry() -> Result<Arc<Registry>> {
    let registry = Registry::new();
    register_all_stories(&registry)?;
    Ok(Arc::new(registry))
}
