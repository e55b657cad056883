//! Fluent registration of several examples for one component
//!
//! ```ignore
//! registry
//!     .for_component("Link")
//!     .add_example("Primary", || Ok(link().flag("primary")))
//!     .add_example("Disabled", || Ok(link().flag("disabled")))
//!     .register()?;
//! ```

use super::{ExampleEntry, Producer, Registry, RenderTree};
use crate::error::Result;

/// Collects examples in declaration order and commits them in one batch
#[must_use = "examples are only added when `register` is called"]
pub struct ExampleBuilder<'a> {
    registry: &'a Registry,
    component: String,
    category: Option<String>,
    entries: Vec<ExampleEntry>,
}

impl<'a> ExampleBuilder<'a> {
    pub(crate) fn new(registry: &'a Registry, component: impl Into<String>) -> Self {
        Self {
            registry,
            component: component.into(),
            category: None,
            entries: Vec::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn add_example<F>(mut self, label: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static,
    {
        self.entries
            .push(ExampleEntry::new(label, Producer::new(producer)));
        self
    }

    pub fn add_documented_example<F>(
        mut self,
        label: impl Into<String>,
        description: impl Into<String>,
        producer: F,
    ) -> Self
    where
        F: Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static,
    {
        self.entries.push(
            ExampleEntry::new(label, Producer::new(producer)).with_description(description),
        );
        self
    }

    /// Number of examples declared so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commit every declared example. All-or-nothing: a duplicate label
    /// rejects the whole batch.
    pub fn register(self) -> Result<usize> {
        self.registry
            .register_all(&self.component, self.category.as_deref(), self.entries)
    }
}

impl Registry {
    pub fn for_component(&self, component: impl Into<String>) -> ExampleBuilder<'_> {
        ExampleBuilder::new(self, component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_builder_preserves_declaration_order() {
        let registry = Registry::new();
        let added = registry
            .for_component("Link")
            .add_example("Primary", || Ok(RenderTree::element("link")))
            .add_example("Secondary", || Ok(RenderTree::element("link")))
            .add_example("Disabled", || Ok(RenderTree::element("link")))
            .register()
            .unwrap();

        assert_eq!(added, 3);
        assert_eq!(
            registry.outline("Link").unwrap().labels,
            vec!["Primary", "Secondary", "Disabled"]
        );
    }

    #[test]
    fn test_builder_does_not_invoke_producers() {
        let registry = Registry::new();
        registry
            .for_component("Broken")
            .add_example("Fails", || anyhow::bail!("not yet"))
            .register()
            .unwrap();
        assert_eq!(registry.example_count(), 1);
    }

    #[test]
    fn test_builder_sets_category_and_description() {
        let registry = Registry::new();
        registry
            .for_component("Tokens")
            .category("Foundation")
            .add_documented_example("Colors", "Palette swatches", || {
                Ok(RenderTree::element("swatch"))
            })
            .register()
            .unwrap();

        assert_eq!(registry.outline("Tokens").unwrap().category, "Foundation");
        let entry = registry.entry("Tokens", "Colors").unwrap();
        assert_eq!(entry.description.as_deref(), Some("Palette swatches"));
    }

    #[test]
    fn test_builder_duplicate_rejects_batch() {
        let registry = Registry::new();
        let builder = registry
            .for_component("Link")
            .add_example("Primary", || Ok(RenderTree::element("a")))
            .add_example("Primary", || Ok(RenderTree::element("b")));
        assert_eq!(builder.len(), 2);

        let err = builder.register().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel { .. }));
        assert!(!registry.contains("Link"));
    }
}
