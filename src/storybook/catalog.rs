//! Catalog index - read-only navigation over a [`Registry`]
//!
//! Every query reads the registry at call time, so the index never goes
//! stale. It exposes no mutation; [`CatalogIndex::register`] exists only to
//! reject hosts that try.

use std::sync::Arc;

use tracing::error;

use super::{Registry, RenderTree, StoryKey};
use crate::error::{CatalogError, Result};

/// Snapshot of component names in registration order.
///
/// Iterating does not consume it, so the same list can be walked any
/// number of times.
#[derive(Clone, Debug)]
pub struct ComponentList {
    names: Arc<[String]>,
}

impl ComponentList {
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.to_vec()
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

pub struct CatalogIndex {
    registry: Arc<Registry>,
}

impl CatalogIndex {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn list_components(&self) -> ComponentList {
        ComponentList {
            names: self.registry.component_names(),
        }
    }

    /// Example labels of `component` in declaration order
    pub fn list_examples(&self, component: &str) -> Result<Vec<String>> {
        self.registry.outline(component).map(|o| o.labels)
    }

    /// Unique categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for outline in self.registry.outlines() {
            if !categories.contains(&outline.category) {
                categories.push(outline.category);
            }
        }
        categories
    }

    pub fn components_in_category(&self, category: &str) -> Vec<String> {
        self.registry
            .outlines()
            .into_iter()
            .filter(|o| o.category == category)
            .map(|o| o.name)
            .collect()
    }

    /// Case-insensitive substring search.
    ///
    /// A component whose name or category matches contributes all of its
    /// examples; otherwise only matching labels are returned. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<StoryKey> {
        let query = query.trim().to_lowercase();
        let mut hits = Vec::new();
        for outline in self.registry.outlines() {
            let whole = outline.name.to_lowercase().contains(&query)
                || outline.category.to_lowercase().contains(&query);
            for label in &outline.labels {
                if whole || label.to_lowercase().contains(&query) {
                    hits.push(StoryKey::new(outline.name.clone(), label.clone()));
                }
            }
        }
        hits
    }

    /// Label after `label`, wrapping to the first example
    pub fn next_example(&self, component: &str, label: &str) -> Result<String> {
        self.neighbour(component, label, 1)
    }

    /// Label before `label`, wrapping to the last example
    pub fn previous_example(&self, component: &str, label: &str) -> Result<String> {
        self.neighbour(component, label, -1)
    }

    fn neighbour(&self, component: &str, label: &str, step: isize) -> Result<String> {
        let labels = self.list_examples(component)?;
        let position = labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| CatalogError::example_not_found(component, label))?;
        let len = labels.len() as isize;
        let target = (position as isize + step).rem_euclid(len) as usize;
        Ok(labels[target].clone())
    }

    /// Always fails: the index is a read-only view.
    pub fn register<F>(&self, component: &str, label: &str, _producer: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static,
    {
        error!(
            event_type = "catalog_misuse",
            component,
            label,
            "Attempted to register through the read-only catalog index"
        );
        Err(CatalogError::UnsupportedOperation {
            operation: "register",
        })
    }
}
