//! Story registry - explicit, instance-owned store of component examples
//!
//! Components keep first-registration order and their examples keep
//! declaration order. Mutations are serialized behind a write lock; readers
//! clone entries out so producers never run while the lock is held.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::{ExampleEntry, Producer, RenderTree};
use crate::error::{CatalogError, Result};

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Components";

struct ComponentEntry {
    name: String,
    category: String,
    examples: Vec<ExampleEntry>,
}

impl ComponentEntry {
    fn has_label(&self, label: &str) -> bool {
        self.examples.iter().any(|e| e.label == label)
    }
}

/// Labels and category of one component, detached from the registry lock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentOutline {
    pub name: String,
    pub category: String,
    pub labels: Vec<String>,
}

#[derive(Default)]
struct RegistryState {
    components: Vec<ComponentEntry>,
    index: HashMap<String, usize>,
    /// Rebuilt whenever a component is added
    names: Arc<[String]>,
    generation: u64,
}

impl RegistryState {
    fn component(&self, name: &str) -> Option<&ComponentEntry> {
        self.index.get(name).map(|&i| &self.components[i])
    }
}

/// In-memory store mapping component names to ordered examples
#[derive(Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one example, creating the component if absent.
    ///
    /// Fails with [`CatalogError::DuplicateLabel`] if `label` already exists
    /// for `component`; the existing sequence is left untouched.
    pub fn register<F>(&self, component: &str, label: &str, producer: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static,
    {
        self.register_entry(component, ExampleEntry::new(label, Producer::new(producer)))
    }

    pub fn register_entry(&self, component: &str, entry: ExampleEntry) -> Result<()> {
        self.register_all(component, None, vec![entry]).map(|_| ())
    }

    /// Register a batch of examples atomically.
    ///
    /// Either every entry is appended in order or none is. `category`
    /// replaces the component's current category when given.
    pub fn register_all(
        &self,
        component: &str,
        category: Option<&str>,
        entries: Vec<ExampleEntry>,
    ) -> Result<usize> {
        let mut state = self.state.write();

        {
            let existing = state.component(component);
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                let taken = existing.is_some_and(|c| c.has_label(&entry.label));
                if taken || !seen.insert(entry.label.as_str()) {
                    warn!(
                        event_type = "catalog_register",
                        component,
                        label = %entry.label,
                        "Rejected duplicate example label"
                    );
                    return Err(CatalogError::duplicate_label(component, &entry.label));
                }
            }
        }

        let added = entries.len();
        match state.index.get(component).copied() {
            Some(i) => {
                let target = &mut state.components[i];
                if let Some(category) = category {
                    if target.category != category {
                        debug!(component, from = %target.category, to = category, "Category changed");
                        target.category = category.to_string();
                    }
                }
                target.examples.extend(entries);
            }
            None => {
                let position = state.components.len();
                state.components.push(ComponentEntry {
                    name: component.to_string(),
                    category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
                    examples: entries,
                });
                state.index.insert(component.to_string(), position);
                let names: Arc<[String]> = state.components.iter().map(|c| c.name.clone()).collect();
                state.names = names;
            }
        }
        state.generation += 1;

        debug!(
            event_type = "catalog_register",
            component,
            added,
            generation = state.generation,
            "Registered examples"
        );
        Ok(added)
    }

    /// Ordered examples of `component`
    pub fn get(&self, component: &str) -> Result<Vec<ExampleEntry>> {
        self.state
            .read()
            .component(component)
            .map(|c| c.examples.clone())
            .ok_or_else(|| CatalogError::component_not_found(component))
    }

    pub fn entry(&self, component: &str, label: &str) -> Result<ExampleEntry> {
        let state = self.state.read();
        let found = state
            .component(component)
            .ok_or_else(|| CatalogError::component_not_found(component))?;
        found
            .examples
            .iter()
            .find(|e| e.label == label)
            .cloned()
            .ok_or_else(|| CatalogError::example_not_found(component, label))
    }

    pub fn contains(&self, component: &str) -> bool {
        self.state.read().index.contains_key(component)
    }

    /// Component names in first-registration order
    pub fn component_names(&self) -> Arc<[String]> {
        Arc::clone(&self.state.read().names)
    }

    pub fn outline(&self, component: &str) -> Result<ComponentOutline> {
        self.state
            .read()
            .component(component)
            .map(outline_of)
            .ok_or_else(|| CatalogError::component_not_found(component))
    }

    /// Outline of every component in registration order
    pub fn outlines(&self) -> Vec<ComponentOutline> {
        self.state.read().components.iter().map(outline_of).collect()
    }

    pub fn component_count(&self) -> usize {
        self.state.read().components.len()
    }

    pub fn example_count(&self) -> usize {
        self.state
            .read()
            .components
            .iter()
            .map(|c| c.examples.len())
            .sum()
    }

    /// Incremented on every successful registration
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }
}

fn outline_of(component: &ComponentEntry) -> ComponentOutline {
    ComponentOutline {
        name: component.name.clone(),
        category: component.category.clone(),
        labels: component.examples.iter().map(|e| e.label.clone()).collect(),
    }
}
