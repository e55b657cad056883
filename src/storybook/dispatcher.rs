//! Render dispatcher - invokes producers and isolates their failures
//!
//! A failing or panicking producer becomes a [`RenderFailure`] scoped to
//! its `(component, label)` key. With memoization enabled, each key's
//! producer runs at most once successfully: concurrent first renders of the
//! same key queue on that key's slot lock while other keys proceed.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, trace, warn};

use super::{Producer, Registry, RenderTree, StoryKey};
use crate::config::CatalogConfig;
use crate::error::{RenderFailure, Result};

/// Dispatcher behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Cache rendered trees per key for the dispatcher's lifetime
    pub memoize: bool,
}

impl From<&CatalogConfig> for DispatchOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            memoize: config.memoize,
        }
    }
}

type Slot = Arc<Mutex<Option<RenderTree>>>;

pub struct RenderDispatcher {
    registry: Arc<Registry>,
    options: DispatchOptions,
    cache: Mutex<HashMap<StoryKey, Slot>>,
}

impl RenderDispatcher {
    pub fn new(registry: Arc<Registry>, options: DispatchOptions) -> Self {
        Self {
            registry,
            options,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    /// Render one example.
    ///
    /// Unknown keys fail with a not-found error. Producer errors and panics
    /// come back as [`crate::error::CatalogError::Render`].
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, component: &str, label: &str) -> Result<RenderTree> {
        let entry = self.registry.entry(component, label)?;

        if !self.options.memoize {
            return Ok(invoke(component, label, &entry.producer)?);
        }

        let slot = {
            let mut cache = self.cache.lock();
            Arc::clone(cache.entry(StoryKey::new(component, label)).or_default())
        };

        let mut cached = slot.lock();
        if let Some(tree) = cached.as_ref() {
            trace!(component, label, "Render cache hit");
            return Ok(tree.clone());
        }

        let tree = invoke(component, label, &entry.producer)?;
        *cached = Some(tree.clone());
        Ok(tree)
    }

    /// Render every registered example in catalog order.
    ///
    /// A failing example is recorded and the sweep continues.
    pub fn render_all(&self) -> RenderReport {
        let started = Instant::now();
        let mut outcomes = Vec::new();
        for outline in self.registry.outlines() {
            for label in outline.labels {
                let result = self.render(&outline.name, &label);
                outcomes.push(RenderOutcome {
                    key: StoryKey::new(outline.name.clone(), label),
                    result,
                });
            }
        }

        let report = RenderReport { outcomes };
        info!(
            event_type = "catalog_render_all",
            rendered = report.succeeded(),
            failed = report.failed().count(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Rendered catalog"
        );
        report
    }

    /// Drop every memoized tree
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        debug!(entries = cache.len(), "Clearing render cache");
        cache.clear();
    }

    /// Number of keys holding a memoized tree
    pub fn cached_count(&self) -> usize {
        let slots: Vec<Slot> = self.cache.lock().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }
}

fn invoke(
    component: &str,
    label: &str,
    producer: &Producer,
) -> std::result::Result<RenderTree, RenderFailure> {
    let result = match panic::catch_unwind(AssertUnwindSafe(|| producer.invoke())) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!("producer panicked: {}", panic_message(&*payload))),
    };

    result.map_err(|cause| {
        warn!(
            event_type = "catalog_render_failed",
            component,
            label,
            error = %format!("{cause:#}"),
            "Example failed to render"
        );
        RenderFailure::new(component, label, cause)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Result of rendering one key during [`RenderDispatcher::render_all`]
#[derive(Debug)]
pub struct RenderOutcome {
    pub key: StoryKey,
    pub result: Result<RenderTree>,
}

#[derive(Debug)]
pub struct RenderReport {
    pub outcomes: Vec<RenderOutcome>,
}

impl RenderReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}
