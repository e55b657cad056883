use std::fmt;
use std::sync::Arc;

use super::RenderTree;

/// Deferred, zero-argument computation yielding a [`RenderTree`].
///
/// Producers are stored behind an `Arc` so entries can be cloned out of the
/// registry and invoked without holding its lock.
#[derive(Clone)]
pub struct Producer(Arc<dyn Fn() -> anyhow::Result<RenderTree> + Send + Sync>);

impl Producer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Producer that always yields a clone of `tree`
    pub fn constant(tree: RenderTree) -> Self {
        Self::new(move || Ok(tree.clone()))
    }

    pub fn invoke(&self) -> anyhow::Result<RenderTree> {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

/// One named example of a component
#[derive(Clone, Debug)]
pub struct ExampleEntry {
    pub label: String,
    pub description: Option<String>,
    pub producer: Producer,
}

impl ExampleEntry {
    pub fn new(label: impl Into<String>, producer: Producer) -> Self {
        Self {
            label: label.into(),
            description: None,
            producer,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// `(component, label)` address of one example
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoryKey {
    pub component: String,
    pub label: String,
}

impl StoryKey {
    pub fn new(component: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for StoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.component, self.label)
    }
}
