//! RenderTree - engine-agnostic description of rendered output
//!
//! The catalog never interprets a tree. It only stores, caches and hands
//! trees to the host shell, which decides how `kind` and `props` map onto
//! real widgets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a rendered story
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderTree {
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RenderTree {
    pub fn element(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Boolean prop, stored as "true"
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.prop(key, "true")
    }

    pub fn child(mut self, child: impl Into<RenderTree>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderTree>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Depth-first search for the first node of `kind`, including self
    pub fn find(&self, kind: &str) -> Option<&RenderTree> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(kind))
    }

    /// Total node count including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RenderTree::node_count).sum::<usize>()
    }
}

impl From<&str> for RenderTree {
    fn from(text: &str) -> Self {
        RenderTree::text(text)
    }
}

impl From<String> for RenderTree {
    fn from(text: String) -> Self {
        RenderTree::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_props_and_children() {
        let tree = RenderTree::element("link")
            .prop("to", "/")
            .flag("primary")
            .child("Show more");

        assert_eq!(tree.get_prop("to"), Some("/"));
        assert_eq!(tree.get_prop("primary"), Some("true"));
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].text.as_deref(), Some("Show more"));
    }

    #[test]
    fn test_find_is_depth_first() {
        let tree = RenderTree::element("div")
            .child(RenderTree::element("span").child(RenderTree::element("anchor").prop("id", "a")))
            .child(RenderTree::element("anchor").prop("id", "b"));

        assert_eq!(tree.find("anchor").and_then(|n| n.get_prop("id")), Some("a"));
        assert!(tree.find("button").is_none());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let json = serde_json::to_string(&RenderTree::element("div")).unwrap();
        assert_eq!(json, r#"{"kind":"div"}"#);
    }
}
