//! Link component stories for the storybook

use crate::error::Result;
use crate::storybook::{story_container, story_item, Registry, RenderTree};

pub const LINK_COMPONENT: &str = "Link";

/// Router link and anchor link side by side, optionally carrying a variant flag
fn link_pair(flag: Option<&str>) -> RenderTree {
    let link = with_flag(RenderTree::element("link").prop("to", "/"), flag);
    let anchor = with_flag(RenderTree::element("anchor").prop("href", "/"), flag);

    story_container()
        .child(story_item("link:", link.child("Show more")))
        .child(story_item("anchor link:", anchor.child("Show more")))
}

fn with_flag(tree: RenderTree, flag: Option<&str>) -> RenderTree {
    match flag {
        Some(flag) => tree.flag(flag),
        None => tree,
    }
}

/// Links wrapping a block element instead of text
fn wrapper_pair() -> RenderTree {
    let block = || {
        RenderTree::element("div")
            .prop("width", "100px")
            .prop("height", "100px")
            .prop("background", "lightblue")
    };

    story_container()
        .child(story_item(
            "linked block element:",
            RenderTree::element("link").prop("to", "/").child(block()),
        ))
        .child(story_item(
            "anchor linked block element:",
            RenderTree::element("anchor").prop("href", "/").child(block()),
        ))
}

/// Register every Link example in display order
pub fn register(registry: &Registry) -> Result<usize> {
    registry
        .for_component(LINK_COMPONENT)
        .add_documented_example(
            "Default (Unstyled)",
            "Router link and anchor link without styling",
            || Ok(link_pair(None)),
        )
        .add_documented_example("As wrapper", "Links around a block element", || {
            Ok(wrapper_pair())
        })
        .add_example("Primary", || Ok(link_pair(Some("primary"))))
        .add_example("Secondary", || Ok(link_pair(Some("secondary"))))
        .add_documented_example(
            "Show Visited",
            "Visited links keep a distinct color",
            || Ok(link_pair(Some("showVisited"))),
        )
        .add_example("Disabled", || Ok(link_pair(Some("disabled"))))
        .register()
}
