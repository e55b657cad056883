//! End-to-end flows across registry, index and dispatcher

use super::*;
use crate::error::CatalogError;
use std::sync::Arc;

const LINK_LABELS: [&str; 6] = [
    "Default (Unstyled)",
    "As wrapper",
    "Primary",
    "Secondary",
    "Show Visited",
    "Disabled",
];

fn variant_tree(label: &'static str) -> impl Fn() -> anyhow::Result<RenderTree> + Send + Sync + 'static {
    move || Ok(RenderTree::element("link").prop("variant", label))
}

fn link_registry() -> Arc<Registry> {
    let registry = Arc::new(Registry::new());
    let mut builder = registry.for_component("Link");
    for label in LINK_LABELS {
        builder = builder.add_example(label, variant_tree(label));
    }
    builder.register().unwrap();
    registry
}

#[test]
fn test_link_labels_keep_declaration_order() {
    let catalog = CatalogIndex::new(link_registry());
    assert_eq!(catalog.list_examples("Link").unwrap(), LINK_LABELS.to_vec());
}

#[test]
fn test_end_to_end_link_scenario() {
    let registry = link_registry();
    let catalog = CatalogIndex::new(Arc::clone(&registry));
    let dispatcher = RenderDispatcher::new(registry, DispatchOptions::default());

    assert_eq!(catalog.list_components().to_vec(), vec!["Link"]);

    let tree = dispatcher.render("Link", "Primary").unwrap();
    assert_eq!(tree.get_prop("variant"), Some("Primary"));

    let err = dispatcher.render("Link", "Nonexistent").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_every_registered_example_renders_its_producer_output() {
    let registry = link_registry();
    let dispatcher = RenderDispatcher::new(Arc::clone(&registry), DispatchOptions::default());

    for entry in registry.get("Link").unwrap() {
        let expected = entry.producer.invoke().unwrap();
        assert_eq!(dispatcher.render("Link", &entry.label).unwrap(), expected);
    }
}

#[test]
fn test_duplicate_after_builder_keeps_sequence() {
    let registry = link_registry();
    let err = registry
        .register("Link", "Primary", || Ok(RenderTree::element("other")))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateLabel { .. }));

    let catalog = CatalogIndex::new(registry);
    assert_eq!(catalog.list_examples("Link").unwrap(), LINK_LABELS.to_vec());
}

#[test]
fn test_broken_example_does_not_affect_navigation() {
    let registry = link_registry();
    registry
        .register("Link", "Broken", || anyhow::bail!("render error"))
        .unwrap();
    let catalog = CatalogIndex::new(Arc::clone(&registry));
    let dispatcher = RenderDispatcher::new(registry, DispatchOptions { memoize: true });

    assert!(matches!(
        dispatcher.render("Link", "Broken"),
        Err(CatalogError::Render(_))
    ));
    assert_eq!(catalog.list_examples("Link").unwrap().len(), 7);
    assert!(dispatcher.render("Link", "Disabled").is_ok());
}

#[test]
fn test_layout_helpers_build_labelled_rows() {
    let row = story_item("link:", RenderTree::element("link").prop("to", "/"));
    assert_eq!(row.children.len(), 2);
    assert_eq!(row.find("link").and_then(|l| l.get_prop("to")), Some("/"));

    let tree = story_container()
        .child(story_section("Variants").child(row))
        .child(story_divider())
        .child(code_block("Link::new()"));
    assert!(tree.find("hr").is_some());
    assert!(tree.find("pre").is_some());
}
