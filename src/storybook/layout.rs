use super::RenderTree;

/// Container for story content
pub fn story_container() -> RenderTree {
    RenderTree::element("div")
        .prop("layout", "column")
        .prop("gap", "16")
        .prop("padding", "16")
        .prop("background", "#1e1e1e")
}

/// Section with title
pub fn story_section(title: &str) -> RenderTree {
    RenderTree::element("div")
        .prop("layout", "column")
        .prop("gap", "8")
        .child(RenderTree::element("span").prop("color", "#888888").child(title))
}

/// Item row with label and element
pub fn story_item(label: &str, element: impl Into<RenderTree>) -> RenderTree {
    RenderTree::element("div")
        .prop("layout", "row")
        .prop("align", "center")
        .prop("gap", "16")
        .child(
            RenderTree::element("span")
                .prop("width", "120")
                .prop("color", "#666666")
                .child(label),
        )
        .child(element)
}

/// Code block for examples
pub fn code_block(code: &str) -> RenderTree {
    RenderTree::element("pre")
        .prop("font", "Menlo")
        .prop("padding", "8")
        .prop("background", "#2d2d2d")
        .child(code)
}

/// Horizontal divider
pub fn story_divider() -> RenderTree {
    RenderTree::element("hr").prop("color", "#3d3d3d")
}
