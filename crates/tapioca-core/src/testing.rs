//! Test helpers for rendering contracts and inspecting node trees.

use std::sync::Arc;

use crate::contract::Contract;
use crate::node::{Child, Node};
use crate::props::Props;

/// A headless harness that renders a [`Contract`] and inspects the result.
///
/// `TestRender` exists so widget tests read as "render these props, look at
/// this part of the tree" without unwrapping and walking children by hand.
/// Rendering failures panic with the error message, which is what a test
/// wants.
///
/// # Example
///
/// ```rust,ignore
/// use tapioca_core::testing::TestRender;
///
/// let out = TestRender::new(&CARD_GROUP).render(props! { "items" => items });
/// assert_eq!(out.class(), "ui cards");
/// assert_eq!(out.child_keys().len(), 2);
/// ```
pub struct TestRender<'c> {
    contract: &'c Contract,
}

/// A rendered node plus inspection helpers.
pub struct Rendered {
    node: Node,
}

impl<'c> TestRender<'c> {
    pub fn new(contract: &'c Contract) -> Self {
        Self { contract }
    }

    /// Render `props`, panicking on error.
    pub fn render(&self, props: Props) -> Rendered {
        match self.contract.render(&props) {
            Ok(node) => Rendered { node },
            Err(err) => panic!("{} failed to render: {err}", self.contract.name()),
        }
    }
}

impl Rendered {
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The class string, or `""` when the node has none.
    pub fn class(&self) -> &str {
        self.node.class_name.as_deref().unwrap_or_default()
    }

    /// All text in the tree, depth first, joined with spaces.
    pub fn text(&self) -> String {
        text_of(&self.node)
    }

    /// Keys of the direct child nodes, in order.
    pub fn child_keys(&self) -> Vec<Option<&str>> {
        self.node.child_nodes().map(|n| n.key.as_deref()).collect()
    }

    /// Descendant nodes whose class contains `token`, in document order.
    pub fn find(&self, token: &str) -> Vec<&Node> {
        find_by_class(&self.node, token)
    }
}

/// All text in a tree, depth first, joined with spaces.
pub fn text_of(node: &Node) -> String {
    let mut parts = Vec::new();
    collect_text(node, &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(node: &'a Node, parts: &mut Vec<&'a str>) {
    for child in &node.children {
        match child {
            Child::Text(t) => parts.push(t),
            Child::Node(n) => collect_text(n, parts),
        }
    }
}

/// Nodes under `node` (including itself) whose class contains `token`.
pub fn find_by_class<'a>(node: &'a Node, token: &str) -> Vec<&'a Node> {
    let mut found = Vec::new();
    walk(node, &mut |n| {
        if n.has_class(token) {
            found.push(n);
        }
    });
    found
}

/// Keys of a list of created nodes.
pub fn keys_of(nodes: &[Arc<Node>]) -> Vec<Option<String>> {
    nodes.iter().map(|n| n.key.clone()).collect()
}

fn walk<'a>(node: &'a Node, visit: &mut impl FnMut(&'a Node)) {
    visit(node);
    for child in node.child_nodes() {
        walk(child, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;
    use crate::props;

    fn tree() -> Node {
        Node::new(ElementType::default())
            .with_class("ui cards")
            .with_child(
                Node::new(ElementType::default())
                    .with_class("ui card")
                    .with_key("a")
                    .with_child("Alpha"),
            )
            .with_child(
                Node::new(ElementType::default())
                    .with_class("ui card")
                    .with_key("b")
                    .with_child("Beta"),
            )
    }

    #[test]
    fn text_is_depth_first() {
        assert_eq!(text_of(&tree()), "Alpha Beta");
    }

    #[test]
    fn find_by_class_walks_descendants() {
        let t = tree();
        assert_eq!(find_by_class(&t, "card").len(), 2);
        assert_eq!(find_by_class(&t, "ui").len(), 3);
    }

    #[test]
    fn harness_renders_contract() {
        const PLAIN: Contract = Contract::new("Plain");
        let out = TestRender::new(&PLAIN).render(props! { "content" => "x", "className" => "c" });
        assert_eq!(out.class(), "c");
        assert_eq!(out.text(), "x");
        assert!(out.child_keys().is_empty());
    }
}
