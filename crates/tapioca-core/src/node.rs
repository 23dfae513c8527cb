//! The renderable node tree produced by resolution.

use std::sync::Arc;

use serde::Serialize;

use crate::element::ElementType;
use crate::error::{Error, Result};
use crate::props::{PropValue, Props};

/// A resolved node: element type, class names, forwarded attributes,
/// children and an optional reconciliation key.
///
/// Nodes are immutable once built. Children are shared through [`Arc`] so a
/// prebuilt node can be passed through the shorthand factory without being
/// copied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub element: ElementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Props::is_empty")]
    pub attributes: Props,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
}

/// One entry of a node's body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(Arc<Node>),
}

impl Node {
    pub fn new(element: ElementType) -> Self {
        Self {
            element,
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the class name; an empty string clears it.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        self.class_name = (!class_name.is_empty()).then_some(class_name);
        self
    }

    pub fn with_attributes(mut self, attributes: Props) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    /// Whether the class name contains `token` as a whole word.
    pub fn has_class(&self, token: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|t| t == token))
    }

    /// Child nodes, skipping text.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Arc<Node>> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            Child::Text(_) => None,
        })
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

impl From<Node> for Child {
    fn from(n: Node) -> Self {
        Child::Node(Arc::new(n))
    }
}

impl From<Arc<Node>> for Child {
    fn from(n: Arc<Node>) -> Self {
        Child::Node(n)
    }
}

/// Flatten a prop value into renderable children.
///
/// Strings and numbers become text, nodes are shared, lists are flattened
/// in order. Booleans, null and undefined render nothing. Nested props
/// and element types cannot be rendered and are rejected.
pub fn to_children(value: &PropValue) -> Result<Vec<Child>> {
    let mut out = Vec::new();
    push_children(value, &mut out)?;
    Ok(out)
}

fn push_children(value: &PropValue, out: &mut Vec<Child>) -> Result<()> {
    match value {
        PropValue::Undefined | PropValue::Null | PropValue::Bool(_) => {}
        PropValue::Number(n) => out.push(Child::Text(n.to_string())),
        PropValue::Str(s) => out.push(Child::Text(s.clone())),
        PropValue::Node(n) => out.push(Child::Node(Arc::clone(n))),
        PropValue::List(items) => {
            for item in items {
                push_children(item, out)?;
            }
        }
        PropValue::Props(_) | PropValue::Element(_) => {
            return Err(Error::InvalidChild(value.kind()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_class_ignores_empty() {
        let n = Node::new(ElementType::default()).with_class("");
        assert!(n.class_name.is_none());
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let n = Node::new(ElementType::default()).with_class("ui cards");
        assert!(n.has_class("cards"));
        assert!(!n.has_class("card"));
    }

    #[test]
    fn to_children_flattens_lists() {
        let shared = Arc::new(Node::new(ElementType::tag("span")));
        let value = PropValue::List(vec![
            PropValue::from("a"),
            PropValue::List(vec![PropValue::from(2), PropValue::Null]),
            PropValue::Node(Arc::clone(&shared)),
            PropValue::Bool(true),
        ]);
        let children = to_children(&value).unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], Child::Text("a".into()));
        assert_eq!(children[1], Child::Text("2".into()));
        match &children[2] {
            Child::Node(n) => assert!(Arc::ptr_eq(n, &shared)),
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn to_children_rejects_objects() {
        let value = PropValue::Props(crate::props! { "header" => "A" });
        assert!(matches!(to_children(&value), Err(Error::InvalidChild("props"))));
    }

    #[test]
    fn serializes_compactly() {
        let n = Node::new(ElementType::tag("p")).with_child("hi");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"element":{"kind":"tag","name":"p"},"children":["hi"]}"#);
    }
}
