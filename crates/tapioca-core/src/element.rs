//! Element types and the element-type resolver.

use serde::Serialize;

use crate::props::{PropValue, Props};

/// Tag used when neither the props nor the contract name an element type.
pub const GENERIC_TAG: &str = "div";

/// The primitive a node renders as: a plain tag or a named custom component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum ElementType {
    Tag(String),
    Component(String),
}

impl ElementType {
    pub fn tag(name: impl Into<String>) -> Self {
        ElementType::Tag(name.into())
    }

    pub fn component(name: impl Into<String>) -> Self {
        ElementType::Component(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            ElementType::Tag(name) | ElementType::Component(name) => name,
        }
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Tag(GENERIC_TAG.to_string())
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the element type for a node.
///
/// The `as` prop wins unconditionally, then the contract default, then
/// [`GENERIC_TAG`]. A string `as` is read as a tag name. Never fails: an
/// `as` that is neither a string nor an element type is ignored.
pub fn resolve_type(props: &Props, default: Option<&ElementType>) -> ElementType {
    match props.get("as") {
        Some(PropValue::Element(e)) => e.clone(),
        Some(PropValue::Str(tag)) if !tag.is_empty() => ElementType::Tag(tag.clone()),
        _ => default.cloned().unwrap_or_default(),
    }
}
