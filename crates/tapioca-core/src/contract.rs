//! Widget contracts and the attribute partitioner.
//!
//! A [`Contract`] describes one widget: the prop names it recognizes, the
//! element it renders by default, how its class list is composed, and how
//! its body is derived when neither `children` nor `content` is given.
//! Contracts are plain data built from `fn` pointers, so they can live in
//! `static`s and be shared across threads.

use crate::classes::ClassNames;
use crate::content::resolve_content;
use crate::element::{resolve_type, ElementType};
use crate::error::Result;
use crate::factory::{self, CreateOptions, Created, Shorthand};
use crate::node::{Child, Node};
use crate::props::Props;

/// Prop names every contract recognizes.
pub const COMMON_PROPS: &[&str] = &["as", "children", "className", "content", "key"];

/// Composes a widget's class tokens, excluding the caller's `className`.
pub type ClassFn = fn(&Props) -> ClassNames;
/// Builds the body used when neither `children` nor `content` is present.
pub type DeriveFn = fn(&Props) -> Result<Vec<Child>>;
/// Replaces the standard render entirely.
pub type RenderFn = fn(&Contract, &Props) -> Result<Node>;
/// Rejects props that violate the widget's rules before anything renders.
pub type ValidateFn = fn(&Props) -> Result<()>;

/// Everything the engine needs to know about a widget.
#[derive(Debug, Clone, Copy)]
pub struct Contract {
    name: &'static str,
    props: &'static [&'static str],
    default_as: Option<&'static str>,
    value_prop: &'static str,
    classes: Option<ClassFn>,
    derive: Option<DeriveFn>,
    render: Option<RenderFn>,
    validate: Option<ValidateFn>,
}

impl Contract {
    /// A contract recognizing only [`COMMON_PROPS`], rendering a `div`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            props: &[],
            default_as: None,
            value_prop: "content",
            classes: None,
            derive: None,
            render: None,
            validate: None,
        }
    }

    /// Widget-specific prop names, in addition to [`COMMON_PROPS`].
    pub const fn props(mut self, props: &'static [&'static str]) -> Self {
        self.props = props;
        self
    }

    /// Default tag when the `as` prop is not given.
    pub const fn default_as(mut self, tag: &'static str) -> Self {
        self.default_as = Some(tag);
        self
    }

    /// The prop a primitive shorthand is assigned to (default `content`).
    pub const fn value_prop(mut self, prop: &'static str) -> Self {
        self.value_prop = prop;
        self
    }

    pub const fn classes(mut self, f: ClassFn) -> Self {
        self.classes = Some(f);
        self
    }

    pub const fn derive(mut self, f: DeriveFn) -> Self {
        self.derive = Some(f);
        self
    }

    pub const fn render_with(mut self, f: RenderFn) -> Self {
        self.render = Some(f);
        self
    }

    pub const fn validate_with(mut self, f: ValidateFn) -> Self {
        self.validate = Some(f);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn primitive_prop(&self) -> &'static str {
        self.value_prop
    }

    pub fn default_type(&self) -> Option<ElementType> {
        self.default_as.map(ElementType::tag)
    }

    /// Whether `key` is a recognized prop of this contract.
    pub fn recognizes(&self, key: &str) -> bool {
        COMMON_PROPS.iter().chain(self.props).any(|p| *p == key)
    }

    /// The full class string: composed tokens followed by `className`.
    pub fn class_name(&self, props: &Props) -> String {
        let tokens = self.classes.map(|f| f(props)).unwrap_or_default();
        tokens.finish(props.get_str("className"))
    }

    /// Run the widget's derived-body function, if it has one.
    pub fn derive_body(&self, props: &Props) -> Result<Vec<Child>> {
        match self.derive {
            Some(f) => f(props),
            None => Ok(Vec::new()),
        }
    }

    /// Validate and render `props` into a node.
    pub fn render(&self, props: &Props) -> Result<Node> {
        if let Some(validate) = self.validate {
            validate(props)?;
        }
        log::debug!("rendering {} with {} props", self.name, props.len());
        match self.render {
            Some(f) => f(self, props),
            None => render_node(self, props),
        }
    }

    /// Resolve a shorthand value against this contract.
    pub fn create(&self, value: impl Into<Shorthand>, options: &CreateOptions) -> Result<Created> {
        factory::create(self, value.into(), options)
    }
}

/// Split `props` into the keys `contract` recognizes and everything else.
///
/// The two maps are disjoint and together hold exactly the input entries.
/// Explicitly supplied undefined values are kept on whichever side their
/// key belongs to.
pub fn partition(contract: &Contract, props: &Props) -> (Props, Props) {
    let mut recognized = Props::new();
    let mut unhandled = Props::new();
    for (key, value) in props.iter() {
        let side = if contract.recognizes(key) {
            &mut recognized
        } else {
            &mut unhandled
        };
        side.insert(key.clone(), value.clone());
    }
    (recognized, unhandled)
}

/// The props `contract` does not recognize, to forward to the element.
pub fn unhandled_props(contract: &Contract, props: &Props) -> Props {
    partition(contract, props).1
}

/// Standard render: compose classes, forward unhandled props, resolve the
/// element type, and pick the body by content precedence.
pub fn render_node(contract: &Contract, props: &Props) -> Result<Node> {
    let children = resolve_content(props.get("children"), props.get("content"), || {
        contract.derive_body(props)
    })?
    .into_children()?;
    Ok(shell(contract, props).with_children(children))
}

/// A node with class, attributes, element type and key filled in but no
/// children. Custom render functions start from this.
pub fn shell(contract: &Contract, props: &Props) -> Node {
    let element = resolve_type(props, contract.default_type().as_ref());
    let mut node = Node::new(element)
        .with_class(contract.class_name(props))
        .with_attributes(unhandled_props(contract, props));
    node.key = props.get("key").and_then(|k| k.to_token());
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::key_only;
    use crate::props;
    use crate::props::PropValue;

    fn header_classes(p: &Props) -> ClassNames {
        ClassNames::new()
            .maybe(key_only(p.get("fullWidth"), "full-width"))
            .token("header")
    }

    const HEADER: Contract = Contract::new("Header")
        .props(&["fullWidth"])
        .default_as("thead")
        .classes(header_classes);

    #[test]
    fn partition_is_disjoint_and_complete() {
        let p = props! {
            "fullWidth" => true,
            "className" => "x",
            "data-id" => 7,
            "onClick" => PropValue::Undefined,
        };
        let (recognized, unhandled) = partition(&HEADER, &p);
        assert_eq!(recognized.len() + unhandled.len(), p.len());
        for key in p.keys() {
            assert!(recognized.contains_key(key) ^ unhandled.contains_key(key));
        }
        assert!(unhandled.contains_key("onClick"));
        assert_eq!(unhandled.get("data-id"), Some(&PropValue::from(7)));
        assert!(recognized.contains_key("fullWidth"));
    }

    #[test]
    fn partition_leaves_input_untouched() {
        let p = props! { "fullWidth" => true, "title" => "t" };
        let before = p.clone();
        let _ = partition(&HEADER, &p);
        assert_eq!(p, before);
    }

    #[test]
    fn render_node_builds_shell_and_body() {
        let p = props! {
            "fullWidth" => true,
            "className" => "sticky",
            "content" => "Name",
            "title" => "t",
            "key" => "h1",
        };
        let node = HEADER.render(&p).unwrap();
        assert_eq!(node.element, ElementType::tag("thead"));
        assert_eq!(node.class_name.as_deref(), Some("full-width header sticky"));
        assert_eq!(node.children, vec![Child::Text("Name".into())]);
        assert_eq!(node.attributes, props! { "title" => "t" });
        assert_eq!(node.key.as_deref(), Some("h1"));
    }

    #[test]
    fn validation_runs_before_render() {
        fn reject(_: &Props) -> Result<()> {
            Err(crate::error::Error::Conflict {
                component: "Header".into(),
                prop: "a".into(),
                other: "b".into(),
            })
        }
        let strict = HEADER.validate_with(reject);
        assert!(strict.render(&props! {}).is_err());
    }

    #[test]
    fn derive_runs_only_without_content() {
        fn body(_: &Props) -> Result<Vec<Child>> {
            Ok(vec![Child::Text("derived".into())])
        }
        let group = Contract::new("Group").derive(body);
        let derived = group.render(&props! {}).unwrap();
        assert_eq!(derived.children, vec![Child::Text("derived".into())]);
        let flat = group.render(&props! { "content" => "flat" }).unwrap();
        assert_eq!(flat.children, vec![Child::Text("flat".into())]);
    }
}
