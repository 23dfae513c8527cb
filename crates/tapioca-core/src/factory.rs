//! The shorthand factory.
//!
//! A shorthand is a compact description of a child node. It is classified
//! into a [`Shorthand`] variant up front, then expanded against a target
//! [`Contract`]:
//!
//! | Shorthand | Result |
//! |-----------|--------|
//! | `Empty` | [`Created::Nothing`] |
//! | `Node` | the same node, untouched |
//! | `Primitive` | the contract rendered with the value as its value prop |
//! | `Config` | the contract rendered with the configuration as props |
//! | `Collection` | each element resolved in order, with positional keys |
//!
//! The factory does not validate. Widget validation runs inside
//! [`Contract::render`] before any node is produced.

use std::sync::Arc;

use crate::classes;
use crate::contract::Contract;
use crate::error::{Error, Result};
use crate::keys::{self, KeyRegistry, KeyStrategy};
use crate::node::{Child, Node};
use crate::props::{PropValue, Props};

/// A string or number shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Str(String),
    Number(serde_json::Number),
}

impl Primitive {
    fn to_key_fragment(&self) -> String {
        match self {
            Primitive::Str(s) => s.clone(),
            Primitive::Number(n) => n.to_string(),
        }
    }
}

impl From<Primitive> for PropValue {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Str(s) => PropValue::Str(s),
            Primitive::Number(n) => PropValue::Number(n),
        }
    }
}

/// A shorthand value, classified before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Shorthand {
    Empty,
    Primitive(Primitive),
    Node(Arc<Node>),
    Config(Props),
    Collection(Vec<Shorthand>),
}

impl Shorthand {
    /// Classify an optional prop value. Absent, undefined and null are
    /// `Empty`; booleans and element types are not valid shorthand.
    pub fn from_prop(value: Option<&PropValue>) -> Result<Self> {
        match value {
            None => Ok(Shorthand::Empty),
            Some(v) => Shorthand::try_from(v.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Shorthand::Empty)
    }
}

impl TryFrom<PropValue> for Shorthand {
    type Error = Error;

    fn try_from(value: PropValue) -> Result<Self> {
        match value {
            PropValue::Undefined | PropValue::Null => Ok(Shorthand::Empty),
            PropValue::Str(s) => Ok(Shorthand::Primitive(Primitive::Str(s))),
            PropValue::Number(n) => Ok(Shorthand::Primitive(Primitive::Number(n))),
            PropValue::Node(n) => Ok(Shorthand::Node(n)),
            PropValue::Props(p) => Ok(Shorthand::Config(p)),
            PropValue::List(items) => items
                .into_iter()
                .map(Shorthand::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Shorthand::Collection),
            other @ (PropValue::Bool(_) | PropValue::Element(_)) => {
                Err(Error::UnsupportedShorthand(other.kind()))
            }
        }
    }
}

impl From<&str> for Shorthand {
    fn from(s: &str) -> Self {
        Shorthand::Primitive(Primitive::Str(s.to_string()))
    }
}

impl From<String> for Shorthand {
    fn from(s: String) -> Self {
        Shorthand::Primitive(Primitive::Str(s))
    }
}

impl From<Props> for Shorthand {
    fn from(p: Props) -> Self {
        Shorthand::Config(p)
    }
}

impl From<Node> for Shorthand {
    fn from(n: Node) -> Self {
        Shorthand::Node(Arc::new(n))
    }
}

impl From<Arc<Node>> for Shorthand {
    fn from(n: Arc<Node>) -> Self {
        Shorthand::Node(n)
    }
}

impl<T: Into<Shorthand>> From<Vec<T>> for Shorthand {
    fn from(items: Vec<T>) -> Self {
        Shorthand::Collection(items.into_iter().map(Into::into).collect())
    }
}

/// Props applied on top of the shorthand's own configuration.
#[derive(Debug, Clone)]
pub enum Overrides {
    Props(Props),
    /// Computed from the merged default and shorthand props.
    With(fn(&Props) -> Props),
}

/// Options for [`create`].
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Derive a key when the shorthand has none. Disable for single slots
    /// whose parent already guarantees uniqueness.
    pub auto_generate_key: bool,
    /// Props merged underneath the shorthand's configuration.
    pub default_props: Option<Props>,
    /// Props merged over the shorthand's configuration.
    pub override_props: Option<Overrides>,
    pub key_strategy: KeyStrategy,
    /// Position of a single shorthand within its parent, used for key
    /// derivation. Collections supply positions themselves.
    pub index: Option<usize>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            auto_generate_key: true,
            default_props: None,
            override_props: None,
            key_strategy: KeyStrategy::default(),
            index: None,
        }
    }
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_generate_key(mut self, enabled: bool) -> Self {
        self.auto_generate_key = enabled;
        self
    }

    pub fn default_props(mut self, props: Props) -> Self {
        self.default_props = Some(props);
        self
    }

    pub fn override_props(mut self, props: Props) -> Self {
        self.override_props = Some(Overrides::Props(props));
        self
    }

    pub fn override_with(mut self, f: fn(&Props) -> Props) -> Self {
        self.override_props = Some(Overrides::With(f));
        self
    }

    pub fn key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// What [`create`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Nothing,
    Node(Arc<Node>),
    Nodes(Vec<Arc<Node>>),
}

impl Created {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Created::Nothing)
    }

    /// The single node, if exactly one was produced.
    pub fn node(&self) -> Option<&Arc<Node>> {
        match self {
            Created::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_nodes(self) -> Vec<Arc<Node>> {
        match self {
            Created::Nothing => Vec::new(),
            Created::Node(n) => vec![n],
            Created::Nodes(nodes) => nodes,
        }
    }

    pub fn into_children(self) -> Vec<Child> {
        self.into_nodes().into_iter().map(Child::Node).collect()
    }
}

/// Resolve `value` against `contract`.
pub fn create(contract: &Contract, value: Shorthand, options: &CreateOptions) -> Result<Created> {
    match value {
        Shorthand::Collection(items) => create_collection(contract, items, options),
        single => Ok(create_one(contract, single, options, options.index, None)?
            .map_or(Created::Nothing, Created::Node)),
    }
}

fn create_collection(
    contract: &Contract,
    items: Vec<Shorthand>,
    options: &CreateOptions,
) -> Result<Created> {
    log::trace!("{}: resolving collection of {}", contract.name(), items.len());
    let mut registry = KeyRegistry::new();
    for item in &items {
        if let Some(key) = explicit_key_of(contract, item, options) {
            registry.reserve(&key);
        }
    }
    let mut nodes = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if matches!(item, Shorthand::Collection(_)) {
            return Err(Error::UnsupportedShorthand("nested collection"));
        }
        if let Some(node) = create_one(contract, item, options, Some(index), Some(&mut registry))? {
            nodes.push(node);
        }
    }
    Ok(Created::Nodes(nodes))
}

fn create_one(
    contract: &Contract,
    value: Shorthand,
    options: &CreateOptions,
    index: Option<usize>,
    registry: Option<&mut KeyRegistry>,
) -> Result<Option<Arc<Node>>> {
    let (user, derived_key) = match value {
        Shorthand::Empty => return Ok(None),
        Shorthand::Node(node) => {
            if let (Some(registry), Some(key)) = (registry, node.key.as_deref()) {
                registry.reserve(key);
            }
            return Ok(Some(node));
        }
        Shorthand::Collection(_) => return Err(Error::UnsupportedShorthand("nested collection")),
        Shorthand::Primitive(p) => {
            let key = keys::primitive_key(&p.to_key_fragment(), index);
            (primitive_props(contract, p), key)
        }
        Shorthand::Config(props) => {
            let key = keys::config_key(options.key_strategy, &props, index)?;
            (props, key)
        }
    };

    let mut props = merge_props(&user, options);
    let explicit = explicit_key(&props);
    props.remove("childKey");

    match (explicit, registry) {
        (Some(key), registry) => {
            if let Some(registry) = registry {
                registry.reserve(&key);
            }
            props.insert("key", key);
        }
        (None, registry) if options.auto_generate_key => {
            let key = match (registry, index) {
                (Some(registry), Some(i)) => registry.claim(derived_key, i),
                _ => derived_key,
            };
            log::trace!("{}: derived key {key}", contract.name());
            props.insert("key", key);
        }
        (None, _) => {}
    }

    contract.render(&props).map(|node| Some(Arc::new(node)))
}

fn primitive_props(contract: &Contract, value: Primitive) -> Props {
    let mut props = Props::new();
    props.insert(contract.primitive_prop(), value);
    props
}

/// `key`, else `childKey`.
fn explicit_key(props: &Props) -> Option<String> {
    props
        .get_present("key")
        .and_then(PropValue::to_token)
        .or_else(|| props.get_present("childKey").and_then(PropValue::to_token))
}

/// The explicit key `item` will render with, if any, so a collection can
/// reserve it before deriving keys for earlier items.
fn explicit_key_of(
    contract: &Contract,
    item: &Shorthand,
    options: &CreateOptions,
) -> Option<String> {
    match item {
        Shorthand::Node(node) => node.key.clone(),
        Shorthand::Config(props) => explicit_key(&merge_props(props, options)),
        Shorthand::Primitive(p) => {
            explicit_key(&merge_props(&primitive_props(contract, p.clone()), options))
        }
        Shorthand::Empty | Shorthand::Collection(_) => None,
    }
}

/// Layer defaults, the shorthand's own props and overrides, in that order.
/// `className` values are concatenated and `style` maps merged rather than
/// replaced.
fn merge_props(user: &Props, options: &CreateOptions) -> Props {
    let defaults = options.default_props.clone().unwrap_or_default();
    let mut merged = defaults.clone();
    merged.merge(user);

    let overrides = match &options.override_props {
        Some(Overrides::Props(p)) => p.clone(),
        Some(Overrides::With(f)) => f(&merged),
        None => Props::new(),
    };
    merged.merge(&overrides);

    let class_name = classes::merge(&[
        defaults.get_str("className"),
        overrides.get_str("className"),
        user.get_str("className"),
    ]);
    if let Some(class_name) = class_name {
        merged.insert("className", class_name);
    }

    let styles: Vec<&Props> = [&defaults, user, &overrides]
        .into_iter()
        .filter_map(|p| p.get("style").and_then(PropValue::as_props))
        .collect();
    if !styles.is_empty() {
        let mut style = Props::new();
        for s in styles {
            style.merge(s);
        }
        merged.insert("style", style);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;
    use crate::props;

    const LABEL: Contract = Contract::new("Label").props(&["detail"]);
    const IMAGE: Contract = Contract::new("Image").default_as("img").value_prop("src");

    fn keys_of(created: Created) -> Vec<Option<String>> {
        created.into_nodes().iter().map(|n| n.key.clone()).collect()
    }

    #[test]
    fn empty_short_circuits() {
        let created = create(&LABEL, Shorthand::Empty, &CreateOptions::new()).unwrap();
        assert!(created.is_nothing());
        let from_null = Shorthand::from_prop(Some(&PropValue::Null)).unwrap();
        assert!(from_null.is_empty());
        assert!(Shorthand::from_prop(None).unwrap().is_empty());
    }

    #[test]
    fn prebuilt_node_passes_through() {
        let node = Arc::new(Node::new(ElementType::tag("em")).with_key("mine"));
        let created = create(&LABEL, Shorthand::Node(Arc::clone(&node)), &CreateOptions::new())
            .unwrap();
        assert!(Arc::ptr_eq(created.node().unwrap(), &node));
    }

    #[test]
    fn primitive_becomes_value_prop() {
        let created = LABEL.create("hello", &CreateOptions::new()).unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.children, vec![Child::Text("hello".into())]);
        assert_eq!(node.key.as_deref(), Some("hello"));

        let created = IMAGE.create("cat.png", &CreateOptions::new()).unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.element, ElementType::tag("img"));
        assert_eq!(node.attributes.get_str("src"), Some("cat.png"));
    }

    #[test]
    fn config_props_pass_through() {
        let created = LABEL
            .create(props! { "content" => "x", "title" => "t" }, &CreateOptions::new())
            .unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.attributes.get_str("title"), Some("t"));
        assert!(node.key.is_some());
    }

    #[test]
    fn explicit_key_wins() {
        let created = LABEL
            .create(props! { "key" => "k", "childKey" => "c" }, &CreateOptions::new())
            .unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.key.as_deref(), Some("k"));
        assert!(!node.attributes.contains_key("childKey"));
    }

    #[test]
    fn child_key_used_when_no_key() {
        let created = LABEL
            .create(props! { "childKey" => 9 }, &CreateOptions::new().auto_generate_key(false))
            .unwrap();
        assert_eq!(created.node().unwrap().key.as_deref(), Some("9"));
    }

    #[test]
    fn no_key_forced_without_auto_generation() {
        let options = CreateOptions::new().auto_generate_key(false);
        let created = LABEL.create(props! { "content" => "x" }, &options).unwrap();
        assert!(created.node().unwrap().key.is_none());
    }

    #[test]
    fn collection_keys_are_stable_and_unique() {
        let items = || {
            Shorthand::from(vec![
                props! { "content" => "a" },
                props! { "content" => "b" },
                props! { "content" => "a" },
            ])
        };
        let first = keys_of(create(&LABEL, items(), &CreateOptions::new()).unwrap());
        let second = keys_of(create(&LABEL, items(), &CreateOptions::new()).unwrap());
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert!(first.iter().all(Option::is_some));
        assert_ne!(first[0], first[2]);
    }

    #[test]
    fn field_strategy_deduplicates() {
        let options = CreateOptions::new().key_strategy(KeyStrategy::Fields(&["content"]));
        let items = Shorthand::from(vec![
            props! { "content" => "a" },
            props! { "content" => "a" },
        ]);
        let keys = keys_of(create(&LABEL, items, &options).unwrap());
        assert_eq!(keys, vec![Some("a".to_string()), Some("a~1".to_string())]);
    }

    #[test]
    fn derived_key_yields_to_later_explicit_key() {
        let options = CreateOptions::new().key_strategy(KeyStrategy::Fields(&["content"]));
        let items = Shorthand::from(vec![
            props! { "content" => "a" },
            props! { "key" => "a", "content" => "b" },
            props! { "childKey" => "c", "content" => "x" },
            props! { "content" => "c" },
        ]);
        let keys = keys_of(create(&LABEL, items, &options).unwrap());
        assert_eq!(
            keys,
            vec![
                Some("a~0".to_string()),
                Some("a".to_string()),
                Some("c".to_string()),
                Some("c~3".to_string()),
            ]
        );
    }

    #[test]
    fn derived_key_yields_to_later_prebuilt_node_key() {
        let node = Node::new(ElementType::tag("em")).with_key("0-one");
        let items = Shorthand::Collection(vec![Shorthand::from("one"), Shorthand::from(node)]);
        let keys = keys_of(create(&LABEL, items, &CreateOptions::new()).unwrap());
        assert_eq!(keys, vec![Some("0-one~0".to_string()), Some("0-one".to_string())]);
    }

    #[test]
    fn collection_preserves_order_and_skips_empty() {
        let items = Shorthand::Collection(vec![
            Shorthand::from("one"),
            Shorthand::Empty,
            Shorthand::from("three"),
        ]);
        let nodes = create(&LABEL, items, &CreateOptions::new()).unwrap().into_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].key.as_deref(), Some("0-one"));
        assert_eq!(nodes[1].key.as_deref(), Some("2-three"));
    }

    #[test]
    fn nested_collections_are_rejected() {
        let items = Shorthand::Collection(vec![Shorthand::Collection(vec![])]);
        assert!(matches!(
            create(&LABEL, items, &CreateOptions::new()),
            Err(Error::UnsupportedShorthand("nested collection"))
        ));
    }

    #[test]
    fn booleans_are_not_shorthand() {
        let err = Shorthand::try_from(PropValue::Bool(true)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedShorthand("bool")));
    }

    #[test]
    fn defaults_and_overrides_layer() {
        let options = CreateOptions::new()
            .default_props(props! { "title" => "default", "className" => "d", "lang" => "en" })
            .override_props(props! { "title" => "forced", "className" => "o" });
        let created = LABEL
            .create(props! { "title" => "user", "className" => "u" }, &options)
            .unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.attributes.get_str("title"), Some("forced"));
        assert_eq!(node.attributes.get_str("lang"), Some("en"));
        assert_eq!(node.class_name.as_deref(), Some("d o u"));
    }

    #[test]
    fn override_function_sees_merged_props() {
        fn shout(p: &Props) -> Props {
            let content = p.get_str("content").unwrap_or_default().to_uppercase();
            props! { "content" => content }
        }
        let options = CreateOptions::new().override_with(shout);
        let created = LABEL.create("quiet", &options).unwrap();
        assert_eq!(created.node().unwrap().children, vec![Child::Text("QUIET".into())]);
    }

    #[test]
    fn styles_merge_shallowly() {
        let options = CreateOptions::new()
            .default_props(props! { "style" => props! { "color" => "red", "margin" => 0 } })
            .override_props(props! { "style" => props! { "color" => "blue" } });
        let created = LABEL
            .create(props! { "style" => props! { "padding" => 1 } }, &options)
            .unwrap();
        let style = created.node().unwrap().attributes.get("style").cloned();
        assert_eq!(
            style,
            Some(PropValue::Props(props! { "color" => "blue", "margin" => 0, "padding" => 1 }))
        );
    }
}
