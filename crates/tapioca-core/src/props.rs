//! Prop values and prop maps.
//!
//! [`Props`] is the configuration handed to a widget on every resolution.
//! It is an ordered map so that forwarding, fingerprinting and rendering
//! are deterministic regardless of the order keys were inserted in.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::element::ElementType;
use crate::error::{Error, Result};
use crate::node::Node;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Explicitly supplied but empty. Still counts as a supplied key when
    /// partitioning, so an unrecognized `Undefined` prop is forwarded.
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    /// An element type, used by the `as` override.
    Element(ElementType),
    /// A prebuilt node.
    Node(Arc<Node>),
    /// Nested configuration.
    Props(Props),
    /// An ordered collection.
    List(Vec<PropValue>),
}

impl PropValue {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Undefined => "undefined",
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Number(_) => "number",
            PropValue::Str(_) => "string",
            PropValue::Element(_) => "element type",
            PropValue::Node(_) => "node",
            PropValue::Props(_) => "props",
            PropValue::List(_) => "list",
        }
    }

    /// Neither undefined nor null.
    pub fn is_present(&self) -> bool {
        !matches!(self, PropValue::Undefined | PropValue::Null)
    }

    /// Truthiness used by flag-style class composers.
    ///
    /// Empty strings, zero, `false`, null and undefined are falsy; every
    /// structured value is truthy, including empty lists.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Undefined | PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            PropValue::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_props(&self) -> Option<&Props> {
        match self {
            PropValue::Props(p) => Some(p),
            _ => None,
        }
    }

    /// The value as a class token or key fragment: strings verbatim,
    /// numbers in their shortest decimal form.
    pub fn to_token(&self) -> Option<String> {
        match self {
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for PropValue {
            fn from(n: $t) -> Self {
                PropValue::Number(n.into())
            }
        })*
    };
}

impl_from_integer!(i32, i64, u8, u16, u32, u64, usize);

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(PropValue::Null, PropValue::Number)
    }
}

impl From<ElementType> for PropValue {
    fn from(e: ElementType) -> Self {
        PropValue::Element(e)
    }
}

impl From<Node> for PropValue {
    fn from(n: Node) -> Self {
        PropValue::Node(Arc::new(n))
    }
}

impl From<Arc<Node>> for PropValue {
    fn from(n: Arc<Node>) -> Self {
        PropValue::Node(n)
    }
}

impl From<Props> for PropValue {
    fn from(p: Props) -> Self {
        PropValue::Props(p)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        PropValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(b),
            Value::Number(n) => PropValue::Number(n),
            Value::String(s) => PropValue::Str(s),
            Value::Array(items) => PropValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => PropValue::Props(
                map.into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PropValue::Undefined => serializer.serialize_unit(),
            PropValue::Null => serializer.serialize_none(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => n.serialize(serializer),
            PropValue::Str(s) => serializer.serialize_str(s),
            PropValue::Element(e) => e.serialize(serializer),
            PropValue::Node(n) => n.serialize(serializer),
            PropValue::Props(p) => p.serialize(serializer),
            PropValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// An ordered map of prop names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Decode props from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Convert a JSON value into props. Anything but an object is rejected.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match PropValue::from(value) {
            PropValue::Props(p) => Ok(p),
            other => Err(Error::InvalidType {
                component: "Props".into(),
                prop: "<root>".into(),
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Like [`get`](Props::get), but treats undefined and null as absent.
    pub fn get_present(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key).filter(|v| v.is_present())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(PropValue::as_str)
    }

    /// Whether `key` holds a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(PropValue::is_truthy)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.remove(key)
    }

    /// Copy every entry of `other` into `self`, overwriting on collision.
    pub fn merge(&mut self, other: &Props) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Build a [`Props`] map from `key => value` pairs.
///
/// ```
/// use tapioca_core::props;
///
/// let p = props! { "basic" => true, "color" => "red" };
/// assert!(p.flag("basic"));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::props::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::props::Props::new();
        $( props.insert($key, $value); )+
        props
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_flag_semantics() {
        assert!(!PropValue::Undefined.is_truthy());
        assert!(!PropValue::from(false).is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(!PropValue::from(0).is_truthy());
        assert!(PropValue::from("text").is_truthy());
        assert!(PropValue::from(3).is_truthy());
        assert!(PropValue::List(vec![]).is_truthy());
    }

    #[test]
    fn present_excludes_null_and_undefined() {
        let p = props! {
            "a" => PropValue::Undefined,
            "b" => PropValue::Null,
            "c" => "x",
        };
        assert!(p.contains_key("a"));
        assert!(p.get_present("a").is_none());
        assert!(p.get_present("b").is_none());
        assert_eq!(p.get_present("c"), Some(&PropValue::from("x")));
    }

    #[test]
    fn numbers_render_as_tokens() {
        assert_eq!(PropValue::from(3).to_token().as_deref(), Some("3"));
        assert_eq!(PropValue::from(2.5).to_token().as_deref(), Some("2.5"));
        assert_eq!(PropValue::from(true).to_token(), None);
    }

    #[test]
    fn nan_becomes_null() {
        assert_eq!(PropValue::from(f64::NAN), PropValue::Null);
    }

    #[test]
    fn from_json_builds_nested_props() {
        let p = Props::from_json(r#"{"items": [{"header": "A"}, {"header": "B"}], "centered": true}"#)
            .unwrap();
        assert!(p.flag("centered"));
        let PropValue::List(items) = p.get("items").unwrap() else {
            panic!("items should be a list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_props().unwrap().get_str("header"), Some("A"));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Props::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidType { expected: "object", .. }));
    }

    #[test]
    fn merge_overwrites() {
        let mut a = props! { "x" => 1, "y" => 2 };
        a.merge(&props! { "y" => 3 });
        assert_eq!(a.get("y"), Some(&PropValue::from(3)));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn serializes_in_key_order() {
        let p = props! { "z" => 1, "a" => "b", "m" => PropValue::Null };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"a":"b","m":null,"z":1}"#);
    }
}
