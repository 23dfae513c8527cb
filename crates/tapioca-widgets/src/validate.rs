//! Prop validation rules.
//!
//! Widgets declare a table of `(prop, rule)` pairs and run [`check`] from
//! their contract's validate hook, so a bad configuration is rejected
//! before any node is built. A prop may appear more than once; every rule
//! listed for it must pass. Absent, undefined and null props are skipped.

use tapioca_core::{to_children, Error, PropValue, Props, Result};

use crate::sui;

/// A constraint on a single prop.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Bool,
    Str,
    /// A string from the given set.
    OneOf(&'static [&'static str]),
    /// `true`/`false` or a string from the given set.
    BoolOrOneOf(&'static [&'static str]),
    /// A width: 1 to 16 as a number, numeric string or word.
    Width,
    /// Anything renderable as content: text, numbers, nodes, lists of them.
    Content,
    /// A single shorthand: text, number, node or configuration.
    Item,
    /// A list of shorthand items.
    Collection,
    /// Passes if any of the listed rules passes.
    AnyOf(&'static [Rule]),
    /// The prop may not be combined with any of the listed props.
    Disallow(&'static [&'static str]),
}

impl Rule {
    fn describe(&self) -> &'static str {
        match self {
            Rule::Bool => "a bool",
            Rule::Str => "a string",
            Rule::OneOf(_) => "a string",
            Rule::BoolOrOneOf(_) => "a bool or string",
            Rule::Width => "a width",
            Rule::Content => "renderable content",
            Rule::Item => "a shorthand item",
            Rule::Collection => "a list of shorthand items",
            Rule::AnyOf(_) => "one of the accepted shapes",
            Rule::Disallow(_) => "no conflicting props",
        }
    }

    fn accepts(&self, value: &PropValue) -> bool {
        match self {
            Rule::Bool => matches!(value, PropValue::Bool(_)),
            Rule::Str => matches!(value, PropValue::Str(_)),
            Rule::OneOf(allowed) => value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|a| *a == s)),
            Rule::BoolOrOneOf(allowed) => {
                matches!(value, PropValue::Bool(_)) || Rule::OneOf(*allowed).accepts(value)
            }
            Rule::Width => sui::is_width(value),
            Rule::Content => {
                !matches!(value, PropValue::Bool(true)) && to_children(value).is_ok()
            }
            Rule::Item => is_item(value),
            Rule::Collection => match value {
                PropValue::List(items) => items.iter().all(|i| !i.is_present() || is_item(i)),
                _ => false,
            },
            Rule::AnyOf(rules) => rules.iter().any(|r| r.accepts(value)),
            Rule::Disallow(_) => true,
        }
    }
}

fn is_item(value: &PropValue) -> bool {
    matches!(
        value,
        PropValue::Str(_) | PropValue::Number(_) | PropValue::Node(_) | PropValue::Props(_)
    )
}

/// Check `props` against `rules` for the named component.
pub fn check(component: &str, props: &Props, rules: &[(&str, Rule)]) -> Result<()> {
    for (prop, rule) in rules {
        let Some(value) = props.get_present(prop) else {
            continue;
        };
        if let Err(err) = check_one(component, prop, *rule, value, props) {
            log::warn!("{err}");
            return Err(err);
        }
    }
    Ok(())
}

fn check_one(component: &str, prop: &str, rule: Rule, value: &PropValue, props: &Props) -> Result<()> {
    if let Rule::Disallow(others) = rule {
        if let Some(other) = others.iter().find(|o| props.get_present(o).is_some()) {
            return Err(Error::Conflict {
                component: component.to_string(),
                prop: prop.to_string(),
                other: other.to_string(),
            });
        }
        return Ok(());
    }
    if rule.accepts(value) {
        return Ok(());
    }
    match (rule, value) {
        (Rule::OneOf(allowed) | Rule::BoolOrOneOf(allowed), PropValue::Str(s)) => {
            Err(Error::InvalidValue {
                component: component.to_string(),
                prop: prop.to_string(),
                value: s.clone(),
                allowed: allowed.join(", "),
            })
        }
        (Rule::Width, PropValue::Str(_) | PropValue::Number(_)) => Err(Error::InvalidValue {
            component: component.to_string(),
            prop: prop.to_string(),
            value: value.to_token().unwrap_or_default(),
            allowed: "1-16, one-sixteen".to_string(),
        }),
        _ => Err(Error::InvalidType {
            component: component.to_string(),
            prop: prop.to_string(),
            expected: rule.describe(),
            found: value.kind(),
        }),
    }
}
