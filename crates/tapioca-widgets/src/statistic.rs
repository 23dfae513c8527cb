//! Statistics and statistic groups.

use tapioca_core::classes::{float, key_only, width};
use tapioca_core::{props, Child, ClassNames, Contract, CreateOptions, Node, Props, Result, Shorthand};

use crate::sui;
use crate::validate::{check, Rule};

const SIZES: &[&str] = &["mini", "tiny", "small", "large", "huge"];

pub const STATISTIC_GROUP: Contract = Contract::new("StatisticGroup")
    .props(&["color", "horizontal", "inverted", "items", "size", "widths"])
    .classes(|p: &Props| {
        ClassNames::new()
            .token("ui")
            .value(p.get("color"))
            .value(p.get("size"))
            .maybe(key_only(p.get("horizontal"), "horizontal"))
            .maybe(key_only(p.get("inverted"), "inverted"))
            .maybe(width(p.get("widths"), None, false))
            .token("statistics")
    })
    .derive(group_items)
    .validate_with(|p: &Props| {
        check(
            "StatisticGroup",
            p,
            &[
                ("color", Rule::OneOf(sui::COLORS)),
                ("content", Rule::Content),
                ("horizontal", Rule::Bool),
                ("inverted", Rule::Bool),
                ("items", Rule::Collection),
                ("size", Rule::OneOf(SIZES)),
                ("widths", Rule::Width),
            ],
        )
    });

pub const STATISTIC: Contract = Contract::new("Statistic")
    .props(&[
        "color",
        "floated",
        "horizontal",
        "inverted",
        "label",
        "size",
        "text",
        "value",
    ])
    .classes(|p: &Props| {
        ClassNames::new()
            .token("ui")
            .value(p.get("color"))
            .value(p.get("size"))
            .maybe(float(p.get("floated")))
            .maybe(key_only(p.get("horizontal"), "horizontal"))
            .maybe(key_only(p.get("inverted"), "inverted"))
            .token("statistic")
    })
    .derive(statistic_parts)
    .validate_with(|p: &Props| {
        check(
            "Statistic",
            p,
            &[
                ("color", Rule::OneOf(sui::COLORS)),
                ("content", Rule::Content),
                ("floated", Rule::OneOf(sui::FLOATS)),
                ("horizontal", Rule::Bool),
                ("inverted", Rule::Bool),
                ("label", Rule::Item),
                ("size", Rule::OneOf(SIZES)),
                ("text", Rule::Bool),
                ("value", Rule::Item),
            ],
        )
    });

/// The number (or text, with `text`) of a statistic.
pub const STATISTIC_VALUE: Contract = Contract::new("StatisticValue")
    .props(&["text"])
    .classes(|p: &Props| {
        ClassNames::new()
            .maybe(key_only(p.get("text"), "text"))
            .token("value")
    });

pub const STATISTIC_LABEL: Contract =
    Contract::new("StatisticLabel").classes(|_: &Props| ClassNames::new().token("label"));

fn group_items(p: &Props) -> Result<Vec<Child>> {
    let items = Shorthand::from_prop(p.get("items"))?;
    Ok(STATISTIC.create(items, &CreateOptions::new())?.into_children())
}

fn statistic_parts(p: &Props) -> Result<Vec<Child>> {
    let mut value_defaults = Props::new();
    if let Some(text) = p.get("text") {
        value_defaults.insert("text", text.clone());
    }
    let value_options = CreateOptions::new()
        .auto_generate_key(false)
        .default_props(value_defaults);
    let label_options = CreateOptions::new().auto_generate_key(false);

    let mut children = STATISTIC_VALUE
        .create(Shorthand::from_prop(p.get("value"))?, &value_options)?
        .into_children();
    children.extend(
        STATISTIC_LABEL
            .create(Shorthand::from_prop(p.get("label"))?, &label_options)?
            .into_children(),
    );
    Ok(children)
}

/// Convenience for a single statistic built from a value and label.
pub fn statistic(value: impl Into<String>, label: impl Into<String>) -> Result<Node> {
    STATISTIC.render(&props! { "value" => value.into(), "label" => label.into() })
}
