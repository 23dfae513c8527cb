//! Segment: a grouping of related content.

use tapioca_core::classes::{float, key_only, key_or_value_and_key, text_align};
use tapioca_core::{ClassNames, Contract, Props, Result};

use crate::sui;
use crate::validate::{check, Rule};

const FLAGS: &[&str] = &[
    "basic",
    "circular",
    "clearing",
    "compact",
    "disabled",
    "inverted",
    "loading",
    "placeholder",
    "piled",
    "raised",
    "secondary",
    "stacked",
    "tertiary",
    "vertical",
];

const SIZES: &[&str] = &["mini", "tiny", "small", "large", "big", "huge", "massive"];

const RULES: &[(&str, Rule)] = &[
    ("attached", Rule::BoolOrOneOf(&["top", "bottom"])),
    ("basic", Rule::Bool),
    ("circular", Rule::Bool),
    ("clearing", Rule::Bool),
    ("color", Rule::OneOf(sui::COLORS)),
    ("compact", Rule::Bool),
    ("content", Rule::Content),
    ("disabled", Rule::Bool),
    ("floated", Rule::OneOf(sui::FLOATS)),
    ("inverted", Rule::Bool),
    ("loading", Rule::Bool),
    ("padded", Rule::BoolOrOneOf(&["very"])),
    ("placeholder", Rule::Bool),
    ("piled", Rule::Bool),
    ("raised", Rule::Bool),
    ("secondary", Rule::Bool),
    ("size", Rule::OneOf(SIZES)),
    ("stacked", Rule::Bool),
    ("tertiary", Rule::Bool),
    ("textAlign", Rule::OneOf(sui::TEXT_ALIGNMENTS_UNJUSTIFIED)),
    ("vertical", Rule::Bool),
];

pub const SEGMENT: Contract = Contract::new("Segment")
    .props(&[
        "attached",
        "basic",
        "circular",
        "clearing",
        "color",
        "compact",
        "disabled",
        "floated",
        "inverted",
        "loading",
        "padded",
        "placeholder",
        "piled",
        "raised",
        "secondary",
        "size",
        "stacked",
        "tertiary",
        "textAlign",
        "vertical",
    ])
    .classes(classes)
    .validate_with(validate);

fn classes(p: &Props) -> ClassNames {
    let mut c = ClassNames::new()
        .token("ui")
        .value(p.get("color"))
        .value(p.get("size"));
    for flag in FLAGS {
        c = c.maybe(key_only(p.get(flag), flag));
    }
    c.maybe(key_or_value_and_key(p.get("attached"), "attached"))
        .maybe(key_or_value_and_key(p.get("padded"), "padded"))
        .maybe(text_align(p.get("textAlign")))
        .maybe(float(p.get("floated")))
        .token("segment")
}

fn validate(p: &Props) -> Result<()> {
    check("Segment", p, RULES)
}
