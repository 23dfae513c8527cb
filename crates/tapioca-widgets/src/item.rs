//! Item content and its text parts.

use tapioca_core::classes::vertical_align;
use tapioca_core::{
    body_source, shell, to_children, ClassNames, Contract, CreateOptions, Node, Props, Result,
    Shorthand,
};

use crate::sui;
use crate::validate::{check, Rule};

pub const ITEM_HEADER: Contract = part("ItemHeader", |_: &Props| ClassNames::new().token("header"));
pub const ITEM_META: Contract = part("ItemMeta", |_: &Props| ClassNames::new().token("meta"));
pub const ITEM_DESCRIPTION: Contract =
    part("ItemDescription", |_: &Props| ClassNames::new().token("description"));
pub const ITEM_EXTRA: Contract = part("ItemExtra", |_: &Props| ClassNames::new().token("extra"));

const fn part(name: &'static str, classes: fn(&Props) -> ClassNames) -> Contract {
    Contract::new(name).classes(classes)
}

/// The body of an item. Without `children` it lays out its header, meta,
/// description and extra shorthands, then any `content`.
pub const ITEM_CONTENT: Contract = Contract::new("ItemContent")
    .props(&["description", "extra", "header", "meta", "verticalAlign"])
    .classes(|p: &Props| {
        ClassNames::new()
            .maybe(vertical_align(p.get("verticalAlign")))
            .token("content")
    })
    .render_with(render_content)
    .validate_with(|p: &Props| {
        check(
            "ItemContent",
            p,
            &[
                ("content", Rule::Content),
                ("description", Rule::Item),
                ("extra", Rule::Item),
                ("header", Rule::Item),
                ("meta", Rule::Item),
                ("verticalAlign", Rule::OneOf(sui::VERTICAL_ALIGNMENTS)),
            ],
        )
    });

fn render_content(contract: &Contract, p: &Props) -> Result<Node> {
    let node = shell(contract, p);
    if let Some(children) = body_source(p.get("children")) {
        return Ok(node.with_children(to_children(children)?));
    }

    let no_key = CreateOptions::new().auto_generate_key(false);
    let mut children = Vec::new();
    for (prop, part) in [
        ("header", &ITEM_HEADER),
        ("meta", &ITEM_META),
        ("description", &ITEM_DESCRIPTION),
        ("extra", &ITEM_EXTRA),
    ] {
        let value = Shorthand::from_prop(p.get(prop))?;
        children.extend(part.create(value, &no_key)?.into_children());
    }
    if let Some(content) = body_source(p.get("content")) {
        children.extend(to_children(content)?);
    }
    Ok(node.with_children(children))
}
